//! Polynomial composition and modular composition.
//!
//! Modular composition `a(b) mod c` is evaluated by Horner's rule, reducing
//! after every step with the precomputed inverse of `reverse(c)`, so no
//! intermediate ever exceeds degree `2 deg c - 2`.
//!
//! All operations borrow their inputs and return a fresh polynomial, so the
//! result may be assigned back over any input (`a = a.compose_mod_preinv(..)`).

use tessera_rings::traits::{Field, Ring};

use crate::algorithms::division::{inv_series_newton, rem_preinv};
use crate::dense::DensePoly;

/// Computes `a(b)`.
#[must_use]
pub fn compose<R: Ring>(a: &DensePoly<R>, b: &DensePoly<R>) -> DensePoly<R> {
    let mut result = DensePoly::zero();
    for c in a.coeffs().iter().rev() {
        result = result.mul(b).add(&DensePoly::constant(c.clone()));
    }
    result
}

/// Computes `a(b) mod c` given `cinv`, the inverse of `reverse(c)` modulo
/// `x^len(c)`, as produced by `inv_series_newton(&c.reverse(c.len()), c.len())`.
///
/// The result equals `compose(a, b).rem(c)`.
///
/// # Panics
///
/// Panics if `c` is zero.
#[must_use]
pub fn compose_mod_preinv<F: Field>(
    a: &DensePoly<F>,
    b: &DensePoly<F>,
    c: &DensePoly<F>,
    cinv: &DensePoly<F>,
) -> DensePoly<F> {
    assert!(!c.is_zero(), "modular composition by the zero polynomial");

    if c.degree() == 0 {
        return DensePoly::zero();
    }

    let b = if b.degree() >= c.degree() { b.rem(c) } else { b.clone() };

    let mut result = DensePoly::zero();
    for coeff in a.coeffs().iter().rev() {
        let step = result.mul(&b).add(&DensePoly::constant(coeff.clone()));
        result = rem_preinv(&step, c, cinv);
    }
    result
}

/// Computes `a(b) mod c`, deriving the inverse of `reverse(c)` itself.
///
/// # Panics
///
/// Panics if `c` is zero or its leading coefficient is not invertible.
#[must_use]
pub fn compose_mod<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>, c: &DensePoly<F>) -> DensePoly<F> {
    assert!(!c.is_zero(), "modular composition by the zero polynomial");
    let cinv = inv_series_newton(&c.reverse(c.len()), c.len());
    compose_mod_preinv(a, b, c, &cinv)
}

impl<R: Ring> DensePoly<R> {
    /// Computes `self(other)`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        compose(self, other)
    }
}

impl<F: Field> DensePoly<F> {
    /// Computes `self(b) mod c` given the precomputed inverse of `reverse(c)`.
    ///
    /// # Panics
    ///
    /// Panics if `c` is zero.
    #[must_use]
    pub fn compose_mod_preinv(&self, b: &Self, c: &Self, cinv: &Self) -> Self {
        compose_mod_preinv(self, b, c, cinv)
    }
}
