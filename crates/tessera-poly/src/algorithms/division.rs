//! Division by a precomputed power series inverse.
//!
//! For a divisor `c` of degree `d`, let `cinv` be the inverse of
//! `reverse(c)` modulo `x^(d+1)`. Any dividend of degree at most `2d` can then
//! be reduced with two truncated products and no field inversions.

use tessera_rings::traits::Field;

use crate::dense::DensePoly;

/// Inverse of `f` as a power series, modulo `x^n`.
///
/// Uses Newton iteration `g <- g * (2 - f * g)`, doubling the precision
/// each step.
///
/// # Panics
///
/// Panics if `n == 0` or the constant term of `f` is not invertible.
#[must_use]
pub fn inv_series_newton<F: Field>(f: &DensePoly<F>, n: usize) -> DensePoly<F> {
    assert!(n > 0, "series inverse needs a positive precision");
    let c0 = match f.coeff(0).inv() {
        Some(inv) => inv,
        None => panic!("constant term is not invertible"),
    };

    let two = DensePoly::constant(F::from_i64(2));
    let mut g = DensePoly::constant(c0);
    let mut prec = 1;

    while prec < n {
        prec = (2 * prec).min(n);
        let fg = f.mul_low(&g, prec);
        g = g.mul_low(&two.sub(&fg), prec);
    }

    g
}

/// Remainder of `a` modulo `c`, given `cinv = inv_series_newton(reverse(c), len)`.
///
/// `cinv` must be accurate to at least `deg a - deg c + 1` terms; the
/// inverse to `len(c)` terms covers every dividend of degree up to `2 deg c`.
///
/// # Panics
///
/// Panics if `c` is zero.
#[must_use]
pub fn rem_preinv<F: Field>(a: &DensePoly<F>, c: &DensePoly<F>, cinv: &DensePoly<F>) -> DensePoly<F> {
    assert!(!c.is_zero(), "polynomial division by zero");

    let d = c.degree();
    if a.is_zero() || a.degree() < d {
        return a.clone();
    }
    if d == 0 {
        return DensePoly::zero();
    }

    let n = a.degree();
    let qlen = n - d + 1;

    // rev(a) = rev(q) * rev(c) mod x^qlen
    let q_rev = a.reverse(n + 1).mul_low(cinv, qlen);
    let q = q_rev.reverse(qlen);

    a.sub(&q.mul(c)).truncate(d)
}
