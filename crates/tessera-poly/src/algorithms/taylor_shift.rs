//! Taylor shift: computing `f(x + c)`.
//!
//! Two algorithms are provided:
//! - Horner-style sweeps, O(n²) ring operations with tiny constants
//! - Divide and conquer, `f(x+c) = lo(x+c) + (x+c)^k hi(x+c)`, which wins
//!   once multiplication is subquadratic
//!
//! [`taylor_shift`] chooses between them by length.

use tessera_rings::traits::Ring;

use crate::dense::DensePoly;

/// Polynomials with at most this many coefficients are shifted by Horner.
pub const TAYLOR_SHIFT_CUTOFF: usize = 256;

/// Recursion floor of the divide-and-conquer shift.
const DIVCONQUER_BASE: usize = 16;

/// Shifts the coefficient vector in place: afterwards it represents `f(x + c)`.
pub fn taylor_shift_horner_in_place<R: Ring>(coeffs: &mut [R], c: &R) {
    let n = coeffs.len();
    if n < 2 || c.is_zero() {
        return;
    }

    for i in (0..n - 1).rev() {
        for j in i..n - 1 {
            let carry = c.clone() * coeffs[j + 1].clone();
            let cur = std::mem::replace(&mut coeffs[j], R::zero());
            coeffs[j] = cur + carry;
        }
    }
}

/// Computes `f(x + c)` with Horner sweeps.
#[must_use]
pub fn taylor_shift_horner<R: Ring>(f: &DensePoly<R>, c: &R) -> DensePoly<R> {
    let mut coeffs = f.coeffs().to_vec();
    taylor_shift_horner_in_place(&mut coeffs, c);
    DensePoly::new(coeffs)
}

/// Computes `f(x + c)` by splitting `f` in half and recombining with
/// `(x + c)^k`.
#[must_use]
pub fn taylor_shift_divconquer<R: Ring>(f: &DensePoly<R>, c: &R) -> DensePoly<R> {
    if c.is_zero() {
        return f.clone();
    }
    let linear = DensePoly::new(vec![c.clone(), R::one()]);
    shift_recursive(f.coeffs(), &linear)
}

fn shift_recursive<R: Ring>(coeffs: &[R], linear: &DensePoly<R>) -> DensePoly<R> {
    let n = coeffs.len();
    if n <= DIVCONQUER_BASE {
        let mut work = coeffs.to_vec();
        taylor_shift_horner_in_place(&mut work, &linear.coeff(0));
        return DensePoly::new(work);
    }

    let k = n / 2;
    let (lo, hi) = coeffs.split_at(k);
    let lo = shift_recursive(lo, linear);
    let hi = shift_recursive(hi, linear);

    #[allow(clippy::cast_possible_truncation)]
    let power = linear.pow(k as u32);
    lo.add(&power.mul(&hi))
}

/// Computes `f(x + c)`, choosing the algorithm by length.
#[must_use]
pub fn taylor_shift<R: Ring>(f: &DensePoly<R>, c: &R) -> DensePoly<R> {
    let n = f.len();
    if n <= TAYLOR_SHIFT_CUTOFF {
        log::trace!("taylor shift: horner, length {n}");
        taylor_shift_horner(f, c)
    } else {
        log::trace!("taylor shift: divide and conquer, length {n}");
        taylor_shift_divconquer(f, c)
    }
}

impl<R: Ring> DensePoly<R> {
    /// Computes `self(x + c)`.
    #[must_use]
    pub fn taylor_shift(&self, c: &R) -> Self {
        taylor_shift(self, c)
    }
}
