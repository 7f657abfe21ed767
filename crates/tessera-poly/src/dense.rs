//! Dense univariate polynomials.
//!
//! Only the arithmetic needed by Taylor shift and modular composition is
//! provided here; multiplication picks schoolbook or Karatsuba by size.

use tessera_rings::traits::{Field, Ring};

/// Below this many coefficients multiplication falls back to schoolbook.
pub const KARATSUBA_CUTOFF: usize = 32;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order with no trailing
/// zeros, except that the zero polynomial is stored as `[0]`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients in ascending order.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().map_or(false, Ring::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Degree of the polynomial; the zero polynomial reports 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Number of coefficients up to and including the leading one.
    ///
    /// The zero polynomial has length 0.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_zero() {
            0
        } else {
            self.coeffs.len()
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) - other.coeff(i)).collect();
        Self::new(result)
    }

    /// Multiplies two polynomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        Self::new(mul_coeffs(&self.coeffs, &other.coeffs))
    }

    /// Product truncated to its first `n` coefficients.
    #[must_use]
    pub fn mul_low(&self, other: &Self, n: usize) -> Self {
        self.truncate(n).mul(&other.truncate(n)).truncate(n)
    }

    /// Keeps the first `n` coefficients, i.e. reduces mod x^n.
    #[must_use]
    pub fn truncate(&self, n: usize) -> Self {
        Self::new(self.coeffs.iter().take(n).cloned().collect())
    }

    /// The length-`n` reversal `x^(n-1) * f(1/x)` of the first `n` coefficients.
    #[must_use]
    pub fn reverse(&self, n: usize) -> Self {
        Self::new((0..n).map(|i| self.coeff(n - 1 - i)).collect())
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }
}

impl<F: Field> DensePoly<F> {
    /// Euclidean division: returns `(q, r)` with `self = q * divisor + r`
    /// and `deg r < deg divisor` (or `r = 0`).
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "polynomial division by zero");

        let d = divisor.degree();
        if self.is_zero() || self.degree() < d {
            return (Self::zero(), self.clone());
        }

        let lead_inv = match divisor.leading_coeff().inv() {
            Some(inv) => inv,
            None => panic!("leading coefficient is not invertible"),
        };

        let mut rem = self.coeffs.clone();
        let mut quot = vec![F::zero(); self.degree() - d + 1];

        for k in (0..quot.len()).rev() {
            let q = rem[k + d].clone() * lead_inv.clone();
            if q.is_zero() {
                continue;
            }
            for (j, c) in divisor.coeffs.iter().enumerate() {
                rem[k + j] = rem[k + j].clone() - q.clone() * c.clone();
            }
            quot[k] = q;
        }

        rem.truncate(d.max(1));
        (Self::new(quot), Self::new(rem))
    }

    /// Remainder of Euclidean division.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn rem(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }
}

impl<R: Ring> std::fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| match i {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{i}"),
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}

/// Product of two non-empty coefficient slices, length `a.len() + b.len() - 1`.
fn mul_coeffs<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.len() < KARATSUBA_CUTOFF || b.len() < KARATSUBA_CUTOFF {
        return mul_schoolbook(a, b);
    }

    // a = a0 + x^half a1, b = b0 + x^half b1
    let half = a.len().max(b.len()) / 2;
    let (a0, a1) = a.split_at(half.min(a.len()));
    let (b0, b1) = b.split_at(half.min(b.len()));

    if a1.is_empty() || b1.is_empty() {
        return mul_schoolbook(a, b);
    }

    let z0 = mul_coeffs(a0, b0);
    let z2 = mul_coeffs(a1, b1);
    let z1 = mul_coeffs(&add_coeffs(a0, a1), &add_coeffs(b0, b1));

    let mut result = vec![R::zero(); a.len() + b.len() - 1];
    for (i, c) in z0.iter().enumerate() {
        result[i] = result[i].clone() + c.clone();
        result[i + half] = result[i + half].clone() - c.clone();
    }
    for (i, c) in z2.iter().enumerate() {
        result[i + 2 * half] = result[i + 2 * half].clone() + c.clone();
        result[i + half] = result[i + half].clone() - c.clone();
    }
    for (i, c) in z1.iter().enumerate() {
        result[i + half] = result[i + half].clone() + c.clone();
    }

    result
}

fn mul_schoolbook<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    let mut result = vec![R::zero(); a.len() + b.len() - 1];

    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            result[i + j] = result[i + j].clone() + x.clone() * y.clone();
        }
    }

    result
}

fn add_coeffs<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => x.clone() + y.clone(),
            (Some(x), None) | (None, Some(x)) => x.clone(),
            (None, None) => R::zero(),
        })
        .collect()
}
