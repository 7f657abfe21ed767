//! Prime fields Z_p.

use num_traits::{One, Zero};
use tessera_integers::ModInt;

use crate::traits::{Field, Ring};

/// The prime field Z_p, backed by `ModInt<P>`.
///
/// `P` must be prime for the `Field` laws to hold; this is not checked.
pub type FiniteField<const P: u64> = ModInt<P>;

impl<const P: u64> Ring for ModInt<P> {
    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    fn one() -> Self {
        <Self as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn from_i64(n: i64) -> Self {
        ModInt::from_signed(n)
    }
}

impl<const P: u64> Field for ModInt<P> {
    fn inv(&self) -> Option<Self> {
        ModInt::inv(*self)
    }
}
