//! The ring of integers Z.

use num_traits::{One, Zero};
use tessera_integers::Integer;

use crate::traits::Ring;

/// The ring of integers, backed by arbitrary precision `Integer`.
pub type Z = Integer;

impl Ring for Integer {
    fn zero() -> Self {
        <Integer as Zero>::zero()
    }

    fn one() -> Self {
        <Integer as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn from_i64(n: i64) -> Self {
        Integer::new(n)
    }
}
