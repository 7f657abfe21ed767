//! # tessera-integers
//!
//! Integer coefficient types for tessera.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`), the coefficients of Taylor shifts
//! - Word-sized modular integers (`ModInt`), the coefficients of modular composition
//!
//! Multiprecision kernels themselves are left to `dashu`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::{primes, Mod998244353, ModInt};
