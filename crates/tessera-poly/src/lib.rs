//! # tessera-poly
//!
//! Dense univariate polynomials for tessera.
//!
//! This crate provides:
//! - `DensePoly<R>` with schoolbook/Karatsuba multiplication
//! - Taylor shift `f(x + c)` (Horner below 256 coefficients, divide and conquer above)
//! - Power series inversion and division by a precomputed inverse
//! - Composition and modular composition `a(b) mod c`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use algorithms::compose::{compose, compose_mod, compose_mod_preinv};
pub use algorithms::division::{inv_series_newton, rem_preinv};
pub use algorithms::taylor_shift::{taylor_shift, TAYLOR_SHIFT_CUTOFF};
pub use dense::DensePoly;
