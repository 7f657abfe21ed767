//! # tessera-rings
//!
//! Coefficient domains for tessera polynomials.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - Concrete domains: Z (`Integer`) and Z_p (`ModInt<P>`)
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod integers;
pub mod traits;

pub use finite_field::FiniteField;
pub use integers::Z;
pub use traits::{Field, Ring};
