//! # tessera-mpoly
//!
//! Packed multivariate monomials for tessera.
//!
//! This crate provides:
//! - Bit-packed exponent vectors spanning one or more 64-bit words
//! - Lex, graded lex and graded reverse lex orders compared word by word
//! - Sorted monomial arrays, borrowed or owned
//! - The product bound search: given two sorted arrays, find a sum
//!   `A[i] + B[j]` whose count of smaller-or-equal pairs lies in a range
//!
//! ## Packing
//!
//! Every field keeps its top bit clear, so the sum of two packed monomials
//! never carries into the next field. [`PackedLayout::for_max_exponent`]
//! picks a width with that headroom.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod layout;
pub mod monomial;
pub mod ordering;
pub mod search;
pub mod sorted;
pub mod staircase;

#[cfg(test)]
mod proptests;

pub use error::MonomialError;
pub use layout::PackedLayout;
pub use monomial::PackedExp;
pub use ordering::MonomialOrder;
pub use search::{product_score, product_staircase, search_monomials, ProductBound};
pub use sorted::{PackedMonomials, SortedMonomials};
pub use staircase::Staircase;
