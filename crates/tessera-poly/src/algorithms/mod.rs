//! Polynomial algorithms.
//!
//! This module contains:
//! - Newton power series inversion and division by a precomputed inverse
//! - Composition and modular composition
//! - Taylor shift (Horner and divide-and-conquer)

pub mod compose;
pub mod division;
pub mod taylor_shift;
