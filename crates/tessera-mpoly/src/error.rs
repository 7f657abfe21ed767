//! Errors raised while configuring layouts and packing monomials.

use thiserror::Error;

/// Errors from layout construction, packing, and checked array views.
///
/// The product bound search itself has no error path: its preconditions
/// are contracts and violations panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonomialError {
    /// The field width is outside the supported range.
    #[error("unsupported field width of {0} bits (expected {min}..={max})", min = crate::layout::MIN_FIELD_BITS, max = crate::layout::WORD_BITS)]
    UnsupportedBits(u32),

    /// An exponent does not fit in a field while keeping the headroom bit clear.
    #[error("exponent {exp} of variable {var} does not fit in {bits}-bit fields")]
    ExponentTooLarge {
        /// Variable index.
        var: usize,
        /// Offending exponent.
        exp: u64,
        /// Field width of the layout.
        bits: u32,
    },

    /// The total degree does not fit in the degree field of a graded order.
    #[error("total degree {degree} does not fit in {bits}-bit fields")]
    DegreeTooLarge {
        /// Total degree, saturated at `u64::MAX`.
        degree: u64,
        /// Field width of the layout.
        bits: u32,
    },

    /// The number of exponents differs from the number of variables.
    #[error("expected {expected} exponents, got {got}")]
    ArityMismatch {
        /// Variables in the layout.
        expected: usize,
        /// Exponents supplied.
        got: usize,
    },

    /// A packed word slice is not a whole number of monomials.
    #[error("{len} words do not split into monomials of {words} words")]
    RaggedWords {
        /// Length of the slice.
        len: usize,
        /// Words per monomial.
        words: usize,
    },

    /// Monomials are not strictly descending.
    #[error("monomial {index} is not strictly smaller than its predecessor")]
    NotDescending {
        /// Index of the first out-of-order monomial.
        index: usize,
    },

    /// An array view must hold at least one monomial.
    #[error("monomial array is empty")]
    Empty,

    /// Two operands were packed with different layouts.
    #[error("monomials were packed with different layouts")]
    LayoutMismatch,
}
