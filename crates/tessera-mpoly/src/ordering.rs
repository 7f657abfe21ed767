//! Monomial orderings for packed exponent vectors.
//!
//! An ordering decides where each variable lives inside a packed monomial
//! and which fields compare in reverse. Once packed, every ordering is
//! compared the same way: word by word after XOR with a mask.

/// A monomial ordering.
///
/// All orderings are monotone under multiplication: if `a <= b` then
/// `a*c <= b*c`. The product bound search depends on this.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x0 > x1 > ... and the first differing exponent decides.
    #[default]
    Lex,

    /// Graded lexicographic order.
    ///
    /// Total degree first, lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// Total degree first; then the smaller exponent in the last variable
    /// wins, then the second to last, and so on.
    Grevlex,
}

impl MonomialOrder {
    /// Returns true if total degree is compared first.
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        matches!(self, MonomialOrder::Grlex | MonomialOrder::Grevlex)
    }

    /// Number of packed fields needed for `nvars` variables.
    #[must_use]
    pub const fn fields(&self, nvars: usize) -> usize {
        if self.is_graded() {
            nvars + 1
        } else {
            nvars
        }
    }

    /// Field holding the exponent of variable `var`.
    ///
    /// Field 0 is least significant. Lex-like orders store x0 highest;
    /// grevlex stores x0 lowest and reverses the comparison instead.
    #[must_use]
    pub const fn field_of_var(&self, var: usize, nvars: usize) -> usize {
        match self {
            MonomialOrder::Lex | MonomialOrder::Grlex => nvars - 1 - var,
            MonomialOrder::Grevlex => var,
        }
    }

    /// Field holding the total degree, if the order is graded.
    #[must_use]
    pub const fn degree_field(&self, nvars: usize) -> Option<usize> {
        if self.is_graded() {
            Some(nvars)
        } else {
            None
        }
    }

    /// Returns true if the given field compares in reverse.
    #[must_use]
    pub const fn is_reversed_field(&self, field: usize, nvars: usize) -> bool {
        matches!(self, MonomialOrder::Grevlex) && field < nvars
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
