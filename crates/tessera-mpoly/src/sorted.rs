//! Read-only arrays of packed monomials in strictly descending order.

use std::cmp::Ordering;

use crate::error::MonomialError;
use crate::layout::PackedLayout;
use crate::monomial::PackedExp;

/// A borrowed, strictly descending array of packed monomials.
///
/// Monomial `i` occupies `words[i*N..(i+1)*N]` where `N = layout.words()`.
#[derive(Clone, Copy, Debug)]
pub struct SortedMonomials<'a> {
    words: &'a [u64],
    layout: &'a PackedLayout,
}

impl<'a> SortedMonomials<'a> {
    /// Wraps a word slice the caller guarantees to be strictly descending.
    ///
    /// # Panics
    ///
    /// Panics if `words` is empty or not a multiple of the monomial width.
    /// The order itself is only checked in debug builds.
    #[must_use]
    pub fn new(words: &'a [u64], layout: &'a PackedLayout) -> Self {
        let n = layout.words();
        assert!(!words.is_empty(), "monomial array is empty");
        assert!(words.len() % n == 0, "ragged monomial array");

        let view = Self { words, layout };
        debug_assert_eq!(view.first_unsorted(), None, "monomials not strictly descending");
        view
    }

    /// Wraps a word slice after checking its shape and order.
    ///
    /// # Errors
    ///
    /// Returns [`MonomialError::Empty`], [`MonomialError::RaggedWords`] or
    /// [`MonomialError::NotDescending`].
    pub fn try_new(words: &'a [u64], layout: &'a PackedLayout) -> Result<Self, MonomialError> {
        let n = layout.words();
        if words.is_empty() {
            return Err(MonomialError::Empty);
        }
        if words.len() % n != 0 {
            return Err(MonomialError::RaggedWords {
                len: words.len(),
                words: n,
            });
        }

        let view = Self { words, layout };
        match view.first_unsorted() {
            Some(index) => Err(MonomialError::NotDescending { index }),
            None => Ok(view),
        }
    }

    /// Number of monomials.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len() / self.layout.words()
    }

    /// Always false for a constructed view.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The `i`-th monomial.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> &'a [u64] {
        let n = self.layout.words();
        &self.words[i * n..(i + 1) * n]
    }

    /// The layout the monomials were packed with.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &'a PackedLayout {
        self.layout
    }

    /// The underlying words.
    #[must_use]
    pub fn as_words(&self) -> &'a [u64] {
        self.words
    }

    /// Iterates over the monomials from largest to smallest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a [u64]> + 'a {
        self.words.chunks_exact(self.layout.words())
    }

    fn first_unsorted(&self) -> Option<usize> {
        (1..self.len()).find(|&i| self.layout.compare(self.get(i - 1), self.get(i)) != Ordering::Greater)
    }
}

/// An owned, sorted and deduplicated monomial array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedMonomials {
    layout: PackedLayout,
    words: Vec<u64>,
}

impl PackedMonomials {
    /// Packs exponent vectors, sorts them in descending order and drops
    /// duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`MonomialError::Empty`] for no rows, or the packing error of
    /// the first row that does not fit the layout.
    pub fn from_exponents<I, E>(layout: PackedLayout, rows: I) -> Result<Self, MonomialError>
    where
        I: IntoIterator<Item = E>,
        E: AsRef<[u64]>,
    {
        let mut packed = rows
            .into_iter()
            .map(|row| layout.pack(row.as_ref()))
            .collect::<Result<Vec<PackedExp>, _>>()?;
        if packed.is_empty() {
            return Err(MonomialError::Empty);
        }

        packed.sort_unstable_by(|x, y| layout.compare(y, x));
        packed.dedup();

        let words = packed.iter().flat_map(|m| m.iter().copied()).collect();
        Ok(Self { layout, words })
    }

    /// Number of distinct monomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len() / self.layout.words()
    }

    /// Always false; construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The layout.
    #[must_use]
    pub fn layout(&self) -> &PackedLayout {
        &self.layout
    }

    /// Borrows the array as a [`SortedMonomials`] view.
    #[must_use]
    pub fn view(&self) -> SortedMonomials<'_> {
        SortedMonomials::new(&self.words, &self.layout)
    }
}
