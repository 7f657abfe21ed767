//! Packing configuration for multivariate monomials.
//!
//! A [`PackedLayout`] fixes the number of variables, the field width and the
//! monomial order. From these it derives how many words a monomial takes,
//! the comparison mask, and the overflow mask marking the headroom bit of
//! every field.
//!
//! Fields never straddle a word boundary: each word holds `64 / bits`
//! fields, filled from the least significant end.

use std::cmp::Ordering;

use smallvec::{smallvec, SmallVec};

use crate::error::MonomialError;
use crate::monomial::{self, PackedExp};
use crate::ordering::MonomialOrder;

/// Machine word width.
pub const WORD_BITS: u32 = u64::BITS;

/// Narrowest supported field: one value bit plus the headroom bit.
pub const MIN_FIELD_BITS: u32 = 2;

/// Narrowest field chosen by [`PackedLayout::for_max_exponent`].
pub const MIN_PACKING_BITS: u32 = 8;

/// How monomials in a given ring are packed into words.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PackedLayout {
    nvars: usize,
    bits: u32,
    order: MonomialOrder,
    words: usize,
    cmpmask: SmallVec<[u64; 4]>,
    overflow_mask: SmallVec<[u64; 4]>,
}

impl PackedLayout {
    /// Creates a layout for `nvars` variables with `bits`-wide fields.
    ///
    /// # Errors
    ///
    /// Returns [`MonomialError::UnsupportedBits`] unless
    /// `MIN_FIELD_BITS <= bits <= WORD_BITS`.
    pub fn new(nvars: usize, bits: u32, order: MonomialOrder) -> Result<Self, MonomialError> {
        if !(MIN_FIELD_BITS..=WORD_BITS).contains(&bits) {
            return Err(MonomialError::UnsupportedBits(bits));
        }

        let per_word = (WORD_BITS / bits) as usize;
        let nfields = order.fields(nvars);
        let words = nfields.div_ceil(per_word).max(1);

        let mut layout = Self {
            nvars,
            bits,
            order,
            words,
            cmpmask: smallvec![0; words],
            overflow_mask: smallvec![0; words],
        };

        let field_mask = layout.field_mask();
        let top_bit = 1u64 << (bits - 1);
        for field in 0..nfields {
            let (word, shift) = layout.slot(field);
            layout.overflow_mask[word] |= top_bit << shift;
            if order.is_reversed_field(field, nvars) {
                layout.cmpmask[word] |= field_mask << shift;
            }
        }

        Ok(layout)
    }

    /// Creates the narrowest layout (at least `MIN_PACKING_BITS` wide) whose
    /// fields hold `max_value` with the headroom bit clear.
    ///
    /// For graded orders `max_value` must bound the total degree as well.
    ///
    /// # Errors
    ///
    /// Returns [`MonomialError::UnsupportedBits`] if `max_value` needs a full
    /// 64-bit field.
    pub fn for_max_exponent(nvars: usize, max_value: u64, order: MonomialOrder) -> Result<Self, MonomialError> {
        Self::new(nvars, Self::bits_for(max_value), order)
    }

    /// Field width needed to hold `max_value` plus one headroom bit.
    #[must_use]
    pub fn bits_for(max_value: u64) -> u32 {
        let value_bits = WORD_BITS - max_value.leading_zeros();
        (value_bits + 1).max(MIN_PACKING_BITS)
    }

    /// Number of variables.
    #[must_use]
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    /// Field width in bits.
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The monomial order.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Words per packed monomial, the `N` of the packed arrays.
    #[must_use]
    pub fn words(&self) -> usize {
        self.words
    }

    /// Number of packed fields, including the degree field of graded orders.
    #[must_use]
    pub fn nfields(&self) -> usize {
        self.order.fields(self.nvars)
    }

    /// Comparison mask: all bits set in every reversed field.
    #[must_use]
    pub fn cmpmask(&self) -> &[u64] {
        &self.cmpmask
    }

    /// Overflow mask: the top bit of every field.
    #[must_use]
    pub fn overflow_mask(&self) -> &[u64] {
        &self.overflow_mask
    }

    /// Largest exponent a packed input may carry.
    #[must_use]
    pub fn max_exponent(&self) -> u64 {
        self.field_mask() >> 1
    }

    /// The zero monomial (all exponents zero) in this layout.
    #[must_use]
    pub fn one(&self) -> PackedExp {
        smallvec![0; self.words]
    }

    /// Packs an exponent vector `[e0, e1, ...]` for `x0^e0 x1^e1 ...`.
    ///
    /// # Errors
    ///
    /// Fails if the arity is wrong or a value would touch the headroom bit.
    pub fn pack(&self, exps: &[u64]) -> Result<PackedExp, MonomialError> {
        let mut out = self.one();
        self.pack_into(&mut out, exps)?;
        Ok(out)
    }

    /// Packs into a caller-provided buffer of `self.words()` words.
    ///
    /// # Errors
    ///
    /// See [`PackedLayout::pack`]. `out` is unspecified on error.
    pub fn pack_into(&self, out: &mut [u64], exps: &[u64]) -> Result<(), MonomialError> {
        if exps.len() != self.nvars {
            return Err(MonomialError::ArityMismatch {
                expected: self.nvars,
                got: exps.len(),
            });
        }
        assert_eq!(out.len(), self.words, "output buffer has the wrong width");

        out.fill(0);
        let max = self.max_exponent();
        let mut degree = 0u64;
        for (var, &exp) in exps.iter().enumerate() {
            if exp > max {
                return Err(MonomialError::ExponentTooLarge {
                    var,
                    exp,
                    bits: self.bits,
                });
            }
            degree = degree.saturating_add(exp);
            self.set_field(out, self.order.field_of_var(var, self.nvars), exp);
        }

        if let Some(field) = self.order.degree_field(self.nvars) {
            if degree > max {
                return Err(MonomialError::DegreeTooLarge {
                    degree,
                    bits: self.bits,
                });
            }
            self.set_field(out, field, degree);
        }

        Ok(())
    }

    /// Reads back the exponent vector of a packed monomial.
    #[must_use]
    pub fn unpack(&self, packed: &[u64]) -> Vec<u64> {
        (0..self.nvars)
            .map(|var| self.get_field(packed, self.order.field_of_var(var, self.nvars)))
            .collect()
    }

    /// Total degree of a packed monomial.
    #[must_use]
    pub fn total_degree(&self, packed: &[u64]) -> u64 {
        match self.order.degree_field(self.nvars) {
            Some(field) => self.get_field(packed, field),
            None => self.unpack(packed).iter().sum(),
        }
    }

    /// Returns true if any field of `packed` has its headroom bit set.
    #[must_use]
    pub fn overflows(&self, packed: &[u64]) -> bool {
        monomial::overflows(packed, &self.overflow_mask)
    }

    /// Re-encodes a monomial of this layout into `target`.
    ///
    /// # Errors
    ///
    /// Fails if `target` has a different number of variables or is too
    /// narrow for the exponents.
    pub fn repack(&self, packed: &[u64], target: &PackedLayout) -> Result<PackedExp, MonomialError> {
        target.pack(&self.unpack(packed))
    }

    /// Sets `out = a * b`.
    #[inline]
    pub fn add(&self, out: &mut [u64], a: &[u64], b: &[u64]) {
        monomial::add(out, a, b);
    }

    /// Compares two packed monomials under this layout's order.
    #[inline]
    #[must_use]
    pub fn compare(&self, a: &[u64], b: &[u64]) -> Ordering {
        monomial::cmp(a, b, &self.cmpmask)
    }

    /// Returns true if the monomials are identical.
    #[inline]
    #[must_use]
    pub fn equal(&self, a: &[u64], b: &[u64]) -> bool {
        monomial::equal(a, b)
    }

    fn field_mask(&self) -> u64 {
        if self.bits == WORD_BITS {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }

    /// Word index and bit offset of a field.
    fn slot(&self, field: usize) -> (usize, u32) {
        let per_word = (WORD_BITS / self.bits) as usize;
        #[allow(clippy::cast_possible_truncation)]
        let shift = (field % per_word) as u32 * self.bits;
        (field / per_word, shift)
    }

    fn set_field(&self, out: &mut [u64], field: usize, value: u64) {
        let (word, shift) = self.slot(field);
        out[word] |= value << shift;
    }

    fn get_field(&self, packed: &[u64], field: usize) -> u64 {
        let (word, shift) = self.slot(field);
        (packed[word] >> shift) & self.field_mask()
    }
}
