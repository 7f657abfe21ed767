//! Word-level operations on packed monomials.
//!
//! A packed monomial is a slice of `N` words, the most significant word
//! last. These functions do not know the field layout; callers pass the
//! masks from a [`PackedLayout`](crate::layout::PackedLayout).

use std::cmp::Ordering;

use smallvec::SmallVec;

/// An owned packed monomial. Up to four words live inline.
pub type PackedExp = SmallVec<[u64; 4]>;

/// Sets `out = a + b`, i.e. multiplies the monomials.
///
/// No field may overflow into its neighbour; layouts with a clear headroom
/// bit guarantee this for a single addition.
#[inline]
pub fn add(out: &mut [u64], a: &[u64], b: &[u64]) {
    debug_assert!(out.len() == a.len() && a.len() == b.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x + y;
    }
}

/// Sets `out = a - b`. Requires `b` to divide `a`.
#[inline]
pub fn sub(out: &mut [u64], a: &[u64], b: &[u64]) {
    debug_assert!(out.len() == a.len() && a.len() == b.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x - y;
    }
}

/// Compares two monomials under the order encoded by `cmpmask`.
///
/// Words are compared from most to least significant after XOR with the
/// mask, which flips the fields that compare in reverse.
#[inline]
#[must_use]
pub fn cmp(a: &[u64], b: &[u64], cmpmask: &[u64]) -> Ordering {
    debug_assert!(a.len() == b.len() && b.len() == cmpmask.len());
    for k in (0..a.len()).rev() {
        let x = a[k] ^ cmpmask[k];
        let y = b[k] ^ cmpmask[k];
        if x != y {
            return x.cmp(&y);
        }
    }
    Ordering::Equal
}

/// Returns true if `a < b`.
#[inline]
#[must_use]
pub fn lt(a: &[u64], b: &[u64], cmpmask: &[u64]) -> bool {
    cmp(a, b, cmpmask) == Ordering::Less
}

/// Returns true if `a <= b`.
#[inline]
#[must_use]
pub fn le(a: &[u64], b: &[u64], cmpmask: &[u64]) -> bool {
    cmp(a, b, cmpmask) != Ordering::Greater
}

/// Word-wise equality.
#[inline]
#[must_use]
pub fn equal(a: &[u64], b: &[u64]) -> bool {
    a == b
}

/// Returns true if any headroom bit is set.
#[inline]
#[must_use]
pub fn overflows(a: &[u64], overflow_mask: &[u64]) -> bool {
    a.iter().zip(overflow_mask).any(|(&x, &m)| x & m != 0)
}
