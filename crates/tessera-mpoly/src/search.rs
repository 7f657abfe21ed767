//! Choosing an exponent bound that splits a product into a block of a
//! requested size.
//!
//! Multiplying sparse polynomials with `m` and `n` terms produces `m * n`
//! candidate products. A bounded-memory multiplication processes them in
//! blocks: all pairs whose product does not exceed some bound `e`. The
//! search below finds such an `e` whose pair count lands in `[lower,
//! upper]` without ever forming the `m * n` sums.
//!
//! The search keeps two staircases, a high envelope `f` and a low envelope
//! `g`, with `g.score <= upper` and `f.score >= lower` at all times. Each
//! step picks a pivot sum strictly between them, builds its staircase by
//! probing only inside the gap, and replaces whichever envelope it
//! tightens.

use std::cmp::Ordering;
use std::mem;

use crate::monomial::PackedExp;
use crate::sorted::SortedMonomials;
use crate::staircase::{ProductGrid, Staircase};

/// A product bound and the number of pairs not exceeding it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProductBound {
    /// The bound, always one of the sums `A[i] + B[j]`.
    pub exp: PackedExp,
    /// `#{(i, j) : A[i] + B[j] <= exp}`.
    pub score: usize,
}

impl From<Staircase> for ProductBound {
    fn from(s: Staircase) -> Self {
        let score = s.score();
        Self {
            exp: s.into_exp(),
            score,
        }
    }
}

/// Finds a bound `e` among the sums `A[i] + B[j]` whose score lies in
/// `[lower, upper]`.
///
/// If no sum scores inside the range, returns the nearer of the two sums
/// that bracket it, preferring the one with the larger score on a tie.
/// The returned score is always exact.
///
/// # Panics
///
/// Panics unless both arrays share a layout and
/// `1 <= lower <= upper <= a.len() * b.len()`.
#[must_use]
pub fn search_monomials(a: &SortedMonomials<'_>, b: &SortedMonomials<'_>, lower: usize, upper: usize) -> ProductBound {
    assert!(a.layout() == b.layout(), "monomials were packed with different layouts");
    let grid = ProductGrid::new(*a, *b);
    let (m, n) = (grid.rows(), grid.cols());
    assert!(
        1 <= lower && lower <= upper && upper <= m * n,
        "invalid target range [{lower}, {upper}] for {m}x{n} products"
    );

    let layout = grid.layout();
    let mut f = Staircase::top(&grid);
    let mut g = Staircase::bottom(&grid);
    if f.score() == g.score() {
        return f.into();
    }

    let mut h = Staircase::scratch(&grid);
    let mut temp = layout.one();
    let mut steps = 0usize;

    let reason = loop {
        if g.score() >= lower {
            break "low envelope in range";
        }
        if f.score() <= upper {
            break "high envelope in range";
        }
        let Some((row, col)) = choose_pivot(&grid, &f, &g, &mut temp) else {
            break "no sum between envelopes";
        };

        h.extend(&grid, row, col, &f, &g, &mut temp);
        debug_assert_eq!(layout.compare(f.exp(), h.exp()), Ordering::Greater);
        debug_assert_eq!(layout.compare(h.exp(), g.exp()), Ordering::Greater);
        steps += 1;

        log::trace!(
            "bound search step {steps}: pivot ({row}, {col}), scores {} < {} < {}",
            g.score(),
            h.score(),
            f.score()
        );

        if h.score() <= upper {
            mem::swap(&mut g, &mut h);
        } else {
            mem::swap(&mut f, &mut h);
        }
    };

    let chosen = select(f, g, lower, upper);
    log::debug!(
        "bound search on {m}x{n} products for [{lower}, {upper}]: {reason} after {steps} steps, score {}",
        chosen.score()
    );
    chosen.into()
}

/// Picks the next pivot cell, or `None` if no sum lies strictly between
/// the envelopes.
fn choose_pivot(grid: &ProductGrid<'_>, f: &Staircase, g: &Staircase, temp: &mut [u64]) -> Option<(usize, usize)> {
    let (fi, gi) = (f.columns(), g.columns());

    let mut row = 0;
    let mut gap = 0;
    for (i, (&lo, &hi)) in fi.iter().zip(gi).enumerate() {
        if hi - lo > gap {
            gap = hi - lo;
            row = i;
        }
    }

    match gap {
        0 => None,
        // every open cell sits at the left edge of its window; any of them
        // that differs from f's bound is strictly below it
        1 => (0..grid.rows())
            .filter(|&i| fi[i] < gi[i])
            .find(|&i| {
                grid.sum_into(temp, i, fi[i]);
                !grid.layout().equal(temp, f.exp())
            })
            .map(|i| (i, fi[i])),
        _ => Some((row, (fi[row] + gi[row]) / 2)),
    }
}

fn select(f: Staircase, g: Staircase, lower: usize, upper: usize) -> Staircase {
    if f.score() <= lower {
        f
    } else if g.score() >= upper {
        g
    } else if f.score() <= upper {
        f
    } else if g.score() >= lower {
        g
    } else if f.score() - upper <= lower - g.score() {
        f
    } else {
        g
    }
}

/// Counts the pairs `(i, j)` with `A[i] + B[j] <= e` in `O(m + n)`.
///
/// # Panics
///
/// Panics if the arrays or `e` do not share a layout.
#[must_use]
pub fn product_score(a: &SortedMonomials<'_>, b: &SortedMonomials<'_>, e: &[u64]) -> usize {
    product_staircase(a, b, e).score()
}

/// Builds the full staircase of the bound `e`.
///
/// # Panics
///
/// Panics if the arrays or `e` do not share a layout.
#[must_use]
pub fn product_staircase(a: &SortedMonomials<'_>, b: &SortedMonomials<'_>, e: &[u64]) -> Staircase {
    assert!(a.layout() == b.layout(), "monomials were packed with different layouts");
    assert_eq!(e.len(), a.layout().words(), "bound has the wrong width");
    Staircase::for_bound(&ProductGrid::new(*a, *b), e)
}
