//! Monotone staircase boundaries over the implicit matrix of pair sums.
//!
//! For arrays `A` (m rows) and `B` (n columns), both strictly descending,
//! the sums `A[i] + B[j]` decrease along every row and every column. A bound
//! `e` therefore splits each row into a prefix of sums above `e` and a
//! suffix of sums at most `e`. The staircase records where each suffix
//! starts and counts the pairs in all suffixes.

use std::cmp::Ordering;

use crate::layout::PackedLayout;
use crate::monomial::PackedExp;
use crate::sorted::SortedMonomials;

/// The two factor arrays of a product.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProductGrid<'a> {
    a: SortedMonomials<'a>,
    b: SortedMonomials<'a>,
}

impl<'a> ProductGrid<'a> {
    pub(crate) fn new(a: SortedMonomials<'a>, b: SortedMonomials<'a>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub(crate) fn rows(&self) -> usize {
        self.a.len()
    }

    #[inline]
    pub(crate) fn cols(&self) -> usize {
        self.b.len()
    }

    #[inline]
    pub(crate) fn layout(&self) -> &'a PackedLayout {
        self.a.layout()
    }

    /// Writes `A[i] + B[j]` into `out`.
    #[inline]
    pub(crate) fn sum_into(&self, out: &mut [u64], i: usize, j: usize) {
        self.layout().add(out, self.a.get(i), self.b.get(j));
    }

    /// Returns `A[i] + B[j]` compared against `e`.
    #[inline]
    pub(crate) fn cmp_sum(&self, temp: &mut [u64], i: usize, j: usize, e: &[u64]) -> Ordering {
        self.sum_into(temp, i, j);
        self.layout().compare(temp, e)
    }
}

/// A bound exponent together with the staircase of pairs not exceeding it.
///
/// `columns()[i]` is the first column `j` with `A[i] + B[j] <= exp`, or `n`
/// if the whole row lies above the bound. Columns never increase with `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Staircase {
    exp: PackedExp,
    idx: Vec<usize>,
    score: usize,
}

impl Staircase {
    /// The largest product `A[0] + B[0]`; every pair is below it.
    pub(crate) fn top(grid: &ProductGrid<'_>) -> Self {
        let (m, n) = (grid.rows(), grid.cols());
        let mut exp = grid.layout().one();
        grid.sum_into(&mut exp, 0, 0);
        Self {
            exp,
            idx: vec![0; m],
            score: m * n,
        }
    }

    /// The smallest product `A[m-1] + B[n-1]`, counting only itself.
    pub(crate) fn bottom(grid: &ProductGrid<'_>) -> Self {
        let (m, n) = (grid.rows(), grid.cols());
        let mut exp = grid.layout().one();
        grid.sum_into(&mut exp, m - 1, n - 1);
        let mut idx = vec![n; m];
        idx[m - 1] = n - 1;
        Self { exp, idx, score: 1 }
    }

    /// A buffer of the right shape whose contents are meaningless until
    /// [`Staircase::extend`] fills it.
    pub(crate) fn scratch(grid: &ProductGrid<'_>) -> Self {
        Self {
            exp: grid.layout().one(),
            idx: vec![0; grid.rows()],
            score: 0,
        }
    }

    /// Computes the exact staircase of an arbitrary bound `e`.
    ///
    /// Walks rows from the bottom up; the column pointer only moves right,
    /// so the cost is `O(m + n)` comparisons.
    pub(crate) fn for_bound(grid: &ProductGrid<'_>, e: &[u64]) -> Self {
        let (m, n) = (grid.rows(), grid.cols());
        let mut temp = grid.layout().one();
        let mut idx = vec![0; m];
        let mut score = 0;

        let mut j = 0;
        for i in (0..m).rev() {
            while j < n && grid.cmp_sum(&mut temp, i, j, e) == Ordering::Greater {
                j += 1;
            }
            idx[i] = j;
            score += n - j;
        }

        Self {
            exp: e.iter().copied().collect(),
            idx,
            score,
        }
    }

    /// Overwrites `self` with the staircase of the pivot sum
    /// `A[row] + B[col]`, which must lie strictly between `g` and `f`.
    ///
    /// Each row is probed only inside the window left between the
    /// envelopes, starting from the neighbouring row already placed.
    pub(crate) fn extend(
        &mut self,
        grid: &ProductGrid<'_>,
        row: usize,
        col: usize,
        f: &Staircase,
        g: &Staircase,
        temp: &mut [u64],
    ) {
        let m = grid.rows();
        debug_assert!(f.idx[row] <= col && col < g.idx[row]);

        grid.sum_into(&mut self.exp, row, col);
        self.idx[row] = col;

        // below the pivot: step left from the tighter of the two known limits
        for i in row + 1..m {
            let hi = self.idx[i - 1].min(g.idx[i]);
            let mut x = hi;
            for j in (f.idx[i]..hi).rev() {
                if grid.cmp_sum(temp, i, j, &self.exp) == Ordering::Greater {
                    break;
                }
                x = j;
            }
            self.idx[i] = x;
        }

        // above the pivot: step right past sums that exceed the bound
        for i in (0..row).rev() {
            let mut j = self.idx[i + 1].max(f.idx[i]);
            while j < g.idx[i] && grid.cmp_sum(temp, i, j, &self.exp) == Ordering::Greater {
                j += 1;
            }
            self.idx[i] = j;
        }

        self.score = g.score + g.idx.iter().zip(&self.idx).map(|(&gi, &hi)| gi - hi).sum::<usize>();
        debug_assert_eq!(self.score, Self::for_bound(grid, &self.exp).score);
    }

    /// The bound exponent.
    #[must_use]
    pub fn exp(&self) -> &[u64] {
        &self.exp
    }

    /// Number of pairs `(i, j)` with `A[i] + B[j] <= exp`.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// First qualifying column of every row.
    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.idx
    }

    pub(crate) fn into_exp(self) -> PackedExp {
        self.exp
    }
}
