//! Property-based tests for packing and the product bound search.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::layout::PackedLayout;
    use crate::monomial::PackedExp;
    use crate::ordering::MonomialOrder;
    use crate::search::{product_score, product_staircase, search_monomials};
    use crate::sorted::{PackedMonomials, SortedMonomials};

    const ORDERS: [MonomialOrder; 3] = [MonomialOrder::Lex, MonomialOrder::Grlex, MonomialOrder::Grevlex];

    fn order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Grlex),
            Just(MonomialOrder::Grevlex),
        ]
    }

    // Layouts from one to four words, with small exponents so sums keep headroom
    fn operands() -> impl Strategy<Value = (PackedMonomials, PackedMonomials)> {
        (order(), 1usize..4, prop::sample::select(vec![8u32, 12, 21, 32, 64]))
            .prop_flat_map(|(order, nvars, bits)| {
                let layout = PackedLayout::new(nvars, bits, order).unwrap();
                let row = proptest::collection::vec(0u64..12, nvars);
                (
                    Just(layout),
                    proptest::collection::vec(row.clone(), 1..12),
                    proptest::collection::vec(row, 1..12),
                )
            })
            .prop_map(|(layout, a, b)| {
                (
                    PackedMonomials::from_exponents(layout.clone(), a).unwrap(),
                    PackedMonomials::from_exponents(layout, b).unwrap(),
                )
            })
    }

    fn all_sums(a: &SortedMonomials<'_>, b: &SortedMonomials<'_>) -> Vec<PackedExp> {
        let layout = a.layout();
        let mut sums = Vec::with_capacity(a.len() * b.len());
        for x in a.iter() {
            for y in b.iter() {
                let mut s = layout.one();
                layout.add(&mut s, x, y);
                sums.push(s);
            }
        }
        sums
    }

    fn brute_score(layout: &PackedLayout, sums: &[PackedExp], e: &[u64]) -> usize {
        sums.iter().filter(|s| layout.compare(s, e) != Ordering::Greater).count()
    }

    /// Scores of all distinct sums, ascending.
    fn achievable(layout: &PackedLayout, sums: &[PackedExp]) -> Vec<usize> {
        let mut sorted = sums.to_vec();
        sorted.sort_by(|x, y| layout.compare(x, y));

        // the score of a sum is one past the last position of its run
        let mut scores = Vec::new();
        for k in 0..sorted.len() {
            if k + 1 == sorted.len() || !layout.equal(&sorted[k], &sorted[k + 1]) {
                scores.push(k + 1);
            }
        }
        scores
    }

    fn target_range(total: usize, x: u16, y: u16) -> (usize, usize) {
        let lower = 1 + usize::from(x) % total;
        let upper = lower + usize::from(y) % (total - lower + 1);
        (lower, upper)
    }

    /// Checks a search result against the brute-force answer.
    fn check_search(a: &SortedMonomials<'_>, b: &SortedMonomials<'_>, lower: usize, upper: usize) -> Result<(), String> {
        let layout = a.layout();
        let sums = all_sums(a, b);
        let bound = search_monomials(a, b, lower, upper);

        if !sums.iter().any(|s| layout.equal(s, &bound.exp)) {
            return Err(format!("bound {:?} is not a pairwise sum", bound.exp));
        }
        let exact = brute_score(layout, &sums, &bound.exp);
        if bound.score != exact {
            return Err(format!("reported score {} but {exact} pairs qualify", bound.score));
        }

        let scores = achievable(layout, &sums);
        if scores.iter().any(|s| (lower..=upper).contains(s)) {
            if !(lower..=upper).contains(&bound.score) {
                return Err(format!("score {} outside [{lower}, {upper}]", bound.score));
            }
        } else {
            let below = scores.iter().copied().filter(|&s| s < lower).max().unwrap_or(0);
            let above = scores.iter().copied().filter(|&s| s > upper).min().unwrap_or(usize::MAX);
            let expected = if above - upper <= lower - below { above } else { below };
            if bound.score != expected {
                return Err(format!(
                    "fallback picked {} for [{lower}, {upper}], expected {expected} (between {below} and {above})",
                    bound.score
                ));
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn search_matches_brute_force((a, b) in operands(), x in any::<u16>(), y in any::<u16>()) {
            let (a, b) = (a.view(), b.view());
            let (lower, upper) = target_range(a.len() * b.len(), x, y);
            if let Err(msg) = check_search(&a, &b, lower, upper) {
                return Err(TestCaseError::fail(msg));
            }
        }

        #[test]
        fn search_extremes((a, b) in operands()) {
            let (a, b) = (a.view(), b.view());
            let layout = a.layout();
            let total = a.len() * b.len();

            let mut top = layout.one();
            layout.add(&mut top, a.get(0), b.get(0));
            let mut bottom = layout.one();
            layout.add(&mut bottom, a.get(a.len() - 1), b.get(b.len() - 1));

            let full = search_monomials(&a, &b, 1, total);
            prop_assert_eq!(full.score, total);
            prop_assert_eq!(full.exp, top);

            let single = search_monomials(&a, &b, 1, 1);
            prop_assert_eq!(single.score, 1);
            prop_assert_eq!(single.exp, bottom);
        }

        #[test]
        fn score_is_monotone((a, b) in operands()) {
            let (a, b) = (a.view(), b.view());
            let layout = a.layout();
            let mut sums = all_sums(&a, &b);
            sums.sort_by(|x, y| layout.compare(x, y));

            let scores: Vec<_> = sums.iter().map(|s| product_score(&a, &b, s)).collect();
            for (k, w) in scores.windows(2).enumerate() {
                prop_assert!(w[0] <= w[1]);
                if layout.compare(&sums[k], &sums[k + 1]) == Ordering::Less {
                    prop_assert!(w[0] < w[1]);
                }
            }
        }

        #[test]
        fn staircase_columns_descend((a, b) in operands(), k in any::<prop::sample::Index>()) {
            let (a, b) = (a.view(), b.view());
            let sums = all_sums(&a, &b);
            let e = &sums[k.index(sums.len())];

            let stairs = product_staircase(&a, &b, e);
            prop_assert!(stairs.columns().windows(2).all(|w| w[0] >= w[1]));
            prop_assert_eq!(stairs.score(), brute_score(a.layout(), &sums, e));
        }

        #[test]
        fn pack_unpack_roundtrip(order in order(), exps in proptest::collection::vec(0u64..1000, 1..6)) {
            let layout = PackedLayout::for_max_exponent(exps.len(), exps.iter().sum(), order).unwrap();
            let packed = layout.pack(&exps).unwrap();
            prop_assert_eq!(layout.unpack(&packed), exps);
            prop_assert!(!layout.overflows(&packed));
        }

        #[test]
        fn packed_order_is_monotone(
            order in order(),
            x in proptest::collection::vec(0u64..50, 3),
            y in proptest::collection::vec(0u64..50, 3),
            z in proptest::collection::vec(0u64..50, 3),
        ) {
            let layout = PackedLayout::new(3, 10, order).unwrap();
            let (px, py, pz) = (layout.pack(&x).unwrap(), layout.pack(&y).unwrap(), layout.pack(&z).unwrap());
            let mut xz = layout.one();
            let mut yz = layout.one();
            layout.add(&mut xz, &px, &pz);
            layout.add(&mut yz, &py, &pz);
            prop_assert_eq!(layout.compare(&px, &py), layout.compare(&xz, &yz));
        }
    }

    fn random_operands(rng: &mut ChaCha8Rng, layout: &PackedLayout, max_terms: usize) -> PackedMonomials {
        let terms = rng.gen_range(1..=max_terms);
        let rows: Vec<Vec<u64>> = (0..terms)
            .map(|_| (0..layout.nvars()).map(|_| rng.gen_range(0..12)).collect())
            .collect();
        PackedMonomials::from_exponents(layout.clone(), rows).unwrap()
    }

    #[test]
    fn search_random_large() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xb0b);

        for round in 0..60 {
            let order = ORDERS[round % ORDERS.len()];
            let nvars = rng.gen_range(1..6);
            let bits = [8, 16, 24, 64][rng.gen_range(0..4)];
            let layout = PackedLayout::new(nvars, bits, order).unwrap();

            let a = random_operands(&mut rng, &layout, 60);
            let b = random_operands(&mut rng, &layout, 40);
            let (a, b) = (a.view(), b.view());
            let total = a.len() * b.len();

            for _ in 0..8 {
                let lower = rng.gen_range(1..=total);
                let upper = rng.gen_range(lower..=total);
                if let Err(msg) = check_search(&a, &b, lower, upper) {
                    panic!("{order} {nvars}x{bits}: {msg}");
                }
            }
        }
    }

    #[test]
    fn search_univariate_dense() {
        // x^k for k = 0..30 against itself: every degree 0..=58 is a sum
        let layout = PackedLayout::new(1, 8, MonomialOrder::Lex).unwrap();
        let rows: Vec<[u64; 1]> = (0..30).rev().map(|k| [k]).collect();
        let a = PackedMonomials::from_exponents(layout, rows).unwrap();
        let a = a.view();

        for target in [1, 2, 10, 100, 450, 899, 900] {
            let bound = search_monomials(&a, &a, target, target);
            assert_eq!(bound.score, product_score(&a, &a, &bound.exp));
            assert!(check_search(&a, &a, target, target).is_ok(), "target {target}");
        }
    }
}
