//! Property-based tests for Taylor shift and modular composition.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::algorithms::compose::{compose, compose_mod_preinv};
    use crate::algorithms::division::inv_series_newton;
    use crate::algorithms::taylor_shift::{taylor_shift_divconquer, taylor_shift_horner};
    use crate::dense::DensePoly;
    use tessera_integers::ModInt;
    use tessera_rings::traits::Ring;
    use tessera_rings::Z;

    type F = ModInt<1_000_003>;

    fn small_zpoly() -> impl Strategy<Value = DensePoly<Z>> {
        proptest::collection::vec(-50i64..50i64, 0..40)
            .prop_map(|c| DensePoly::new(c.into_iter().map(Z::from_i64).collect()))
    }

    fn random_fpoly(rng: &mut ChaCha8Rng, len: usize) -> DensePoly<F> {
        DensePoly::new((0..len).map(|_| F::new(rng.gen_range(0..1_000_003))).collect())
    }

    fn random_nonzero_fpoly(rng: &mut ChaCha8Rng, len: usize) -> DensePoly<F> {
        loop {
            let p = random_fpoly(rng, len.max(1));
            if !p.is_zero() {
                return p;
            }
        }
    }

    proptest! {
        #[test]
        fn taylor_shift_evaluates_at_shifted_point(f in small_zpoly(), c in -20i64..20, t in -20i64..20) {
            let (c, t) = (Z::from_i64(c), Z::from_i64(t));
            let shifted = f.taylor_shift(&c);
            prop_assert_eq!(shifted.eval(&t), f.eval(&(t.clone() + c)));
        }

        #[test]
        fn taylor_shift_algorithms_agree(f in small_zpoly(), c in -20i64..20) {
            let c = Z::from_i64(c);
            prop_assert_eq!(taylor_shift_divconquer(&f, &c), taylor_shift_horner(&f, &c));
        }

        #[test]
        fn taylor_shift_preserves_degree(f in small_zpoly(), c in -20i64..20) {
            let shifted = f.taylor_shift(&Z::from_i64(c));
            prop_assert_eq!(shifted.len(), f.len());
        }
    }

    #[test]
    fn compose_mod_preinv_matches_compose_then_rem() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

        for _ in 0..40 {
            let (clen, alen, blen) = (rng.gen_range(1..21), rng.gen_range(1..21), rng.gen_range(1..21));
            let c = random_nonzero_fpoly(&mut rng, clen);
            let a = random_fpoly(&mut rng, alen).rem(&c);
            let b = random_fpoly(&mut rng, blen);
            let cinv = inv_series_newton(&c.reverse(c.len()), c.len());

            let d = compose_mod_preinv(&a, &b, &c, &cinv);
            let e = compose(&a, &b).rem(&c);
            assert_eq!(d, e, "a = {a}, b = {b}, c = {c}");
        }
    }

    #[test]
    fn compose_mod_preinv_unreduced_first_argument() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);

        for _ in 0..20 {
            let (clen, alen, blen) = (rng.gen_range(2..12), rng.gen_range(10..30), rng.gen_range(1..30));
            let c = random_nonzero_fpoly(&mut rng, clen);
            let a = random_fpoly(&mut rng, alen);
            let b = random_fpoly(&mut rng, blen);
            let cinv = inv_series_newton(&c.reverse(c.len()), c.len());

            assert_eq!(compose_mod_preinv(&a, &b, &c, &cinv), compose(&a, &b).rem(&c));
        }
    }

    #[test]
    fn inv_series_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for n in 1..30 {
            let mut f = random_fpoly(&mut rng, 20);
            if f.coeff(0).is_zero() {
                f = f.add(&DensePoly::one());
            }
            let g = inv_series_newton(&f, n);
            assert_eq!(f.mul_low(&g, n), DensePoly::one());
        }
    }
}
