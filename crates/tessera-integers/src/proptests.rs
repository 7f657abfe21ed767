//! Property-based tests for integer and modular arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, ModInt};

    type F = ModInt<1_000_003>;

    fn small_int() -> impl Strategy<Value = i64> {
        -1_000_000i64..1_000_000i64
    }

    proptest! {
        #[test]
        fn integer_matches_i128(a in small_int(), b in small_int()) {
            let (x, y) = (Integer::new(a), Integer::new(b));
            let expected = i128::from(a) * i128::from(b) + i128::from(a) - i128::from(b);
            let got = &(&x * &y) + &(&x - &y);
            prop_assert_eq!(got.to_string(), expected.to_string());
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let x = Integer::new(a);
            prop_assert!((&x + &(-&x)).is_zero());
        }

        #[test]
        fn modint_matches_i128(a in any::<i64>(), b in any::<i64>()) {
            let p = i128::from(F::modulus());
            let expected = (i128::from(a) * i128::from(b) - i128::from(a)).rem_euclid(p);
            let got = F::from_signed(a) * F::from_signed(b) - F::from_signed(a);
            prop_assert_eq!(i128::from(got.value()), expected);
        }

        #[test]
        fn modint_inverse(a in 1u64..1_000_003u64) {
            let x = F::new(a);
            let inv = x.inv().unwrap();
            prop_assert_eq!((x * inv).value(), 1);
        }
    }
}
