//! Property-based tests for the arithmetic core.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Mp, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn mp_add_commutative(a in small_int(), b in small_int()) {
            let a = Mp::new(a);
            let b = Mp::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mp_add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Mp::new(a);
            let b = Mp::new(b);
            let c = Mp::new(c);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mp_mul_commutative(a in small_int(), b in small_int()) {
            let a = Mp::new(a);
            let b = Mp::new(b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mp_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Mp::new(a);
            let b = Mp::new(b);
            let c = Mp::new(c);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn mp_additive_inverse(a in small_int()) {
            let a = Mp::new(a);
            let neg_a = -&a;
            prop_assert_eq!(&a + &neg_a, Mp::zero());
            prop_assert_eq!(&a - &a, Mp::zero());
        }

        #[test]
        fn mp_matches_machine_arithmetic(a in small_int(), b in small_int()) {
            prop_assert_eq!(Mp::new(a) + Mp::new(b), Mp::new(a + b));
            prop_assert_eq!(Mp::new(a) * Mp::new(b), Mp::new(a * b));
        }

        // Division identity: a == (a / b) * b + (a % b), remainder sign
        // follows a

        #[test]
        fn mp_division_identity(a in small_int(), b in non_zero_int()) {
            let a = Mp::new(a);
            let b = Mp::new(b);
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn mp_division_matches_machine(a in small_int(), b in non_zero_int()) {
            prop_assert_eq!(Mp::new(a) / Mp::new(b), Mp::new(a / b));
            prop_assert_eq!(Mp::new(a) % Mp::new(b), Mp::new(a % b));
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Mp::new(a);
            let b = Mp::new(b);
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
            prop_assert!(g >= Mp::zero());
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = Mp::new(a);
            let b = Mp::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Digit access

        #[test]
        fn digit_set_then_get(a in 0i64..1_000_000_000, i in 0usize..12, val in 0u32..10) {
            let mut n = Mp::new(a);
            n.set_digit(i, val).unwrap();
            prop_assert_eq!(n.get_digit(i), val);
        }

        // Rational invariant: reduced with a positive denominator after
        // every construction and operation

        #[test]
        fn rational_stays_reduced(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            for r in [&a + &b, &a - &b, &a * &b] {
                prop_assert!(r.denominator() > Mp::zero());
                prop_assert!(r.numerator().gcd(&r.denominator()).is_one());
            }
        }

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den).unwrap();
            let inv = a.pow(-1).unwrap();
            prop_assert!((&a * &inv).is_one());
        }

        // pow(-p) is (1/x)^p

        #[test]
        fn rational_negative_pow(num in non_zero_int(), den in non_zero_int(), p in 1i64..6) {
            let a = Rational::from_i64(num, den).unwrap();
            let inverted = Rational::one().checked_div(&a).unwrap();
            prop_assert_eq!(a.pow(-p).unwrap(), inverted.pow(p).unwrap());
        }

        // Factorization round trip over positive values

        #[test]
        fn factorization_round_trip(n in 1i64..5000) {
            let n = Mp::new(n);
            let product = n
                .prime_factorization()
                .unwrap()
                .into_iter()
                .fold(Mp::one(), |acc, (prime, exponent)| {
                    &acc * &prime.pow(i64::from(exponent)).unwrap()
                });
            prop_assert_eq!(product, n.abs());
        }
    }
}
