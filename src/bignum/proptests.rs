//! Property-based tests for the decimal big-number engine.

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::{bignum::BigInt, config::DigitLimit, error::NumberError};

fn limit() -> DigitLimit {
    DigitLimit::default()
}

fn big(value: u128) -> BigInt {
    BigInt::from_decimal(&value.to_string(), limit()).unwrap()
}

fn reference(text: &str) -> BigUint {
    text.parse().unwrap()
}

// Canonical decimal text: no leading zeros unless the value is zero
fn decimal_text() -> impl Strategy<Value = String> {
    prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,80}"]
}

proptest! {
    #[test]
    fn decimal_round_trip(text in decimal_text()) {
        let value = BigInt::from_decimal(&text, limit()).unwrap();
        prop_assert_eq!(value.to_string(), text);
    }

    #[test]
    fn leading_zeros_are_dropped(zeros in 1usize..5, value in any::<u64>()) {
        let text = format!("{}{value}", "0".repeat(zeros));
        prop_assert_eq!(BigInt::from_decimal(&text, limit()).unwrap(), big(value.into()));
    }

    #[test]
    fn from_u64_matches_text(value in any::<u64>()) {
        prop_assert_eq!(BigInt::from_u64(value, limit()).unwrap(), big(value.into()));
    }

    #[test]
    fn ordering_matches_u128(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(big(a.into()).cmp(&big(b.into())), a.cmp(&b));
    }

    #[test]
    fn add_and_mul_match_u128(a in any::<u64>(), b in any::<u64>()) {
        let (a, b) = (u128::from(a), u128::from(b));
        prop_assert_eq!(big(a).add(&big(b), limit()).unwrap(), big(a + b));
        prop_assert_eq!(big(a).mul(&big(b), limit()).unwrap(), big(a * b));
    }

    #[test]
    fn sub_matches_u128_or_fails(a in any::<u64>(), b in any::<u64>()) {
        let result = big(a.into()).sub(&big(b.into()));
        if a >= b {
            prop_assert_eq!(result.unwrap(), big((a - b).into()));
        } else {
            let is_negative = matches!(result, Err(NumberError::NegativeResult { .. }));
            prop_assert!(is_negative);
        }
    }

    #[test]
    fn division_matches_u128(a in any::<u64>(), b in 1..=u64::MAX) {
        let (q, r) = big(a.into()).div_rem(&big(b.into())).unwrap();
        prop_assert_eq!(q, big((a / b).into()));
        prop_assert_eq!(r, big((a % b).into()));
    }

    #[test]
    fn long_operands_match_biguint(a in decimal_text(), b in decimal_text()) {
        let (x, y) = (BigInt::from_decimal(&a, limit()).unwrap(),
                      BigInt::from_decimal(&b, limit()).unwrap());
        let (rx, ry) = (reference(&a), reference(&b));

        prop_assert_eq!(x.add(&y, limit()).unwrap().to_string(), (&rx + &ry).to_string());
        prop_assert_eq!(x.mul(&y, limit()).unwrap().to_string(), (&rx * &ry).to_string());
        if rx >= ry {
            prop_assert_eq!(x.sub(&y).unwrap().to_string(), (&rx - &ry).to_string());
        } else {
            prop_assert!(x.sub(&y).is_err());
        }
        if y.is_zero() {
            prop_assert!(x.floordiv(&y).is_err());
            prop_assert!(x.rem(&y).is_err());
        } else {
            prop_assert_eq!(x.floordiv(&y).unwrap().to_string(), (&rx / &ry).to_string());
            prop_assert_eq!(x.rem(&y).unwrap().to_string(), (&rx % &ry).to_string());
        }
    }

    #[test]
    fn long_roots_match_biguint(text in decimal_text()) {
        let n = BigInt::from_decimal(&text, limit()).unwrap();
        prop_assert_eq!(n.sqrt().to_string(), reference(&text).sqrt().to_string());
    }

    #[test]
    fn division_identity(a in decimal_text(), b in "[1-9][0-9]{0,30}") {
        let a = BigInt::from_decimal(&a, limit()).unwrap();
        let b = BigInt::from_decimal(&b, limit()).unwrap();
        let q = a.floordiv(&b).unwrap();
        let r = a.rem(&b).unwrap();

        prop_assert!(r < b);
        let rebuilt = q.mul(&b, limit()).unwrap().add(&r, limit()).unwrap();
        prop_assert_eq!(rebuilt, a);
    }

    #[test]
    fn pow_matches_u128(base in 0u64..1000, exponent in 0u64..=6) {
        let expected = u128::from(base).pow(u32::try_from(exponent).unwrap());
        let result = big(base.into()).pow(&big(exponent.into()), limit()).unwrap();
        prop_assert_eq!(result, big(expected));
    }

    #[test]
    fn pow_never_shrinks_the_base(base in "[1-9][0-9]{0,10}", exponent in 1u64..20) {
        let base = BigInt::from_decimal(&base, limit()).unwrap();
        let result = base.pow(&big(exponent.into()), limit()).unwrap();
        prop_assert!(result >= base);
    }

    #[test]
    fn sqrt_matches_isqrt(value in any::<u64>()) {
        prop_assert_eq!(big(value.into()).sqrt(), big(value.isqrt().into()));
    }

    #[test]
    fn sqrt_bounds(text in decimal_text()) {
        let n = BigInt::from_decimal(&text, limit()).unwrap();
        let root = n.sqrt();
        let next = root.add(&BigInt::one(), limit()).unwrap();

        prop_assert!(root.mul(&root, limit()).unwrap() <= n);
        prop_assert!(next.mul(&next, limit()).unwrap() > n);
    }

    #[test]
    fn results_respect_the_limit(a in "[1-9][0-9]{5,9}", b in "[1-9][0-9]{5,9}") {
        let small = DigitLimit::new(12).unwrap();
        let a = BigInt::from_decimal(&a, small).unwrap();
        let b = BigInt::from_decimal(&b, small).unwrap();

        match a.mul(&b, small) {
            Ok(product) => prop_assert!(product.digit_count() <= 12),
            Err(NumberError::LimitExceeded { digits, limit }) => {
                prop_assert!(digits > 12);
                prop_assert_eq!(limit, 12);
            },
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }
}
