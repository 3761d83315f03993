use dec_big_int::{BigInt, Sign};
use num_traits::ToPrimitive;
use proptest::prelude::*;

/// Values well beyond 128 bits, built from decimal literals.
fn arb_big_int() -> impl Strategy<Value = BigInt> {
    prop_oneof![
        any::<i64>().prop_map(BigInt::from),
        "-?[1-9][0-9]{0,60}".prop_map(|s| s.parse::<BigInt>().unwrap()),
        Just(BigInt::zero()),
    ]
}

fn is_canonical(x: &BigInt) -> bool {
    let digits = x.digits();
    !digits.is_empty()
        && digits.iter().all(|d| *d < 10)
        && (digits.len() == 1 || digits[0] != 0)
        && !(x.sign() == Sign::Negative && matches!(digits, [0]))
}

proptest! {
    #[test]
    fn display_matches_primitive(n in any::<i128>()) {
        prop_assert_eq!(BigInt::from(n).to_string(), n.to_string());
    }

    #[test]
    fn parse_display_round_trip(x in arb_big_int()) {
        let parsed: BigInt = x.to_string().parse().unwrap();
        prop_assert_eq!(parsed, x);
    }

    #[test]
    fn arithmetic_matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!((&x + &y).to_string(), (a + b).to_string());
        prop_assert_eq!((&x - &y).to_string(), (a - b).to_string());
        prop_assert_eq!((&x * &y).to_string(), (a * b).to_string());
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        prop_assert_eq!((&x + &y).to_i128(), Some(a + b));
    }

    #[test]
    fn results_stay_canonical(x in arb_big_int(), y in arb_big_int()) {
        prop_assert!(is_canonical(&(&x + &y)));
        prop_assert!(is_canonical(&(&x - &y)));
        prop_assert!(is_canonical(&(&x * &y)));
        prop_assert!(is_canonical(&-&x));
    }

    #[test]
    fn addition_commutes(x in arb_big_int(), y in arb_big_int()) {
        prop_assert_eq!(&x + &y, &y + &x);
    }

    #[test]
    fn addition_associates(x in arb_big_int(), y in arb_big_int(), z in arb_big_int()) {
        prop_assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
    }

    #[test]
    fn zero_is_additive_identity(x in arb_big_int()) {
        prop_assert_eq!(&x + BigInt::from(0_i32), x.clone());
        prop_assert_eq!(&x + 0_i64, x);
    }

    #[test]
    fn negation_is_additive_inverse(x in arb_big_int()) {
        let sum = &x + &(-&x);
        prop_assert_eq!(sum.digits(), &[0]);
        prop_assert_eq!(sum.sign(), Sign::NonNegative);
    }

    #[test]
    fn subtraction_adds_the_negation(x in arb_big_int(), y in arb_big_int()) {
        prop_assert_eq!(&x - &y, &x + &(-&y));
    }

    #[test]
    fn multiplication_commutes_and_distributes(x in arb_big_int(), y in arb_big_int(), z in arb_big_int()) {
        prop_assert_eq!(&x * &y, &y * &x);
        prop_assert_eq!(&x * &(&y + &z), &(&x * &y) + &(&x * &z));
    }

    #[test]
    fn pow_matches_repeated_multiplication(x in arb_big_int(), exp in 0_u32..8) {
        let expected: BigInt = std::iter::repeat(&x).take(exp as usize).product();
        prop_assert_eq!(x.pow(exp), expected);
    }

    #[test]
    fn ordering_agrees_with_subtraction(x in arb_big_int(), y in arb_big_int()) {
        let diff = &x - &y;
        let expected = if diff.is_zero() {
            std::cmp::Ordering::Equal
        } else if diff.is_negative() {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Greater
        };
        prop_assert_eq!(x.cmp(&y), expected);
    }
}
