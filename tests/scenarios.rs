use dec_big_int::{BigInt, ParseBigIntError, Sign};

#[test]
fn zero_renders_as_zero() {
    let zero = BigInt::from(0_i32);
    assert_eq!(zero.to_string(), "0");
    assert_eq!(zero.digits(), &[0]);
    assert_eq!(zero.sign(), Sign::NonNegative);
    assert_eq!(zero, BigInt::default());
}

#[test]
fn negative_renders_with_minus() {
    assert_eq!(BigInt::from(-45_i32).to_string(), "-45");
    assert_eq!(BigInt::from(-1_i64).to_string(), "-1");
}

#[test]
fn carry_runs_through_every_digit() {
    let sum = BigInt::from(999_i32) + BigInt::from(1_i32);
    assert_eq!(sum.to_string(), "1000");
}

#[test]
fn equal_magnitudes_of_opposite_sign_cancel() {
    let sum = BigInt::from(500_i32) + BigInt::from(-500_i32);
    assert_eq!(sum.to_string(), "0");
    assert_eq!(sum.sign(), Sign::NonNegative);
}

#[test]
fn larger_magnitude_sign_wins() {
    assert_eq!((BigInt::from(-300_i32) + BigInt::from(150_i32)).to_string(), "-150");
    assert_eq!((BigInt::from(7_i32) + BigInt::from(-10_i32)).to_string(), "-3");
    assert_eq!((BigInt::from(150_i32) + BigInt::from(-300_i32)).to_string(), "-150");
    assert_eq!((BigInt::from(-7_i32) + BigInt::from(10_i32)).to_string(), "3");
}

#[test]
fn machine_integer_operands() {
    let a = BigInt::from(12345_i32);
    assert_eq!(&a + 0_i32, a);
    assert_eq!(0_i32 + &a, a);
    assert_eq!((&a + 54321_u32).to_string(), "66666");
    assert_eq!((&a - 12346_i64).to_string(), "-1");
    assert_eq!((&a * -2_i8).to_string(), "-24690");
    assert_eq!((2_u64 * &a).to_string(), "24690");
}

#[test]
fn large_values_beyond_machine_width() {
    let a: BigInt = "340282366920938463463374607431768211455".parse().unwrap();
    let b = BigInt::from(u128::MAX);
    assert_eq!(a, b);
    assert_eq!((&a + 1_u8).to_string(), "340282366920938463463374607431768211456");
    assert_eq!(
        (&a * &a).to_string(),
        "115792089237316195423570985008687907852589419931798687112530834793049593217025"
    );
    assert_eq!((&a - &a * 2_u8).to_string(), "-340282366920938463463374607431768211455");
}

#[test]
fn comparison_with_primitives() {
    let bi = BigInt::from(12345_i32);
    assert!(bi == 12345_i32);
    assert!(12345_i32 == bi);
    assert!(bi > -12345_i32);
    assert!(-12345_i32 < bi);
    assert!(BigInt::from(-12345_i32) > BigInt::from(-12346_i32));
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!("+".parse::<BigInt>(), Err(ParseBigIntError::NoDigits));
    assert_eq!(
        "0x10".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { position: 1, found: 'x' })
    );
    assert_eq!(
        "1_000".parse::<BigInt>().unwrap_err().to_string(),
        "invalid digit `_` found at byte 1"
    );
}

#[test]
fn repeated_multiplication() {
    let a = BigInt::from(10_000_000_000_i64);
    let mut b = a.clone();
    for _ in 0..4 {
        b = b * &a;
    }
    assert_eq!(b.to_string(), format!("1{}", "0".repeat(50)));
    assert_eq!(b, a.pow(5));
}
