//! # BigInt
//! Immutable arbitrary-precision signed integers stored as base-10 digits.
//! The magnitude is kept most-significant digit first, the sign is kept apart from it,
//! and zero is always non-negative.
//! # Example
//! ```
//! use dec_big_int::BigInt;
//!
//! let a = BigInt::from(999_i32);
//! let b = BigInt::from(-1000_i64);
//! assert_eq!((&a + &b).to_string(), "-1");
//! assert_eq!((&a - &b).to_string(), "1999");
//! assert_eq!((&a * &b).to_string(), "-999000");
//! assert_eq!(a.pow(3).to_string(), "997002999");
//! ```
//!

use std::fmt::{self, Display};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};
use std::cmp::Ordering;
use std::str::FromStr;

use log::debug;
use num_traits::{One, ToPrimitive, Zero};

use crate::big_int_constants::*;
use crate::big_int_cache::*;
use crate::error::{ParseBigIntError, TryFromBigIntError};

/// Removes leading zero digits, always keeping at least one digit.
macro_rules! strip_leading_zero {
    ($vec: expr) => {
        {
            let mut v: Vec<u8> = $vec;
            let leading = v
                .iter()
                .take_while(|d| **d == 0)
                .count()
                .min(v.len().saturating_sub(1));
            v.drain(..leading);
            if v.is_empty() {
                v.push(0);
            }
            v
        }
    };
}

macro_rules! is_zero_mag {
    ($mag: expr) => {
        matches!($mag[..], [0])
    };
}

/// Sign of a [`BigInt`], kept apart from its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    NonNegative,
    Negative,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// Every value owns its digits: cloning deep-copies them, and no two values ever share storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    digits: Vec<u8>,
}

// 实现构造
impl BigInt {
    /// Builds a value from digits that already satisfy the invariants.
    pub(crate) fn from_raw(digits: Vec<u8>, sign: Sign) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.len() == 1 || digits[0] != 0);
        debug_assert!(!(sign == Sign::Negative && is_zero_mag!(digits)));
        BigInt { sign, digits }
    }
    fn new(digits: Vec<u8>, sign: Sign) -> Self {
        let digits = strip_leading_zero!(digits);
        let sign = if is_zero_mag!(digits) { Sign::NonNegative } else { sign };
        BigInt { sign, digits }
    }
    pub fn zero() -> Self {
        BigInt { sign: Sign::NonNegative, digits: vec![0] }
    }
    pub fn one() -> Self {
        BigInt { sign: Sign::NonNegative, digits: vec![1] }
    }
    fn value_of(mut val: u128, sign: Sign) -> BigInt {
        // the digit loop below produces nothing for zero
        if val == 0 {
            return BigInt::zero();
        }
        if val <= MAX_CONSTANT as u128 {
            return match sign {
                Sign::NonNegative => POS_CACHE[val as usize].clone(),
                Sign::Negative => NEG_CACHE[val as usize].clone(),
            };
        }
        let mut digits = Vec::with_capacity(MAX_U128_DIGITS);
        while val != 0 {
            digits.push((val % RADIX as u128) as u8);
            val /= RADIX as u128;
        }
        digits.reverse();
        BigInt { sign, digits }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl From<&BigInt> for BigInt {
    fn from(val: &BigInt) -> Self {
        val.clone()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, Sign::NonNegative)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            if val < 0 {
                BigInt::value_of(val.unsigned_abs() as u128, Sign::Negative)
            } else {
                BigInt::value_of(val as u128, Sign::NonNegative)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

// 杂项辅助函数
impl BigInt {
    pub fn sign(&self) -> Sign {
        self.sign
    }
    /// Decimal digits of the magnitude, most significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
    pub fn len_digits(&self) -> usize {
        self.digits.len()
    }
    pub fn is_zero(&self) -> bool {
        is_zero_mag!(self.digits)
    }
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::NonNegative && !self.is_zero()
    }
    /// Returns `-1`, `0` or `1`.
    pub fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::zero()
        } else if self.is_negative() {
            BigInt::from(-1_i8)
        } else {
            BigInt::one()
        }
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(self.digits.len() + 1);
        if self.sign == Sign::Negative {
            s.push('-');
        }
        s.extend(self.digits.iter().map(|d| DIGITS[*d as usize]));
        f.write_str(&s)
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        BigInt::parse_decimal(val).map_err(|e| {
            debug!("rejected decimal literal {:?}: {}", val, e);
            e
        })
    }
}

impl BigInt {
    fn parse_decimal(val: &str) -> Result<BigInt, ParseBigIntError> {
        let (sign, cursor) = match val.as_bytes().first() {
            None => return Err(ParseBigIntError::Empty),
            Some(b'-') => (Sign::Negative, 1),
            Some(b'+') => (Sign::NonNegative, 1),
            Some(_) => (Sign::NonNegative, 0),
        };

        let body = &val[cursor..];
        if body.is_empty() {
            return Err(ParseBigIntError::NoDigits);
        }

        let mut digits = Vec::with_capacity(body.len());
        for (i, c) in body.char_indices() {
            match c.to_digit(RADIX as u32) {
                Some(d) => digits.push(d as u8),
                None => {
                    return Err(ParseBigIntError::InvalidDigit { position: cursor + i, found: c });
                }
            }
        }
        Ok(BigInt::new(digits, sign))
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(x: &[u8], y: &[u8]) -> Ordering {
        match x.len().cmp(&y.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        for (a, b) in x.iter().zip(y) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::NonNegative) => Ordering::Less,
            (Sign::NonNegative, Sign::NonNegative) => BigInt::compare_mag(&self.digits, &other.digits),
            (Sign::Negative, Sign::Negative) => BigInt::compare_mag(&other.digits, &self.digits),
        }
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        BigInt { sign: Sign::NonNegative, digits: self.digits.clone() }
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { sign, digits } = self;
        BigInt::new(digits, -sign)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl BigInt {
    fn add_signed(x: &BigInt, y: &BigInt) -> BigInt {
        BigInt::add_with_sign(x, &y.digits, y.sign)
    }
    /// Adds `x` and the value with magnitude `y_mag` and sign `y_sign`.
    fn add_with_sign(x: &BigInt, y_mag: &[u8], y_sign: Sign) -> BigInt {
        if x.sign == y_sign {
            return BigInt::new(BigInt::add_mag(&x.digits, y_mag), x.sign);
        }

        match BigInt::compare_mag(&x.digits, y_mag) {
            Ordering::Less => BigInt::new(BigInt::sub_mag(y_mag, &x.digits), y_sign),
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::new(BigInt::sub_mag(&x.digits, y_mag), x.sign),
        }
    }
    fn add_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (x, y) = if x.len() < y.len() { (y, x) } else { (x, y) };

        let mut result = Vec::with_capacity(x.len() + 1);
        let mut y_iter = y.iter().rev();
        let mut carry = 0;
        for &a in x.iter().rev() {
            let b = y_iter.next().copied().unwrap_or(0);
            let sum = a + b + carry;
            result.push(sum % RADIX);
            carry = sum / RADIX;
        }

        if carry != 0 {
            result.push(carry);
        }
        result.reverse();
        result
    }
}

// 实现减法
impl BigInt {
    fn sub_signed(x: &BigInt, y: &BigInt) -> BigInt {
        BigInt::add_with_sign(x, &y.digits, -y.sign)
    }
    /// `big - little`, where `big` is not smaller than `little` in magnitude.
    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
        debug_assert!(
            BigInt::compare_mag(big, little) != Ordering::Less,
            "magnitude subtraction would underflow"
        );

        let mut result = Vec::with_capacity(big.len());
        let mut little_iter = little.iter().rev();
        let mut borrow = 0;
        for &a in big.iter().rev() {
            let b = little_iter.next().copied().unwrap_or(0);
            let mut difference = a as i8 - b as i8 - borrow;
            if difference < 0 {
                difference += RADIX as i8;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(difference as u8);
        }

        result.reverse();
        strip_leading_zero!(result)
    }
}

// 实现乘法
impl BigInt {
    fn mul_signed(x: &BigInt, y: &BigInt) -> BigInt {
        if x.is_zero() || y.is_zero() {
            return BigInt::zero();
        }
        let sign = if x.sign == y.sign { Sign::NonNegative } else { Sign::Negative };
        BigInt::new(BigInt::mul_mag(&x.digits, &y.digits), sign)
    }
    /// Long multiplication: one shifted partial product per digit of `y`.
    fn mul_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut product = vec![0];
        for (shift, &d) in y.iter().rev().enumerate() {
            if d == 0 {
                continue;
            }
            let mut partial = BigInt::mul_by_digit(x, d);
            if !is_zero_mag!(partial) {
                partial.resize(partial.len() + shift, 0);
            }
            product = BigInt::add_mag(&product, &partial);
        }
        product
    }
    fn mul_by_digit(x: &[u8], d: u8) -> Vec<u8> {
        if d == 0 {
            return vec![0];
        }
        let mut result = Vec::with_capacity(x.len() + 1);
        let mut carry = 0;
        for &a in x.iter().rev() {
            // at most 9 * 9 + 8
            let product = a * d + carry;
            result.push(product % RADIX);
            carry = product / RADIX;
        }
        if carry != 0 {
            result.push(carry);
        }
        result.reverse();
        result
    }
    pub fn square(&self) -> BigInt {
        BigInt::new(BigInt::mul_mag(&self.digits, &self.digits), Sign::NonNegative)
    }
    /// Raises `self` to `exp` by repeated squaring. `x.pow(0)` is one, including for zero.
    pub fn pow(&self, mut exp: u32) -> BigInt {
        let mut base = self.clone();
        let mut result = BigInt::one();
        while exp > 0 {
            if exp & 1 == 1 {
                result = BigInt::mul_signed(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.square();
            }
        }
        result
    }
}

macro_rules! impl_big_int_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $core: ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$core(self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$core(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$core(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$core(self, &rhs)
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = BigInt::$core(self, &rhs);
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = BigInt::$core(self, rhs);
            }
        }
    };
}

impl_big_int_binop!(Add, add, AddAssign, add_assign, add_signed);
impl_big_int_binop!(Sub, sub, SubAssign, sub_assign, sub_signed);
impl_big_int_binop!(Mul, mul, MulAssign, mul_assign, mul_signed);

// machine integers are converted first, then take the BigInt path
macro_rules! impl_primitive_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $core: ident; $($t: ty),*) => {
    $(
        impl $imp<$t> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: $t) -> Self::Output {
                BigInt::$core(&self, &BigInt::from(rhs))
            }
        }

        impl $imp<$t> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: $t) -> Self::Output {
                BigInt::$core(self, &BigInt::from(rhs))
            }
        }

        impl $imp<BigInt> for $t {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$core(&BigInt::from(self), &rhs)
            }
        }

        impl $imp<&BigInt> for $t {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$core(&BigInt::from(self), rhs)
            }
        }

        impl $assign_imp<$t> for BigInt {
            fn $assign_method(&mut self, rhs: $t) {
                *self = BigInt::$core(self, &BigInt::from(rhs));
            }
        }
    )*
    };
}

macro_rules! impl_primitive_cmp {
    ($($t: ty),*) => {
    $(
        impl PartialEq<$t> for BigInt {
            fn eq(&self, other: &$t) -> bool {
                *self == BigInt::from(*other)
            }
        }

        impl PartialEq<BigInt> for $t {
            fn eq(&self, other: &BigInt) -> bool {
                BigInt::from(*self) == *other
            }
        }

        impl PartialOrd<$t> for BigInt {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp(&BigInt::from(*other)))
            }
        }

        impl PartialOrd<BigInt> for $t {
            fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
                Some(BigInt::from(*self).cmp(other))
            }
        }
    )*
    };
}

macro_rules! impl_primitive_ops {
    ($($t: ty),*) => {
        impl_primitive_binop!(Add, add, AddAssign, add_assign, add_signed; $($t),*);
        impl_primitive_binop!(Sub, sub, SubAssign, sub_assign, sub_signed; $($t),*);
        impl_primitive_binop!(Mul, mul, MulAssign, mul_assign, mul_signed; $($t),*);
        impl_primitive_cmp!($($t),*);
    };
}

impl_primitive_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| BigInt::add_signed(&acc, &x))
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| BigInt::add_signed(&acc, x))
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| BigInt::mul_signed(&acc, &x))
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| BigInt::mul_signed(&acc, x))
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::zero()
    }
    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::one()
    }
}

// 实现到基本类型的转换
impl BigInt {
    fn mag_to_u128(&self) -> Option<u128> {
        self.digits
            .iter()
            .try_fold(0_u128, |acc, &d| acc.checked_mul(RADIX as u128)?.checked_add(d as u128))
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }
    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }
    fn to_i128(&self) -> Option<i128> {
        let mag = self.mag_to_u128()?;
        match self.sign {
            Sign::NonNegative => i128::try_from(mag).ok(),
            Sign::Negative if mag <= i128::MIN.unsigned_abs() => Some((mag as i128).wrapping_neg()),
            Sign::Negative => None,
        }
    }
    fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Sign::NonNegative => self.mag_to_u128(),
            Sign::Negative => None,
        }
    }
}

macro_rules! impl_try_from_big_int {
    ($($t: ty => $to: ident),*) => {
    $(
    impl TryFrom<&BigInt> for $t {
        type Error = TryFromBigIntError;

        fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
            val.$to().ok_or_else(|| {
                debug!("{} does not fit in {}", val, stringify!($t));
                TryFromBigIntError::new(stringify!($t))
            })
        }
    }

    impl TryFrom<BigInt> for $t {
        type Error = TryFromBigIntError;

        fn try_from(val: BigInt) -> Result<Self, Self::Error> {
            <$t>::try_from(&val)
        }
    }
    )*
    };
}
impl_try_from_big_int!(i64 => to_i64, u64 => to_u64, i128 => to_i128, u128 => to_u128);

#[test]
fn test_from() {
    let zero = BigInt::from(0_i32);
    assert_eq!(zero.digits, vec![0]);
    assert_eq!(zero.sign, Sign::NonNegative);
    assert_eq!(zero, BigInt::default());

    let a = BigInt::from(-45_i32);
    assert_eq!(a.digits, vec![4, 5]);
    assert_eq!(a.sign, Sign::Negative);

    let b = BigInt::from(1_000_000_007_u64);
    assert_eq!(b.digits, vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 7]);
    assert_eq!(b.sign, Sign::NonNegative);

    // cached and uncached values around the cache bound
    assert_eq!(BigInt::from(16_u8).digits, vec![1, 6]);
    assert_eq!(BigInt::from(-16_i8).sign, Sign::Negative);
    assert_eq!(BigInt::from(17_u8).digits, vec![1, 7]);
    assert_eq!(BigInt::from(-17_i8).sign, Sign::Negative);

    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(i128::MIN).to_string(), "-170141183460469231731687303715884105728");
    assert_eq!(BigInt::from(u128::MAX).to_string(), "340282366920938463463374607431768211455");
    assert_eq!(BigInt::from(u128::MAX).len_digits(), MAX_U128_DIGITS);
}

#[test]
fn test_copy_does_not_alias() {
    let a = BigInt::from(12345_i32);
    let mut b = BigInt::from(&a);
    assert_eq!(a, b);
    b.digits[0] = 9;
    assert_eq!(a.to_string(), "12345");
    assert_eq!(b.to_string(), "92345");

    // values handed out by the cache are independent too
    let mut c = BigInt::from(5_i32);
    c.digits[0] = 7;
    assert_eq!(BigInt::from(5_i32).to_string(), "5");
    assert_eq!(POS_CACHE[5].to_string(), "5");
}

#[test]
fn test_new_normalizes() {
    assert_eq!(BigInt::new(vec![0, 0, 1, 2], Sign::Negative).digits, vec![1, 2]);
    let z = BigInt::new(vec![0, 0, 0], Sign::Negative);
    assert_eq!(z.digits, vec![0]);
    assert_eq!(z.sign, Sign::NonNegative);
    assert_eq!(BigInt::new(vec![], Sign::NonNegative), BigInt::zero());
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::zero().to_string(), "0");
    assert_eq!(BigInt::from(-45_i32).to_string(), "-45");
    assert_eq!(BigInt::from(10_000_000_000_i64).to_string(), "10000000000");
    assert_eq!((-BigInt::zero()).to_string(), "0");
}

#[test]
fn test_parse() {
    let a: BigInt = "12345678909876523784950683472613487560983287654321".parse().unwrap();
    assert_eq!(a.to_string(), "12345678909876523784950683472613487560983287654321");

    assert_eq!("+42".parse::<BigInt>().unwrap(), BigInt::from(42_i32));
    assert_eq!("-0007".parse::<BigInt>().unwrap(), BigInt::from(-7_i32));
    assert_eq!("-000".parse::<BigInt>().unwrap(), BigInt::zero());
    assert_eq!("-000".parse::<BigInt>().unwrap().sign(), Sign::NonNegative);

    assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::NoDigits));
    assert_eq!(
        "12a4".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { position: 2, found: 'a' })
    );
    assert_eq!(
        "-1 2".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { position: 2, found: ' ' })
    );
    assert_eq!(
        "+-1".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { position: 1, found: '-' })
    );
}

#[test]
fn test_compare_mag() {
    assert_eq!(BigInt::compare_mag(&[1, 0, 0], &[9, 9]), Ordering::Greater);
    assert_eq!(BigInt::compare_mag(&[9, 9], &[1, 0, 0]), Ordering::Less);
    assert_eq!(BigInt::compare_mag(&[1, 2, 3], &[1, 2, 4]), Ordering::Less);
    assert_eq!(BigInt::compare_mag(&[1, 2, 3], &[1, 2, 3]), Ordering::Equal);
    assert_eq!(BigInt::compare_mag(&[0], &[0]), Ordering::Equal);
}

#[test]
fn test_cmp() {
    let pos = BigInt::from(12345_i32);
    let neg = BigInt::from(-12345_i32);
    assert!(pos > neg);
    assert!(BigInt::from(12345_i32) < BigInt::from(12346_i32));
    assert!(BigInt::from(-12345_i32) > BigInt::from(-12346_i32));
    assert!(BigInt::zero() > BigInt::from(-1_i32));
    assert_eq!(BigInt::from(7_i32).cmp(&BigInt::from(7_i64)), Ordering::Equal);

    assert!(pos == 12345_i32);
    assert!(-12345_i64 == neg);
    assert!(neg < 0_u8);
    assert!(0_u8 < pos);
}

#[test]
fn test_add_mag() {
    assert_eq!(BigInt::add_mag(&[9, 9, 9], &[1]), vec![1, 0, 0, 0]);
    assert_eq!(BigInt::add_mag(&[1], &[9, 9, 9]), vec![1, 0, 0, 0]);
    assert_eq!(BigInt::add_mag(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1]), vec![6, 6, 6, 6, 6]);
    assert_eq!(BigInt::add_mag(&[0], &[0]), vec![0]);
    assert_eq!(BigInt::add_mag(&[0], &[7]), vec![7]);
}

#[test]
fn test_sub_mag() {
    assert_eq!(BigInt::sub_mag(&[3, 0, 0], &[1, 5, 0]), vec![1, 5, 0]);
    assert_eq!(BigInt::sub_mag(&[1, 0, 0, 0], &[1]), vec![9, 9, 9]);
    assert_eq!(BigInt::sub_mag(&[1, 0, 0, 0], &[9, 9, 9]), vec![1]);
    assert_eq!(BigInt::sub_mag(&[5, 0, 0], &[5, 0, 0]), vec![0]);
}

#[test]
fn test_add() {
    let a = BigInt::from(999_i32) + BigInt::from(1_i32);
    assert_eq!(a.to_string(), "1000");

    let b = BigInt::from(500_i32) + BigInt::from(-500_i32);
    assert_eq!(b.to_string(), "0");
    assert_eq!(b.sign, Sign::NonNegative);

    assert_eq!((BigInt::from(-300_i32) + BigInt::from(150_i32)).to_string(), "-150");
    assert_eq!((BigInt::from(7_i32) + BigInt::from(-10_i32)).to_string(), "-3");
    assert_eq!((BigInt::from(-1_i32) + BigInt::from(-2_i32)).to_string(), "-3");
    assert_eq!((BigInt::from(12345_i32) + BigInt::zero()).to_string(), "12345");

    // machine integer operands on either side
    assert_eq!((&BigInt::from(999_999_999_i64) + 1_i64).to_string(), "1000000000");
    assert_eq!((1_u8 + BigInt::from(-1_i32)).to_string(), "0");

    let mut c = BigInt::from(1_000_000_001_i64);
    c += BigInt::from(999_999_999_i64);
    assert_eq!(c.to_string(), "2000000000");
    c += 5_u32;
    assert_eq!(c.to_string(), "2000000005");
}

#[test]
fn test_add_leaves_operands_untouched() {
    let a = BigInt::from(-300_i32);
    let b = BigInt::from(150_i32);
    let c = &a + &b;
    assert_eq!(a.to_string(), "-300");
    assert_eq!(b.to_string(), "150");
    assert_eq!(c.to_string(), "-150");
}

#[test]
fn test_neg() {
    assert_eq!((-BigInt::from(5_i32)).to_string(), "-5");
    assert_eq!((-&BigInt::from(-5_i32)).to_string(), "5");
    assert_eq!((-BigInt::zero()).sign, Sign::NonNegative);
    assert_eq!(-Sign::Negative, Sign::NonNegative);
}

#[test]
fn test_sub() {
    assert_eq!((BigInt::from(1_i32) - BigInt::from(-1_i32)).to_string(), "2");
    assert_eq!((BigInt::from(3_i32) - BigInt::from(2_i32)).to_string(), "1");
    assert_eq!((BigInt::from(2_i32) - BigInt::from(3_i32)).to_string(), "-1");
    assert_eq!((BigInt::from(1_000_000_001_i64) - 1_i64).to_string(), "1000000000");
    assert_eq!((BigInt::from(1_000_000_000_i64) - 999_999_999_i64).to_string(), "1");
    assert_eq!((BigInt::from(42_i32) - BigInt::from(42_i32)).to_string(), "0");
    assert_eq!((BigInt::zero() - BigInt::zero()).sign, Sign::NonNegative);
    assert_eq!((0_i32 - BigInt::from(8_i32)).to_string(), "-8");

    let mut a = BigInt::from(10_i32);
    a -= &BigInt::from(25_i32);
    assert_eq!(a.to_string(), "-15");
}

#[test]
fn test_mul_by_digit() {
    assert_eq!(BigInt::mul_by_digit(&[9, 9, 9], 9), vec![8, 9, 9, 1]);
    assert_eq!(BigInt::mul_by_digit(&[1, 2], 0), vec![0]);
    assert_eq!(BigInt::mul_by_digit(&[1, 2], 1), vec![1, 2]);
}

#[test]
fn test_mul() {
    assert_eq!((BigInt::from(12345_i32) * 0_i32).to_string(), "0");
    assert_eq!((BigInt::from(-12345_i32) * 0_i32).sign, Sign::NonNegative);
    assert_eq!((BigInt::from(12345_i32) * BigInt::one()).to_string(), "12345");
    assert_eq!((BigInt::from(11111_i32) * BigInt::from(11111_i32)).to_string(), "123454321");
    assert_eq!((BigInt::from(10_i32) * BigInt::from(1_000_000_000_i64)).to_string(), "10000000000");
    assert_eq!((BigInt::from(-12_i32) * BigInt::from(12_i32)).to_string(), "-144");
    assert_eq!((BigInt::from(-12_i32) * BigInt::from(-12_i32)).to_string(), "144");
    assert_eq!((BigInt::from(105_i32) * BigInt::from(102_i32)).to_string(), "10710");

    let c = BigInt::from(111_111_111_i32);
    assert_eq!((&c * &c).to_string(), "12345678987654321");

    let mut d = BigInt::from(-3_i32);
    d *= 7_u8;
    assert_eq!(d.to_string(), "-21");
}

#[test]
fn test_pow() {
    let a = BigInt::from(10_000_000_000_i64);
    let expected = format!("1{}", "0".repeat(50));
    assert_eq!(a.pow(5).to_string(), expected);
    assert_eq!((&a * &a * &a * &a * &a).to_string(), expected);

    assert_eq!(BigInt::from(-2_i32).pow(3).to_string(), "-8");
    assert_eq!(BigInt::from(-2_i32).pow(4).to_string(), "16");
    assert_eq!(BigInt::zero().pow(0), BigInt::one());
    assert_eq!(BigInt::zero().pow(3), BigInt::zero());
    assert_eq!(BigInt::from(2_i32).pow(128).to_string(), "340282366920938463463374607431768211456");
    assert_eq!(BigInt::from(-7_i32).square().to_string(), "49");
}

#[test]
fn test_sum_product() {
    let values: Vec<BigInt> = (1..=20_i32).map(BigInt::from).collect();
    let sum: BigInt = values.iter().sum();
    assert_eq!(sum.to_string(), "210");
    let factorial: BigInt = values.into_iter().product();
    assert_eq!(factorial.to_string(), "2432902008176640000");

    let empty: Vec<BigInt> = Vec::new();
    assert_eq!(empty.iter().sum::<BigInt>(), BigInt::zero());
    assert_eq!(empty.iter().product::<BigInt>(), BigInt::one());
}

#[test]
fn test_signum_abs() {
    assert_eq!(BigInt::from(-45_i32).abs().to_string(), "45");
    assert_eq!(BigInt::from(-45_i32).signum().to_string(), "-1");
    assert_eq!(BigInt::zero().signum().to_string(), "0");
    assert_eq!(BigInt::from(45_i32).signum().to_string(), "1");
    assert!(BigInt::from(45_i32).is_positive());
    assert!(!BigInt::zero().is_positive());
    assert!(!BigInt::zero().is_negative());
}

#[test]
fn test_to_primitive() {
    assert_eq!(BigInt::from(123456789110_u64).to_u64(), Some(123456789110));
    assert_eq!(BigInt::from(-5_i32).to_u64(), None);
    assert_eq!(BigInt::from(i64::MIN).to_i64(), Some(i64::MIN));
    assert_eq!(BigInt::from(i128::MIN).to_i128(), Some(i128::MIN));
    assert_eq!(BigInt::from(u128::MAX).to_i128(), None);
    assert_eq!((BigInt::from(u128::MAX) + 1_u8).to_u128(), None);

    assert_eq!(i64::try_from(&BigInt::from(-45_i32)), Ok(-45));
    let err = u64::try_from(BigInt::from(-1_i32)).unwrap_err();
    assert_eq!(err.target(), "u64");
    assert_eq!(err.to_string(), "BigInt out of range for `u64`");
}
