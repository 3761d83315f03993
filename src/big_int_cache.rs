use lazy_static::*;

use crate::BigInt;
use crate::big_int::Sign;
use crate::big_int_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(vec![0]   , Sign::NonNegative),
        BigInt::from_raw(vec![1]   , Sign::NonNegative),
        BigInt::from_raw(vec![2]   , Sign::NonNegative),
        BigInt::from_raw(vec![3]   , Sign::NonNegative),
        BigInt::from_raw(vec![4]   , Sign::NonNegative),
        BigInt::from_raw(vec![5]   , Sign::NonNegative),
        BigInt::from_raw(vec![6]   , Sign::NonNegative),
        BigInt::from_raw(vec![7]   , Sign::NonNegative),
        BigInt::from_raw(vec![8]   , Sign::NonNegative),
        BigInt::from_raw(vec![9]   , Sign::NonNegative),
        BigInt::from_raw(vec![1, 0], Sign::NonNegative),
        BigInt::from_raw(vec![1, 1], Sign::NonNegative),
        BigInt::from_raw(vec![1, 2], Sign::NonNegative),
        BigInt::from_raw(vec![1, 3], Sign::NonNegative),
        BigInt::from_raw(vec![1, 4], Sign::NonNegative),
        BigInt::from_raw(vec![1, 5], Sign::NonNegative),
        BigInt::from_raw(vec![1, 6], Sign::NonNegative),
    ];
    // index 0 is canonical zero, never negative
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(vec![0]   , Sign::NonNegative),
        BigInt::from_raw(vec![1]   , Sign::Negative),
        BigInt::from_raw(vec![2]   , Sign::Negative),
        BigInt::from_raw(vec![3]   , Sign::Negative),
        BigInt::from_raw(vec![4]   , Sign::Negative),
        BigInt::from_raw(vec![5]   , Sign::Negative),
        BigInt::from_raw(vec![6]   , Sign::Negative),
        BigInt::from_raw(vec![7]   , Sign::Negative),
        BigInt::from_raw(vec![8]   , Sign::Negative),
        BigInt::from_raw(vec![9]   , Sign::Negative),
        BigInt::from_raw(vec![1, 0], Sign::Negative),
        BigInt::from_raw(vec![1, 1], Sign::Negative),
        BigInt::from_raw(vec![1, 2], Sign::Negative),
        BigInt::from_raw(vec![1, 3], Sign::Negative),
        BigInt::from_raw(vec![1, 4], Sign::Negative),
        BigInt::from_raw(vec![1, 5], Sign::Negative),
        BigInt::from_raw(vec![1, 6], Sign::Negative),
    ];
}
