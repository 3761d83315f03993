//! Dec Big Int \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers, stored as base-10 digits
//!   with a separate sign. Supports construction from every primitive integer type,
//!   decimal parsing and rendering, addition, subtraction, multiplication, powers and
//!   ordering. Division is not provided.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::{BigInt, Sign};
pub use error::{ParseBigIntError, TryFromBigIntError};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "-900000000000".parse().unwrap();
        assert_eq!(a.to_string(), "10000000000000");
        assert_eq!((&a + &b).to_string(), "9100000000000");
        assert_eq!((&a - &b).to_string(), "10900000000000");
        assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
        assert!(a > b);
    }
}
