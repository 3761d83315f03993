use thiserror::Error;

/// An error returned when parsing a [`BigInt`](crate::BigInt) from a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    #[error("cannot parse BigInt from empty string")]
    Empty,
    #[error("sign character is not followed by any digit")]
    NoDigits,
    #[error("invalid digit `{found}` found at byte {position}")]
    InvalidDigit { position: usize, found: char },
}

/// An error returned when a [`BigInt`](crate::BigInt) does not fit in the requested primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("BigInt out of range for `{target}`")]
pub struct TryFromBigIntError {
    target: &'static str,
}

impl TryFromBigIntError {
    pub(crate) fn new(target: &'static str) -> Self {
        TryFromBigIntError { target }
    }

    /// Name of the primitive type the conversion targeted.
    pub fn target(&self) -> &'static str {
        self.target
    }
}
