pub const RADIX: u8 = 10;

pub const DIGITS: [char; RADIX as usize] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9' ,
];

/// Largest magnitude served from the small value cache.
pub const MAX_CONSTANT: usize = 16;

/// Decimal digits needed for `u128::MAX`.
pub const MAX_U128_DIGITS: usize = 39;
