//! Digit values for radixes 2 through 36.
//!
//! The `radix` arguments are accepted for API compatibility but do not bound
//! the result: `digit('u', 10)` is 30.

use crate::consts::{NO_DIGIT, NUL};

/// Digit value of an ASCII digit or letter (either case), or `-1`.
pub const fn digit(ch: u16, _radix: i32) -> i32 {
    match ch {
        0x30..=0x39 => (ch - 0x30) as i32,
        0x61..=0x7A => (ch - 0x61) as i32 + 10,
        0x41..=0x5A => (ch - 0x41) as i32 + 10,
        _ => NO_DIGIT,
    }
}

#[inline]
pub const fn digit_code_point(cp: i32, radix: i32) -> i32 {
    digit(cp as u16, radix)
}

/// Lowercase ASCII character for `digit` in `0..=35`, or NUL.
pub const fn for_digit(digit: i32, _radix: i32) -> u16 {
    match digit {
        0..=9 => 0x30 + digit as u16,
        10..=35 => 0x61 + (digit - 10) as u16,
        _ => NUL,
    }
}

#[inline]
pub const fn numeric_value(ch: u16) -> i32 {
    digit(ch, 10)
}

#[inline]
pub const fn numeric_value_code_point(cp: i32) -> i32 {
    digit_code_point(cp, 10)
}
