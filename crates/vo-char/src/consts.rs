//! Numeric limits for code units, code points and radixes.

/// Smallest radix accepted by the digit conversions.
pub const MIN_RADIX: i32 = 2;
/// Largest radix accepted by the digit conversions.
pub const MAX_RADIX: i32 = 36;

/// Smallest code unit value.
pub const MIN_VALUE: u16 = 0x0000;
/// Largest code unit value.
pub const MAX_VALUE: u16 = 0xFFFF;

/// Bit width of a code unit.
pub const SIZE: u32 = 16;
/// Byte width of a code unit.
pub const BYTES: u32 = SIZE / 8;

pub const MIN_HIGH_SURROGATE: u16 = 0xD800;
pub const MAX_HIGH_SURROGATE: u16 = 0xDBFF;
pub const MIN_LOW_SURROGATE: u16 = 0xDC00;
pub const MAX_LOW_SURROGATE: u16 = 0xDFFF;
pub const MIN_SURROGATE: u16 = MIN_HIGH_SURROGATE;
pub const MAX_SURROGATE: u16 = MAX_LOW_SURROGATE;

pub const MIN_SUPPLEMENTARY_CODE_POINT: i32 = 0x01_0000;
pub const MIN_CODE_POINT: i32 = 0x00_0000;
pub const MAX_CODE_POINT: i32 = 0x10_FFFF;

/// All-ones marker for "no valid code point".
///
/// Reserved for callers that must tell a missing code point apart from
/// U+0000. Nothing in this crate returns it.
pub const ERROR: i32 = 0xFFFF_FFFF_u32 as i32;

/// Returned by [`digit`](crate::digit) when the unit is not a digit.
pub const NO_DIGIT: i32 = -1;

/// Returned by [`for_digit`](crate::for_digit) when the digit is out of range.
pub const NUL: u16 = 0x0000;
