//! Character classification predicates.
//!
//! Digit and letter tests only recognise ASCII. The space and whitespace
//! predicates match fixed code point lists; the two lists differ on purpose
//! (U+2007 is a space char but not whitespace, U+0009 the reverse).

use crate::case::{to_lower_case, to_lower_case_code_point, to_upper_case, to_upper_case_code_point};

/// ASCII `'0'..='9'`.
#[inline]
pub const fn is_digit(ch: u16) -> bool {
    matches!(ch, 0x30..=0x39)
}

#[inline]
pub const fn is_digit_code_point(cp: i32) -> bool {
    is_digit(cp as u16)
}

/// ASCII `'a'..='z'` or `'A'..='Z'`.
#[inline]
pub const fn is_letter(ch: u16) -> bool {
    matches!(ch, 0x61..=0x7A | 0x41..=0x5A)
}

#[inline]
pub const fn is_letter_code_point(cp: i32) -> bool {
    is_letter(cp as u16)
}

#[inline]
pub const fn is_letter_or_digit(ch: u16) -> bool {
    is_letter(ch) || is_digit(ch)
}

#[inline]
pub const fn is_letter_or_digit_code_point(cp: i32) -> bool {
    is_letter_code_point(cp) || is_digit_code_point(cp)
}

#[inline]
pub const fn is_space_char(ch: u16) -> bool {
    is_space_char_code_point(ch as i32)
}

/// Space separators plus U+200B and U+FEFF.
pub const fn is_space_char_code_point(cp: i32) -> bool {
    matches!(
        cp,
        0x0020
            | 0x00A0
            | 0x1680
            | 0x180E
            | 0x2000..=0x200B
            | 0x202F
            | 0x205F
            | 0x3000
            | 0xFEFF
    )
}

#[inline]
pub const fn is_whitespace(ch: u16) -> bool {
    is_whitespace_code_point(ch as i32)
}

/// Control whitespace (TAB..CR, FS..SPACE) plus the breaking space
/// separators. No-break spaces (U+00A0, U+2007, U+202F) are excluded.
pub const fn is_whitespace_code_point(cp: i32) -> bool {
    matches!(
        cp,
        9..=13
            | 28..=32
            | 5760
            | 6158
            | 8192..=8198
            | 8200..=8202
            | 8232
            | 8233
            | 8287
            | 12288
    )
}

#[inline]
pub const fn is_iso_control(ch: u16) -> bool {
    is_iso_control_code_point(ch as i32)
}

/// C0 (U+0000..U+001F) and C1 with DEL (U+007F..U+009F).
#[inline]
pub const fn is_iso_control_code_point(cp: i32) -> bool {
    cp <= 0x9F && (cp >= 0x7F || (cp as u32) >> 5 == 0)
}

// TAB, LF, FF, CR, SPACE
const LEGACY_SPACE_MASK: u64 = (1 << 0x09) | (1 << 0x0A) | (1 << 0x0C) | (1 << 0x0D) | (1 << 0x20);

/// Legacy space test: TAB, LF, FF, CR and SPACE only.
#[deprecated(note = "use `is_whitespace`")]
#[inline]
pub const fn is_space(ch: u16) -> bool {
    ch <= 0x20 && (LEGACY_SPACE_MASK >> ch) & 1 != 0
}

/// True when lower-casing leaves the unit unchanged.
#[inline]
pub fn is_lower_case(ch: u16) -> bool {
    to_lower_case(ch) == ch
}

pub fn is_lower_case_code_point(cp: i32) -> bool {
    to_lower_case_code_point(cp) == cp
}

/// True when upper-casing leaves the unit unchanged.
#[inline]
pub fn is_upper_case(ch: u16) -> bool {
    to_upper_case(ch) == ch
}

pub fn is_upper_case_code_point(cp: i32) -> bool {
    to_upper_case_code_point(cp) == cp
}
