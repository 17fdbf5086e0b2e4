//! Case conversion for single code units.
//!
//! Mapping is delegated to core's Unicode case tables. Multi-unit results
//! (e.g. `ß` upper-cases to `SS`) keep only their first UTF-16 unit, and
//! lone surrogates map to themselves. Code point forms narrow to 16 bits
//! before mapping.

/// Apply `map` to `ch` and return the first UTF-16 unit of the result.
#[inline]
fn map_unit<I, F>(ch: u16, map: F) -> u16
where
    F: FnOnce(char) -> I,
    I: Iterator<Item = char>,
{
    let Some(c) = char::from_u32(ch as u32) else {
        return ch;
    };
    match map(c).next() {
        Some(mapped) => {
            let mut buf = [0u16; 2];
            mapped.encode_utf16(&mut buf)[0]
        }
        None => ch,
    }
}

pub fn to_lower_case(ch: u16) -> u16 {
    map_unit(ch, char::to_lowercase)
}

pub fn to_lower_case_code_point(cp: i32) -> i32 {
    to_lower_case(cp as u16) as i32
}

pub fn to_upper_case(ch: u16) -> u16 {
    map_unit(ch, char::to_uppercase)
}

pub fn to_upper_case_code_point(cp: i32) -> i32 {
    to_upper_case(cp as u16) as i32
}

/// Approximated by upper-casing; digraphs such as `ǆ` yield `Ǆ`, not `ǅ`.
#[inline]
pub fn to_title_case(ch: u16) -> u16 {
    to_upper_case(ch)
}

#[inline]
pub fn to_title_case_code_point(cp: i32) -> i32 {
    to_title_case(cp as u16) as i32
}

/// Upper-case form of `cp` as a code unit array.
#[inline]
pub fn to_upper_case_units(cp: i32) -> [u16; 1] {
    [to_upper_case_code_point(cp) as u16]
}
