//! Unicode property queries without backing data.
//!
//! The crate carries no Unicode database. Queries that would need one either
//! report `CharError::Unsupported` or return a fixed placeholder, and emit a
//! trace record so callers relying on them show up in logs.

use crate::category::{Directionality, GeneralCategory};
use crate::error::{CharError, CharResult};

pub fn general_category(ch: u16) -> CharResult<GeneralCategory> {
    general_category_code_point(ch as i32)
}

pub fn general_category_code_point(cp: i32) -> CharResult<GeneralCategory> {
    unsupported("general_category", cp)
}

/// Always `Directionality::Undefined`.
pub fn directionality(ch: u16) -> Directionality {
    directionality_code_point(ch as i32)
}

pub fn directionality_code_point(cp: i32) -> Directionality {
    log::trace!("directionality({:#x}): no bidi data, returning Undefined", cp);
    Directionality::Undefined
}

pub fn is_mirrored(ch: u16) -> CharResult<bool> {
    is_mirrored_code_point(ch as i32)
}

pub fn is_mirrored_code_point(cp: i32) -> CharResult<bool> {
    unsupported("is_mirrored", cp)
}

pub fn is_title_case(ch: u16) -> CharResult<bool> {
    is_title_case_code_point(ch as i32)
}

pub fn is_title_case_code_point(cp: i32) -> CharResult<bool> {
    unsupported("is_title_case", cp)
}

pub fn is_defined(ch: u16) -> CharResult<bool> {
    is_defined_code_point(ch as i32)
}

pub fn is_defined_code_point(cp: i32) -> CharResult<bool> {
    unsupported("is_defined", cp)
}

pub fn is_alphabetic(cp: i32) -> CharResult<bool> {
    unsupported("is_alphabetic", cp)
}

pub fn is_ideographic(cp: i32) -> CharResult<bool> {
    unsupported("is_ideographic", cp)
}

fn unsupported<T>(op: &'static str, cp: i32) -> CharResult<T> {
    log::trace!("{}({:#x}): no Unicode data", op, cp);
    Err(CharError::Unsupported(op))
}

/// Lowercase hexadecimal numeral of `cp`, standing in for its Unicode name.
///
/// Negative values print as their 32-bit two's complement.
pub fn name(cp: i32) -> String {
    format!("{:x}", cp)
}

/// A named subset of the character set.
pub trait Subset {}

/// Opaque Unicode block. Every lookup yields the same block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnicodeBlock;

impl UnicodeBlock {
    pub fn for_name(name: &str) -> Self {
        log::trace!("UnicodeBlock::for_name({:?}): no block data", name);
        UnicodeBlock
    }

    pub fn of(cp: i32) -> Self {
        log::trace!("UnicodeBlock::of({:#x}): no block data", cp);
        UnicodeBlock
    }
}

impl Subset for UnicodeBlock {}

/// Unicode script. Only `Common` is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnicodeScript {
    #[default]
    Common,
}

impl UnicodeScript {
    pub fn for_name(name: &str) -> Self {
        log::trace!("UnicodeScript::for_name({:?}): no script data", name);
        UnicodeScript::Common
    }

    pub fn of(cp: i32) -> Self {
        log::trace!("UnicodeScript::of({:#x}): no script data", cp);
        UnicodeScript::Common
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_hex() {
        assert_eq!(name(0x41), "41");
        assert_eq!(name(0x1F600), "1f600");
        assert_eq!(name(0), "0");
        assert_eq!(name(-1), "ffffffff");
    }

    #[test]
    fn test_unsupported_queries() {
        assert_eq!(
            general_category(b'A' as u16),
            Err(CharError::Unsupported("general_category"))
        );
        assert_eq!(is_mirrored(b'(' as u16), Err(CharError::Unsupported("is_mirrored")));
        assert_eq!(is_title_case(0x01C5), Err(CharError::Unsupported("is_title_case")));
        assert_eq!(is_defined_code_point(0x10FFFF), Err(CharError::Unsupported("is_defined")));
        assert!(is_alphabetic('a' as i32).is_err());
        assert!(is_ideographic(0x4E00).is_err());
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(directionality(b'a' as u16), Directionality::Undefined);
        assert_eq!(directionality_code_point(0x05D0), Directionality::Undefined);
        assert_eq!(UnicodeBlock::of(0x41), UnicodeBlock::for_name("BASIC_LATIN"));
        assert_eq!(UnicodeScript::of(0x0410), UnicodeScript::Common);
        assert_eq!(UnicodeScript::for_name("Cyrillic"), UnicodeScript::Common);
    }
}
