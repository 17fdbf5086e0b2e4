//! Boxed code unit with value semantics.

use std::cmp::Ordering;
use std::fmt;

use crate::ordering::{compare, hash_code};

/// A single UTF-16 code unit.
///
/// Equality, hashing and ordering all follow the numeric unit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Character(u16);

impl Character {
    #[inline]
    pub const fn value_of(value: u16) -> Self {
        Character(value)
    }

    #[inline]
    pub const fn char_value(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn hash_code(self) -> i32 {
        hash_code(self.0)
    }

    #[inline]
    pub const fn compare_to(self, other: Character) -> i32 {
        compare(self.0, other.0)
    }
}

impl From<u16> for Character {
    #[inline]
    fn from(value: u16) -> Self {
        Character(value)
    }
}

impl From<Character> for u16 {
    #[inline]
    fn from(c: Character) -> Self {
        c.0
    }
}

impl PartialOrd for Character {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Character {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(*other).cmp(&0)
    }
}

/// Renders the unit as a one-character string. A lone surrogate has no
/// `char` form and renders as U+FFFD.
impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = char::from_u32(self.0 as u32).unwrap_or(char::REPLACEMENT_CHARACTER);
        write!(f, "{}", c)
    }
}

/// One-character string for `ch`.
pub fn to_string(ch: u16) -> String {
    Character(ch).to_string()
}
