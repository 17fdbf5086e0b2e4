//! # vo-char
//!
//! Character and code point primitives used beneath Vo strings, identifier
//! scanning and number parsing.
//!
//! All operations are pure functions over a UTF-16 code unit (`u16`) or a
//! code point (`i32`):
//! - `codepoint` - code unit / code point arithmetic and surrogate ranges
//! - `classify` - digit, letter, space, whitespace and control predicates
//! - `case` - lower / upper / title case mapping
//! - `radix` - digit values for radixes 2 through 36
//! - `ordering` - comparison, hashing and byte order
//! - `character` - the `Character` value type
//! - `unicode` - property queries that have no backing data
//!
//! The model is BMP-only: a code point always occupies one code unit, and
//! values above U+FFFF are truncated to their low 16 bits.
//!
//! Functions that take a code unit have a `_code_point` twin taking an
//! `i32`; functions reading from a `&[u16]` carry an `_in` suffix.

pub mod case;
pub mod category;
pub mod character;
pub mod classify;
pub mod codepoint;
pub mod consts;
pub mod error;
pub mod ordering;
pub mod radix;
pub mod sequence;
pub mod unicode;

pub use case::{
    to_lower_case, to_lower_case_code_point, to_title_case, to_title_case_code_point,
    to_upper_case, to_upper_case_code_point, to_upper_case_units,
};
pub use category::{Directionality, GeneralCategory};
pub use character::{to_string, Character};
#[allow(deprecated)]
pub use classify::is_space;
pub use classify::{
    is_digit, is_digit_code_point, is_iso_control, is_iso_control_code_point, is_letter,
    is_letter_code_point, is_letter_or_digit, is_letter_or_digit_code_point, is_lower_case,
    is_lower_case_code_point, is_space_char, is_space_char_code_point, is_upper_case,
    is_upper_case_code_point, is_whitespace, is_whitespace_code_point,
};
pub use codepoint::{
    char_count, code_point_at, code_point_at_in, code_point_at_in_limit, code_point_before,
    code_point_before_in, code_point_before_in_start, code_point_count, code_point_count_in,
    high_surrogate, is_bmp_code_point, is_high_surrogate, is_low_surrogate,
    is_supplementary_code_point, is_surrogate, is_surrogate_pair, is_valid_code_point,
    low_surrogate, offset_by_code_points, offset_by_code_points_in, to_chars, to_chars_into,
    to_code_point,
};
pub use consts::*;
pub use error::{CharError, CharResult};
pub use ordering::{compare, equals, hash_code, reverse_bytes};
pub use radix::{digit, digit_code_point, for_digit, numeric_value, numeric_value_code_point};
pub use sequence::CharSequence;
pub use unicode::{
    directionality, directionality_code_point, general_category, general_category_code_point,
    is_alphabetic, is_defined, is_defined_code_point, is_ideographic, is_mirrored,
    is_mirrored_code_point, is_title_case, is_title_case_code_point, name, Subset, UnicodeBlock,
    UnicodeScript,
};
