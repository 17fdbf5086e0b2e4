//! Whole-domain checks over every code unit, plus end-to-end scenarios.

use pretty_assertions::assert_eq;
use vo_char::*;

fn all_units() -> impl Iterator<Item = u16> {
    0..=u16::MAX
}

#[test]
fn test_compare_is_reflexive_and_antisymmetric() {
    for c in all_units() {
        assert_eq!(compare(c, c), 0);
    }
    // Antisymmetry over a stride through the whole domain.
    for a in all_units().step_by(97) {
        for b in all_units().step_by(89) {
            assert_eq!(compare(a, b), -compare(b, a));
        }
    }
}

#[test]
fn test_is_digit_is_exactly_ascii_digits() {
    let digits: Vec<u16> = all_units().filter(|&c| is_digit(c)).collect();
    assert_eq!(digits, (b'0' as u16..=b'9' as u16).collect::<Vec<_>>());

    for c in digits {
        assert_eq!(digit(c, 10), (c - b'0' as u16) as i32);
    }
}

#[test]
fn test_is_letter_is_exactly_ascii_letters() {
    let letters = all_units().filter(|&c| is_letter(c)).count();
    assert_eq!(letters, 52);
}

#[test]
fn test_hex_digits_round_trip() {
    for d in 0..16 {
        assert_eq!(digit(for_digit(d, 16), 16), d);
    }
}

#[test]
fn test_reverse_bytes_is_an_involution() {
    for x in all_units() {
        assert_eq!(reverse_bytes(reverse_bytes(x)), x);
    }
}

#[test]
fn test_whitespace_membership() {
    let members: Vec<i32> = all_units()
        .filter(|&c| is_whitespace(c))
        .map(i32::from)
        .collect();
    assert_eq!(
        members,
        vec![
            9, 10, 11, 12, 13, 28, 29, 30, 31, 32, 5760, 6158, 8192, 8193, 8194, 8195, 8196, 8197,
            8198, 8200, 8201, 8202, 8232, 8233, 8287, 12288,
        ]
    );
}

#[test]
fn test_space_char_membership() {
    let members: Vec<u16> = all_units().filter(|&c| is_space_char(c)).collect();
    let mut expected: Vec<u16> = vec![0x0020, 0x00A0, 0x1680, 0x180E];
    expected.extend(0x2000..=0x200B);
    expected.extend([0x202F, 0x205F, 0x3000, 0xFEFF]);
    assert_eq!(members, expected);
}

#[test]
fn test_iso_control_membership() {
    let members: Vec<u16> = all_units().filter(|&c| is_iso_control(c)).collect();
    let expected: Vec<u16> = (0x00..=0x1F).chain(0x7F..=0x9F).collect();
    assert_eq!(members, expected);
}

#[test]
fn test_to_code_point_returns_low_unit() {
    for high in MIN_HIGH_SURROGATE..=MAX_HIGH_SURROGATE {
        for low in (MIN_LOW_SURROGATE..=MAX_LOW_SURROGATE).step_by(31) {
            assert_eq!(to_code_point(high, low), low as i32);
            assert!(!is_surrogate_pair(high, low));
        }
    }
}

#[test]
fn test_valid_code_point_literal_boundaries() {
    assert!(is_valid_code_point(MIN_CODE_POINT));
    assert!(is_valid_code_point(MAX_CODE_POINT));
    assert!(!is_valid_code_point(MAX_CODE_POINT + 1));
    // -1 reads as 0xFFFFFFFF once shifted unsigned.
    assert!(!is_valid_code_point(-1));
    assert!(!is_valid_code_point(ERROR));
}

#[test]
fn test_case_predicates_follow_conversion() {
    for c in all_units() {
        assert_eq!(is_upper_case(c), to_upper_case(c) == c);
        assert_eq!(is_lower_case(c), to_lower_case(c) == c);
        assert_eq!(to_title_case(c), to_upper_case(c));
    }
}

#[test]
fn test_character_matches_free_functions() {
    for c in all_units().step_by(251) {
        let ch = Character::value_of(c);
        assert_eq!(ch.hash_code(), hash_code(c));
        assert_eq!(ch.compare_to(Character::value_of(0x1000)), compare(c, 0x1000));
        assert_eq!(ch == Character::from(c), equals(c, c));
    }
}

#[test]
fn test_scenario_decimal_five() {
    let five = b'5' as u16;
    assert_eq!(digit(five, 10), 5);
    assert_eq!(for_digit(5, 10), five);
    assert_eq!(numeric_value(five), 5);
}

#[test]
fn test_scenario_supplementary_emoji() {
    let emoji = 0x1F600;
    assert!(is_valid_code_point(emoji));
    assert_eq!(char_count(emoji), 1);
    assert_eq!(to_chars(emoji), [(emoji & 0xFFFF) as u16]);
}

#[test]
fn test_scenario_scan_number_from_str() {
    // Identifier / number scanning as a string layer would drive it.
    let text = "x = 0x1F;";
    let mut value = 0;
    let mut index = 6;
    while let Ok(cp) = code_point_at(text, index) {
        let d = digit_code_point(cp, 16);
        if d < 0 || !is_letter_or_digit_code_point(cp) {
            break;
        }
        value = value * 16 + d;
        index += 1;
    }
    assert_eq!(value, 0x1F);
    assert_eq!(code_point_at(text, index), Ok(';' as i32));
    assert_eq!(
        code_point_at(text, 42),
        Err(CharError::IndexOutOfBounds { index: 42, len: 9 })
    );
}
