//! Ordering, equality, hashing and byte order on code units.

/// Numeric difference `l - r`: negative, zero or positive.
#[inline]
pub const fn compare(l: u16, r: u16) -> i32 {
    l as i32 - r as i32
}

#[inline]
pub const fn equals(l: u16, r: u16) -> bool {
    l == r
}

/// Hash of a code unit is its numeric value.
#[inline]
pub const fn hash_code(ch: u16) -> i32 {
    ch as i32
}

/// Swap the high and low bytes.
#[inline]
pub const fn reverse_bytes(ch: u16) -> u16 {
    ((ch & 0xFF00) >> 8) | (ch << 8)
}
