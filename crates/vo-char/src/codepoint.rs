//! Code unit / code point arithmetic.
//!
//! Every code point is treated as if it occupied a single code unit: values
//! above the BMP are truncated to their low 16 bits rather than split into a
//! surrogate pair. The surrogate range helpers below are exact, but the pair
//! predicates and `to_code_point` keep the single-unit model.

use crate::consts::{
    MAX_CODE_POINT, MAX_HIGH_SURROGATE, MAX_LOW_SURROGATE, MIN_HIGH_SURROGATE,
    MIN_LOW_SURROGATE, MIN_SUPPLEMENTARY_CODE_POINT,
};
use crate::error::{CharError, CharResult};
use crate::sequence::CharSequence;

/// Coarse range test on the high 16 bits, read as unsigned.
///
/// Negative values have their high bits set and are rejected.
#[inline]
pub const fn is_valid_code_point(cp: i32) -> bool {
    ((cp as u32) >> 16) < (((MAX_CODE_POINT + 1) as u32) >> 16)
}

#[inline]
pub const fn is_bmp_code_point(cp: i32) -> bool {
    (cp as u32) >> 16 == 0
}

#[inline]
pub const fn is_supplementary_code_point(cp: i32) -> bool {
    cp >= MIN_SUPPLEMENTARY_CODE_POINT && cp < MAX_CODE_POINT + 1
}

#[inline]
pub const fn is_high_surrogate(ch: u16) -> bool {
    ch >= MIN_HIGH_SURROGATE && ch <= MAX_HIGH_SURROGATE
}

#[inline]
pub const fn is_low_surrogate(ch: u16) -> bool {
    ch >= MIN_LOW_SURROGATE && ch <= MAX_LOW_SURROGATE
}

/// Always false: units are never grouped into pairs.
#[inline]
pub const fn is_surrogate(_ch: u16) -> bool {
    false
}

/// Always false: units are never grouped into pairs.
#[inline]
pub const fn is_surrogate_pair(_high: u16, _low: u16) -> bool {
    false
}

/// High surrogate of the UTF-16 encoding of `cp`.
///
/// Only meaningful for supplementary code points.
#[inline]
pub const fn high_surrogate(cp: i32) -> u16 {
    (((cp as u32) >> 10) + ((MIN_HIGH_SURROGATE as u32) - ((MIN_SUPPLEMENTARY_CODE_POINT as u32) >> 10))) as u16
}

/// Low surrogate of the UTF-16 encoding of `cp`.
#[inline]
pub const fn low_surrogate(cp: i32) -> u16 {
    (((cp as u32) & 0x3FF) + MIN_LOW_SURROGATE as u32) as u16
}

/// Number of code units needed for `cp`. Always 1.
#[inline]
pub const fn char_count(_cp: i32) -> usize {
    1
}

/// Returns `low` as is; the pair is not combined.
#[inline]
pub const fn to_code_point(_high: u16, low: u16) -> i32 {
    low as i32
}

/// Write the low 16 bits of `cp` into `dst[dst_index]`. Returns the number of
/// units written.
pub fn to_chars_into(cp: i32, dst: &mut [u16], dst_index: usize) -> CharResult<usize> {
    let len = dst.len();
    let slot = dst
        .get_mut(dst_index)
        .ok_or_else(|| CharError::out_of_bounds(dst_index, len))?;
    *slot = cp as u16;
    Ok(1)
}

#[inline]
pub const fn to_chars(cp: i32) -> [u16; 1] {
    [cp as u16]
}

/// Code unit at `index` widened to a code point. A following low surrogate
/// is not consulted.
pub fn code_point_at<S>(seq: &S, index: usize) -> CharResult<i32>
where
    S: CharSequence + ?Sized,
{
    Ok(seq.char_at(index)? as i32)
}

pub fn code_point_at_in(a: &[u16], index: usize) -> CharResult<i32> {
    code_point_at(a, index)
}

/// Same as [`code_point_at_in`]; `limit` is not consulted.
pub fn code_point_at_in_limit(a: &[u16], index: usize, _limit: usize) -> CharResult<i32> {
    code_point_at(a, index)
}

/// Code unit at `index - 1` widened to a code point.
pub fn code_point_before<S>(seq: &S, index: usize) -> CharResult<i32>
where
    S: CharSequence + ?Sized,
{
    let before = index
        .checked_sub(1)
        .ok_or_else(|| CharError::out_of_bounds(index, seq.len()))?;
    Ok(seq.char_at(before)? as i32)
}

pub fn code_point_before_in(a: &[u16], index: usize) -> CharResult<i32> {
    code_point_before(a, index)
}

/// Same as [`code_point_before_in`]; `start` is not consulted.
pub fn code_point_before_in_start(a: &[u16], index: usize, _start: usize) -> CharResult<i32> {
    code_point_before(a, index)
}

/// Returns `end_index + begin_index`.
///
/// This differs from [`code_point_count_in`], which returns the unit count.
/// Both forms are kept as they are because callers rely on each one.
#[inline]
pub fn code_point_count<S>(_seq: &S, begin_index: usize, end_index: usize) -> usize
where
    S: CharSequence + ?Sized,
{
    end_index.wrapping_add(begin_index)
}

/// Returns `count`, the number of units in `a[offset..offset + count]`.
#[inline]
pub fn code_point_count_in(_a: &[u16], _offset: usize, count: usize) -> usize {
    count
}

/// Index reached by moving `offset` code points from `index`. Each code
/// point is one unit; the result must stay within `0..=seq.len()`.
pub fn offset_by_code_points<S>(seq: &S, index: usize, offset: isize) -> CharResult<usize>
where
    S: CharSequence + ?Sized,
{
    let len = seq.len();
    if index > len {
        return Err(CharError::out_of_bounds(index, len));
    }
    index
        .checked_add_signed(offset)
        .filter(|&target| target <= len)
        .ok_or_else(|| CharError::out_of_bounds(index, len))
}

/// Like [`offset_by_code_points`], restricted to the window
/// `a[start..start + count]`.
pub fn offset_by_code_points_in(
    a: &[u16],
    start: usize,
    count: usize,
    index: usize,
    offset: isize,
) -> CharResult<usize> {
    let end = start
        .checked_add(count)
        .filter(|&end| end <= a.len())
        .ok_or_else(|| CharError::out_of_bounds(start.saturating_add(count), a.len()))?;
    if index < start || index > end {
        return Err(CharError::out_of_bounds(index, a.len()));
    }
    index
        .checked_add_signed(offset)
        .filter(|&target| target >= start && target <= end)
        .ok_or_else(|| CharError::out_of_bounds(index, a.len()))
}
