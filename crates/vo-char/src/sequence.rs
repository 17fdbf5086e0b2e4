//! Indexed read access to UTF-16 code units.
//!
//! Operations that look into a sequence never validate indices themselves;
//! they forward whatever failure the sequence reports.

use crate::error::{CharError, CharResult};

/// A readable run of UTF-16 code units.
pub trait CharSequence {
    /// Number of code units.
    fn len(&self) -> usize;

    /// Code unit at `index`, or `IndexOutOfBounds`.
    fn char_at(&self, index: usize) -> CharResult<u16>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CharSequence for [u16] {
    #[inline]
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    #[inline]
    fn char_at(&self, index: usize) -> CharResult<u16> {
        self.get(index)
            .copied()
            .ok_or_else(|| CharError::out_of_bounds(index, <[u16]>::len(self)))
    }
}

impl CharSequence for Vec<u16> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn char_at(&self, index: usize) -> CharResult<u16> {
        self.as_slice().char_at(index)
    }
}

/// UTF-16 view of a Rust string. Indexing walks the encoding from the start.
impl CharSequence for str {
    fn len(&self) -> usize {
        self.encode_utf16().count()
    }

    fn char_at(&self, index: usize) -> CharResult<u16> {
        self.encode_utf16()
            .nth(index)
            .ok_or_else(|| CharError::out_of_bounds(index, CharSequence::len(self)))
    }
}

impl CharSequence for String {
    #[inline]
    fn len(&self) -> usize {
        CharSequence::len(self.as_str())
    }

    #[inline]
    fn char_at(&self, index: usize) -> CharResult<u16> {
        self.as_str().char_at(index)
    }
}

impl<T: CharSequence + ?Sized> CharSequence for &T {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn char_at(&self, index: usize) -> CharResult<u16> {
        (**self).char_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_access() {
        let units: &[u16] = &[0x61, 0x62];
        assert_eq!(CharSequence::len(units), 2);
        assert_eq!(units.char_at(1), Ok(0x62));
        assert_eq!(units.char_at(2), Err(CharError::out_of_bounds(2, 2)));
    }

    #[test]
    fn test_str_is_utf16() {
        // U+1F600 takes two units.
        let s = "a\u{1F600}";
        assert_eq!(CharSequence::len(s), 3);
        assert_eq!(s.char_at(1), Ok(0xD83D));
        assert_eq!(s.char_at(2), Ok(0xDE00));
        assert_eq!(s.char_at(3), Err(CharError::out_of_bounds(3, 3)));
    }

    #[test]
    fn test_empty() {
        assert!(CharSequence::is_empty(""));
        assert!(CharSequence::is_empty(&Vec::<u16>::new()));
        assert!(!CharSequence::is_empty(&String::from("x")));
    }
}
