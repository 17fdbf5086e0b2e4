//! Failures surfaced by character operations.

use thiserror::Error;

/// Result alias for fallible character operations.
pub type CharResult<T> = Result<T, CharError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharError {
    /// Indexed access outside the sequence or buffer.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The query has no backing Unicode data.
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

impl CharError {
    #[inline]
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        CharError::IndexOutOfBounds { index, len }
    }
}
