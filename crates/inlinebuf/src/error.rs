//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

use crate::class::MAX_SCRATCH_LEN;

/// Errors that can occur during buffer operations.
///
/// Both variants are precondition violations: they are detected before any
/// storage is touched or any callback runs, and neither is retryable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// An element index fell outside the bounds of its buffer.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Capacity of the buffer that was accessed.
        capacity: usize,
    },
    /// A requested scratch length exceeded [`MAX_SCRATCH_LEN`].
    LenOutOfRange {
        /// The offending length.
        len: usize,
        /// The fixed maximum supported length.
        max: usize,
    },
}

impl BufferError {
    /// Build a [`BufferError::LenOutOfRange`] for the given length.
    pub(crate) fn len_out_of_range(len: usize) -> Self {
        Self::LenOutOfRange {
            len,
            max: MAX_SCRATCH_LEN,
        }
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, capacity } => {
                write!(f, "index {index} out of range for capacity {capacity}")
            }
            Self::LenOutOfRange { len, max } => {
                write!(f, "scratch length {len} out of range (maximum {max})")
            }
        }
    }
}

impl Error for BufferError {}
