//! Error types for index and range arguments.
//!
//! Out-of-range positions are caller bugs, so the ordinary `Deque` methods
//! panic with the message of an [`IndexError`]. The `try_*` methods return
//! the same value instead, for callers that validate positions coming from
//! outside the program.

use std::fmt;

/// An index or range that does not fit the collection it was applied to.
///
/// # Examples
///
/// ```rust
/// use strata::collections::{Deque, IndexError};
///
/// let mut deque: Deque<i32> = (0..3).collect();
/// assert_eq!(
///     deque.try_remove(7),
///     Err(IndexError::OutOfBounds { index: 7, length: 3 })
/// );
/// assert_eq!(
///     format!("{}", IndexError::OutOfBounds { index: 7, length: 3 }),
///     "index 7 out of bounds for length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexError {
    /// A position past the last valid position.
    OutOfBounds {
        /// The requested position.
        index: usize,
        /// The length of the collection.
        length: usize,
    },
    /// A range whose end lies past the end of the collection.
    RangeOutOfBounds {
        /// Inclusive start of the requested range.
        start: usize,
        /// Exclusive end of the requested range.
        end: usize,
        /// The length of the collection.
        length: usize,
    },
    /// A range whose start lies after its end.
    InvertedRange {
        /// Inclusive start of the requested range.
        start: usize,
        /// Exclusive end of the requested range.
        end: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, length } => {
                write!(formatter, "index {index} out of bounds for length {length}")
            }
            Self::RangeOutOfBounds { start, end, length } => {
                write!(
                    formatter,
                    "range {start}..{end} out of bounds for length {length}"
                )
            }
            Self::InvertedRange { start, end } => {
                write!(formatter, "range start {start} exceeds end {end}")
            }
        }
    }
}

impl std::error::Error for IndexError {}
