//! Error type for [`SplayList`](crate::SplayList) operations.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplayListError {
    /// The arena's lifetime allocation budget is used up. Deleted elements
    /// are never recycled, so the budget covers every node ever allocated,
    /// not the current length.
    #[error("arena capacity {capacity} exhausted")]
    CapacityExhausted { capacity: usize },

    /// A point operation addressed a position outside the sequence.
    #[error("position {pos} out of bounds for sequence of length {len}")]
    PositionOutOfBounds { pos: usize, len: usize },

    /// A non-empty range reached outside the sequence. Ranges with
    /// `l > r` are defined no-ops and never produce this error.
    #[error("range [{l}, {r}] out of bounds for sequence of length {len}")]
    RangeOutOfBounds { l: i64, r: i64, len: usize },
}

pub type Result<T> = std::result::Result<T, SplayListError>;
