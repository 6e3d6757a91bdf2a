use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned by sequence manipulators that cannot produce a result.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum SequenceError {
    /// The operation needs at least one element.
    #[error("sequence must not be empty")]
    Empty,

    /// The requested count reaches past the end of the sequence.
    #[error("count {count} is out of bounds for a sequence of {len} elements")]
    OutOfBounds { count: isize, len: usize },
}
