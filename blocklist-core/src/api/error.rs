//! Errors reported by `BlockList`.
//!
//! Any operation failing with a `ListError` leaves the list exactly as it was before the call.

use thiserror::Error;

/// ListError.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ListError {
    /// A positional argument falls outside the bound of the operation.
    #[error("index {index} is out of range for a list of length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// No node matches the reference, or no node holds the block.
    #[error("no matching node in the list")]
    NotFound,

    /// The list was modified while a cursor was iterating over it.
    #[error("the list was modified during iteration")]
    ConcurrentModification,
}

// mod tests
