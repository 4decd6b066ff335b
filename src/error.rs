//! Error types for the codec.

use thiserror::Error;

/// Error variants for codec operations.
///
/// Almost everything in this crate degrades silently (spilled characters,
/// unreachable trailing bits); the bounded priority queue is the one place
/// where a caller can be told something was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An insert was attempted on a priority queue that is at capacity.
    /// The item was dropped and the queue is unchanged.
    #[error("priority queue is at capacity ({capacity})")]
    QueueFull {
        /// The fixed capacity of the queue that refused the insert.
        capacity: usize,
    },
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
