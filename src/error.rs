//! Errors reported by [`Queue`](crate::Queue).

use std::collections::TryReserveError;
use thiserror::Error;

/// Failure of a queue operation.
///
/// A failed operation leaves the queue exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The element, its text or the arena slot could not be allocated.
    #[error("allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),
    /// An argument is out of its domain, e.g. a zero-length copy-out buffer.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The queue has no element to remove.
    #[error("the queue is empty")]
    EmptyContainer,
}
