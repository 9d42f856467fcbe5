//! Error types for queue operations
//!
//! - [`HeapError`]: returned by handle-based operations on addressable queues
//! - [`InvariantError`]: returned by the `check_invariants` self-checks
//!
//! Plain `pop`/`top` on an empty queue are not errors; they return `None`.

use std::fmt;

/// Error type for handle-based heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The new value is less extreme than the current one
    PriorityNotImproved,
    /// The handle is no longer valid (element was popped or cleared)
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::PriorityNotImproved => {
                write!(f, "new value is less extreme than the current value")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Error returned when a queue's structural invariants are violated
///
/// Carries a human-readable description of the failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_error_display() {
        assert_eq!(
            HeapError::InvalidHandle.to_string(),
            "handle is no longer valid (element was removed)"
        );
        assert!(HeapError::PriorityNotImproved
            .to_string()
            .contains("less extreme"));
    }

    #[test]
    fn test_invariant_error_message() {
        let err = InvariantError::new("len mismatch");
        assert_eq!(err.message(), "len mismatch");
        assert_eq!(err.to_string(), "len mismatch");
    }
}
