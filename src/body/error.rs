//! Body stream failures.
use std::io;

/// Failure while reading a body stream.
///
/// Cancellation is a distinct condition, never merged with generic I/O
/// failure, so callers can tell an abandoned read from a broken one.
#[derive(thiserror::Error, Debug)]
pub enum BodyError {
    /// The operation's [`Context`][crate::Context] was cancelled or its
    /// deadline passed before the read completed.
    #[error("operation cancelled")]
    Cancelled,
    /// The underlying I/O primitive failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl BodyError {
    /// Returns `true` for the cancellation condition.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
