use silo::{body::error::BodyError, http::StatusCode};

use crate::url::UrlError;

/// Blob operation failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Body stream failure; cancellation stays distinguishable through
    /// [`BodyError::Cancelled`].
    #[error(transparent)]
    Stream(#[from] BodyError),
    /// Transport-level I/O failure outside of body consumption.
    #[error("transport: {0}")]
    Io(#[from] std::io::Error),
    /// The service answered with a status the operation does not accept.
    #[error("unexpected status: {status:?} {reason}")]
    UnexpectedStatus {
        status: StatusCode,
        reason: String,
    },
    /// A header the typed result requires was absent.
    #[error("missing header: {0}")]
    MissingHeader(&'static str),
    /// A header was present but its value could not be interpreted.
    #[error("invalid header {name}: {value:?}")]
    InvalidHeader {
        name: &'static str,
        value: String,
    },
    /// A response body could not be decoded.
    #[error("invalid response body: {0}")]
    InvalidBody(&'static str),
    /// The operation requires a body stream with a known length.
    #[error("body stream length is required for this operation")]
    UnsizedBody,
    /// A byte range with zero length was requested.
    #[error("byte range length must be non-zero")]
    EmptyRange,
    #[error(transparent)]
    Url(#[from] UrlError),
}

impl Error {
    /// Returns `true` when the underlying cause is cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Stream(err) if err.is_cancelled())
    }
}
