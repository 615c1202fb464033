//! HTTP Response.
use bytes::Bytes;

use super::StatusCode;
use crate::{
    body::{BodyStream, error::BodyError, read_to_end},
    bytestring::ByteStr,
    context::Context,
    headers::{HeaderMap, HeaderName, HeaderValue},
};

/// One complete HTTP response.
///
/// The transport constructs a response from the status line, pushes raw
/// header lines into it one at a time, attaches the body stream once, and
/// hands it to the caller. Status code and reason phrase are immutable after
/// construction; headers have no mutation path beyond the append operations
/// used during parsing.
pub struct Response {
    status: StatusCode,
    reason: ByteStr,
    headers: HeaderMap,
    body: Option<Box<dyn BodyStream>>,
}

impl Response {
    /// Create [`Response`] from a parsed status line.
    pub fn new(status: StatusCode, reason: impl Into<ByteStr>) -> Response {
        Self {
            status,
            reason: reason.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Returns the status code set at construction.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the reason phrase set at construction.
    pub fn reason_phrase(&self) -> &str {
        &self.reason
    }

    /// Returns shared reference to the full header collection, duplicates
    /// included.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

// ===== Parsing phase =====

impl Response {
    /// Append a structured header entry, retaining duplicates.
    pub fn append_header(&mut self, name: impl Into<HeaderName>, value: impl Into<HeaderValue>) {
        self.headers.append(name, value);
    }

    /// Append a raw wire-format header line, see [`HeaderMap::append_line`].
    ///
    /// Lines without a `:` separator are discarded silently.
    pub fn append_header_line(&mut self, line: &[u8]) {
        self.headers.append_line(line);
    }

    /// Attach the body stream, taking exclusive ownership.
    ///
    /// Any previously attached stream is dropped.
    pub fn set_body(&mut self, stream: Box<dyn BodyStream>) {
        self.body = Some(stream);
    }
}

// ===== Body consumption =====

impl Response {
    /// Transfer ownership of the body stream out of the response.
    ///
    /// The hand-off happens exactly once: afterwards the response no longer
    /// holds a body and further calls return `None`.
    pub fn take_body(&mut self) -> Option<Box<dyn BodyStream>> {
        self.body.take()
    }

    /// Drain the body in place into one [`Bytes`].
    ///
    /// A response without a body yields empty [`Bytes`].
    pub fn read_body_to_end(&mut self, cx: &Context) -> Result<Bytes, BodyError> {
        match &mut self.body {
            Some(stream) => read_to_end(cx, stream.as_mut()),
            None => Ok(Bytes::new()),
        }
    }
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .field("headers", &self.headers)
            .field("body", &self.body.is_some())
            .finish()
    }
}
