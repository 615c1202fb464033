use std::io;

use super::{BodyStream, error::BodyError};
use crate::context::Context;

/// Body stream backed by a blocking [`io::Read`] source.
///
/// The transport wraps its socket (or decoded content stream) in this type.
/// An optional declared length, typically taken from `Content-Length`, is
/// surfaced through [`len_hint`][BodyStream::len_hint] and counted down as
/// bytes are consumed; the reader itself remains authoritative for end of
/// stream.
pub struct ReaderBodyStream<R> {
    reader: R,
    remaining: Option<u64>,
}

impl<R: io::Read + Send> ReaderBodyStream<R> {
    /// Create body stream with no length hint.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            remaining: None,
        }
    }

    /// Create body stream declaring `len` total bytes.
    pub fn with_len(reader: R, len: u64) -> Self {
        Self {
            reader,
            remaining: Some(len),
        }
    }
}

impl<R: io::Read + Send> BodyStream for ReaderBodyStream<R> {
    fn len_hint(&self) -> Option<u64> {
        self.remaining
    }

    fn read(&mut self, cx: &Context, buf: &mut [u8]) -> Result<usize, BodyError> {
        // the underlying read may block, check before committing to it
        cx.ensure_not_cancelled()?;
        let n = self.reader.read(buf)?;
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(n as u64);
        }
        Ok(n)
    }
}

impl<R> std::fmt::Debug for ReaderBodyStream<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderBodyStream")
            .field("remaining", &self.remaining)
            .finish()
    }
}
