use bytes::{Buf, Bytes};

use super::{BodyStream, error::BodyError};
use crate::context::Context;

/// Fully buffered body stream.
///
/// Used both for response bodies the transport already holds in memory and
/// for upload payloads. Reads advance a cursor over the buffer; cloning the
/// underlying [`Bytes`] beforehand is the way to re-read.
#[derive(Clone)]
pub struct MemoryBodyStream {
    bytes: Bytes,
}

impl MemoryBodyStream {
    /// Create body stream over `bytes`.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl BodyStream for MemoryBodyStream {
    fn len_hint(&self) -> Option<u64> {
        Some(self.bytes.len() as u64)
    }

    fn read(&mut self, _: &Context, buf: &mut [u8]) -> Result<usize, BodyError> {
        let n = buf.len().min(self.bytes.len());
        buf[..n].copy_from_slice(&self.bytes[..n]);
        self.bytes.advance(n);
        Ok(n)
    }
}

impl From<Bytes> for MemoryBodyStream {
    fn from(value: Bytes) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for MemoryBodyStream {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<&'static [u8]> for MemoryBodyStream {
    fn from(value: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(value))
    }
}

impl From<String> for MemoryBodyStream {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl std::fmt::Debug for MemoryBodyStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MemoryBodyStream")
            .field(&self.bytes.len())
            .finish()
    }
}
