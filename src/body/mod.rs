//! HTTP message body streams.
//!
//! ## Core
//!
//! - [`BodyStream`] the trait that represents a single-pass body byte source
//! - [`read_to_end`] drain a stream fully into one [`Bytes`]
//!
//! ## Implementation
//!
//! - [`MemoryBodyStream`] fully buffered body
//! - [`ReaderBodyStream`] body backed by a blocking reader
pub mod error;
mod memory;
mod reader;

#[cfg(test)]
mod test;

pub use memory::MemoryBodyStream;
pub use reader::ReaderBodyStream;

use bytes::{Bytes, BytesMut};

use crate::context::Context;
use error::BodyError;

/// A unidirectional, possibly unbounded byte source.
///
/// A body stream is single-pass: consumed bytes cannot be re-read from the
/// same instance. It is a single-owner, single-consumer resource and is not
/// safe for concurrent reads.
pub trait BodyStream: Send {
    /// Remaining length in bytes, if known in advance.
    fn len_hint(&self) -> Option<u64>;

    /// Read up to `buf.len()` bytes into `buf`, returning how many were
    /// produced.
    ///
    /// May block on underlying I/O. Returning fewer bytes than requested is
    /// not an error; `Ok(0)` signals end of stream.
    fn read(&mut self, cx: &Context, buf: &mut [u8]) -> Result<usize, BodyError>;
}

impl std::fmt::Debug for dyn BodyStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BodyStream")
            .field("len_hint", &self.len_hint())
            .finish()
    }
}

const CHUNK: usize = 8 * 1024;

// the hint is advisory, never trust it for a huge upfront allocation
const MAX_PRESIZE: u64 = 1 << 20;

/// Drain the remainder of `stream` into a single contiguous [`Bytes`].
///
/// Repeatedly performs incremental reads until end of stream, tolerating
/// an unknown total length. Calling this on an already exhausted stream
/// returns empty [`Bytes`].
///
/// # Errors
///
/// Cancellation of `cx` mid-way fails with [`BodyError::Cancelled`] instead
/// of returning the partial bytes; I/O failures from the incremental reads
/// propagate unchanged.
pub fn read_to_end(cx: &Context, stream: &mut dyn BodyStream) -> Result<Bytes, BodyError> {
    let mut out = match stream.len_hint() {
        Some(len) => BytesMut::with_capacity(len.min(MAX_PRESIZE) as usize),
        None => BytesMut::new(),
    };
    let mut chunk = [0u8; CHUNK];

    loop {
        cx.ensure_not_cancelled()?;
        let n = stream.read(cx, &mut chunk)?;
        if n == 0 {
            break;
        }
        out.extend_from_slice(&chunk[..n]);
    }

    log::trace!("body drained, {} bytes", out.len());
    Ok(out.freeze())
}
