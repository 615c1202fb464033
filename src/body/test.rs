use std::{collections::VecDeque, io};

use bytes::Bytes;

use super::*;

/// Yields scripted chunks, regardless of the caller's buffer size.
struct ChunkStream {
    chunks: VecDeque<Bytes>,
}

impl ChunkStream {
    fn new<const N: usize>(chunks: [&'static [u8]; N]) -> Self {
        Self {
            chunks: chunks.iter().copied().map(Bytes::from_static).collect(),
        }
    }
}

impl BodyStream for ChunkStream {
    fn len_hint(&self) -> Option<u64> {
        None
    }

    fn read(&mut self, _: &Context, buf: &mut [u8]) -> Result<usize, BodyError> {
        let Some(chunk) = self.chunks.front_mut() else {
            return Ok(0);
        };
        let n = buf.len().min(chunk.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        let _ = chunk.split_to(n);
        if chunk.is_empty() {
            self.chunks.pop_front();
        }
        Ok(n)
    }
}

/// Cancels its own context after the first chunk is produced.
struct CancelAfterFirst {
    inner: ChunkStream,
    reads: usize,
}

impl BodyStream for CancelAfterFirst {
    fn len_hint(&self) -> Option<u64> {
        None
    }

    fn read(&mut self, cx: &Context, buf: &mut [u8]) -> Result<usize, BodyError> {
        let n = self.inner.read(cx, buf)?;
        self.reads += 1;
        if self.reads == 1 {
            cx.cancel();
        }
        Ok(n)
    }
}

/// Fails with an I/O error after the first chunk.
struct FailAfterFirst {
    chunk: Option<Bytes>,
}

impl BodyStream for FailAfterFirst {
    fn len_hint(&self) -> Option<u64> {
        None
    }

    fn read(&mut self, _: &Context, buf: &mut [u8]) -> Result<usize, BodyError> {
        match self.chunk.take() {
            Some(chunk) => {
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
            None => Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer reset").into()),
        }
    }
}

#[test]
fn read_to_end_concatenates_chunks() {
    let cx = Context::new();
    let mut stream = ChunkStream::new([&[1, 2, 3], &[4, 5]]);

    let bytes = read_to_end(&cx, &mut stream).unwrap();
    assert_eq!(bytes.as_ref(), [1, 2, 3, 4, 5]);
}

#[test]
fn read_to_end_is_idempotent_at_end() {
    let cx = Context::new();
    let mut stream = ChunkStream::new([&[1, 2, 3]]);

    assert_eq!(read_to_end(&cx, &mut stream).unwrap().len(), 3);
    assert!(read_to_end(&cx, &mut stream).unwrap().is_empty());
}

#[test]
fn read_to_end_reports_cancellation_not_partial_bytes() {
    let cx = Context::new();
    let mut stream = CancelAfterFirst {
        inner: ChunkStream::new([&[1, 2, 3], &[4, 5]]),
        reads: 0,
    };

    let err = read_to_end(&cx, &mut stream).unwrap_err();
    assert!(err.is_cancelled());
}

#[test]
fn read_to_end_propagates_io_failure() {
    let cx = Context::new();
    let mut stream = FailAfterFirst {
        chunk: Some(Bytes::from_static(&[9, 9])),
    };

    match read_to_end(&cx, &mut stream).unwrap_err() {
        BodyError::Io(err) => assert_eq!(err.kind(), io::ErrorKind::ConnectionReset),
        other => panic!("expected io failure, got {other:?}"),
    }
}

#[test]
fn incremental_read_is_bounded_by_buffer() {
    let cx = Context::new();
    let mut stream = MemoryBodyStream::from(b"abcdef".as_slice());
    assert_eq!(stream.len_hint(), Some(6));

    let mut buf = [0u8; 4];
    assert_eq!(stream.read(&cx, &mut buf).unwrap(), 4);
    assert_eq!(&buf, b"abcd");
    assert_eq!(stream.len_hint(), Some(2));

    assert_eq!(stream.read(&cx, &mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"ef");

    // exhausted, zero-length read is not an error
    assert_eq!(stream.read(&cx, &mut buf).unwrap(), 0);
    assert_eq!(stream.remaining(), 0);
}

#[test]
fn memory_stream_read_to_end_matches_source() {
    let cx = Context::new();
    let payload = vec![7u8; 40_000];
    let mut stream = MemoryBodyStream::new(payload.clone());

    let bytes = read_to_end(&cx, &mut stream).unwrap();
    assert_eq!(bytes.as_ref(), payload);
}

#[test]
fn reader_stream_counts_declared_length_down() {
    let cx = Context::new();
    let mut stream = ReaderBodyStream::with_len(io::Cursor::new(b"hello".to_vec()), 5);
    assert_eq!(stream.len_hint(), Some(5));

    let mut buf = [0u8; 3];
    assert_eq!(stream.read(&cx, &mut buf).unwrap(), 3);
    assert_eq!(stream.len_hint(), Some(2));

    let bytes = read_to_end(&cx, &mut stream).unwrap();
    assert_eq!(bytes.as_ref(), b"lo");
}

#[test]
fn reader_stream_checks_cancellation_before_reading() {
    let cx = Context::new();
    cx.cancel();

    let mut stream = ReaderBodyStream::new(io::Cursor::new(b"hello".to_vec()));
    let mut buf = [0u8; 8];
    assert!(stream.read(&cx, &mut buf).unwrap_err().is_cancelled());
}
