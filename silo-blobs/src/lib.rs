//! Blob storage client surface over the [`silo`] transport core.
//!
//! Typed clients translate method calls into REST requests dispatched
//! through a pluggable [`Transport`]. [`BlobClient`] is the entry point;
//! the block, page and append subtype clients are reached through its
//! conversion methods and share the same URL and pipeline.
//!
//! Authentication, retries and the full service API surface are out of
//! scope; the transport behind the [`Pipeline`] owns the wire.
#![warn(missing_debug_implementations)]

mod clients;
mod error;
pub mod models;
mod transport;
mod url;

pub use clients::{AppendBlobClient, BlobClient, BlockBlobClient, PageBlobClient};
pub use error::Error;
pub use transport::{Pipeline, Request, Transport};
pub use url::{BlobUrl, UrlError};
