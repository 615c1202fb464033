//! Blob storage transport and response core.
//!
//! ## Core
//!
//! - [`http::Response`] one complete HTTP reply: status, reason, headers, body
//! - [`headers::HeaderMap`] multi-value response headers
//! - [`body::BodyStream`] single-pass, ownership-transferable body bytes
//! - [`Context`] cancellation and deadline token for blocking reads
#![warn(missing_debug_implementations)]

mod bytestring;

pub mod body;
pub mod context;
pub mod headers;
pub mod http;

pub use bytestring::ByteStr;
pub use context::Context;
