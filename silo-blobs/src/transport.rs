//! Transport seam between clients and the wire.
use std::sync::Arc;

use silo::{
    body::BodyStream,
    context::Context,
    headers::HeaderMap,
    http::{Method, Response},
};

use crate::{error::Error, url::BlobUrl};

/// One REST request ready for dispatch.
///
/// Clients shape requests; the transport owns serialization, connection
/// handling and everything else about the wire.
pub struct Request {
    pub method: Method,
    pub url: BlobUrl,
    pub headers: HeaderMap,
    pub body: Option<Box<dyn BodyStream>>,
}

impl Request {
    /// Create a bodyless request.
    pub fn new(method: Method, url: BlobUrl) -> Request {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("body", &self.body.is_some())
            .finish()
    }
}

/// Dispatches one request and produces the parsed [`Response`].
///
/// Implementations are expected to honor the [`Context`] for blocking work
/// and to consume the request body stream at most once.
pub trait Transport: Send + Sync {
    fn send(&self, cx: &Context, request: Request) -> Result<Response, Error>;
}

/// Shared transport handle cloned into every client.
#[derive(Clone)]
pub struct Pipeline {
    transport: Arc<dyn Transport>,
}

impl Pipeline {
    /// Create pipeline over the given transport.
    pub fn new(transport: impl Transport + 'static) -> Pipeline {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Dispatch `request` through the transport.
    pub fn send(&self, cx: &Context, request: Request) -> Result<Response, Error> {
        log::debug!("{} {}", request.method, request.url);
        self.transport.send(cx, request)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline").finish_non_exhaustive()
    }
}
