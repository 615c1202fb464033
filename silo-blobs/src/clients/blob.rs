use bytes::Bytes;
use silo::{
    body::MemoryBodyStream,
    context::Context,
    http::{Method, Response, StatusCode},
};

use super::{AppendBlobClient, BlockBlobClient, PageBlobClient, client, expect_status, fmt_range};
use crate::{
    error::Error,
    models::{
        self, BlobContentInfo, BlobCopyInfo, BlobDownloadResponse, BlobProperties,
        BlobSnapshotInfo, Metadata,
    },
    transport::{Pipeline, Request},
    url::BlobUrl,
};

/// Entry point for operations against a single blob.
///
/// Holds the blob URL and the shared request [`Pipeline`]. Subtype clients
/// for block, page and append blobs are derived through the conversion
/// methods and reuse both.
#[derive(Clone, Debug)]
pub struct BlobClient {
    url: BlobUrl,
    pipeline: Pipeline,
}

impl BlobClient {
    /// Create client for the blob at `url`, dispatching through `pipeline`.
    pub fn new(url: BlobUrl, pipeline: Pipeline) -> BlobClient {
        Self { url, pipeline }
    }

    /// Returns the blob's endpoint URL.
    pub fn url(&self) -> &BlobUrl {
        &self.url
    }

    /// Derive a client for the same blob at the given snapshot.
    ///
    /// An empty snapshot identifier returns to the base blob.
    pub fn with_snapshot(&self, snapshot: &str) -> BlobClient {
        let mut url = self.url.clone();
        if snapshot.is_empty() {
            url.remove_query("snapshot");
        } else {
            url.set_query("snapshot", snapshot);
        }
        Self {
            url,
            pipeline: self.pipeline.clone(),
        }
    }

    /// Derive a [`BlockBlobClient`] sharing this client's URL and pipeline.
    pub fn block_blob_client(&self) -> BlockBlobClient {
        client(self.url.clone(), self.pipeline.clone())
    }

    /// Derive a [`PageBlobClient`] sharing this client's URL and pipeline.
    pub fn page_blob_client(&self) -> PageBlobClient {
        client(self.url.clone(), self.pipeline.clone())
    }

    /// Derive an [`AppendBlobClient`] sharing this client's URL and pipeline.
    pub fn append_blob_client(&self) -> AppendBlobClient {
        client(self.url.clone(), self.pipeline.clone())
    }

    pub(super) fn send(&self, cx: &Context, request: Request) -> Result<Response, Error> {
        self.pipeline.send(cx, request)
    }

    pub(super) fn request(&self, method: Method) -> Request {
        Request::new(method, self.url.clone())
    }
}

// ===== Operations =====

impl BlobClient {
    /// Download the blob, or a byte range of it given as offset and
    /// non-zero length.
    ///
    /// The returned body stream is handed out by ownership transfer; the
    /// caller drains it incrementally or via
    /// [`read_to_end`][silo::body::read_to_end].
    pub fn download(
        &self,
        cx: &Context,
        range: Option<(u64, u64)>,
    ) -> Result<BlobDownloadResponse, Error> {
        let mut request = self.request(Method::Get);
        if let Some((offset, length)) = range {
            request.headers.insert(models::RANGE, fmt_range(offset, length)?);
        }

        let mut response = self.send(cx, request)?;
        expect_status(&response, &[StatusCode::OK, StatusCode::PARTIAL_CONTENT])?;

        let properties = BlobProperties::from_headers(response.headers())?;
        // a missing body is the transport saying the payload is empty
        let body = response
            .take_body()
            .unwrap_or_else(|| Box::new(MemoryBodyStream::new(Bytes::new())));

        Ok(BlobDownloadResponse { properties, body })
    }

    /// Fetch the blob's properties and metadata without its content.
    pub fn get_properties(&self, cx: &Context) -> Result<BlobProperties, Error> {
        let response = self.send(cx, self.request(Method::Head))?;
        expect_status(&response, &[StatusCode::OK])?;
        BlobProperties::from_headers(response.headers())
    }

    /// Replace the blob's user-defined metadata.
    pub fn set_metadata(&self, cx: &Context, metadata: &Metadata) -> Result<BlobContentInfo, Error> {
        let mut request = self.request(Method::Put);
        request.url.set_query("comp", "metadata");
        for (name, value) in metadata {
            request
                .headers
                .insert(format!("{}{name}", models::META_PREFIX), value.clone());
        }

        let response = self.send(cx, request)?;
        expect_status(&response, &[StatusCode::OK])?;
        BlobContentInfo::from_headers(response.headers())
    }

    /// Mark the blob for deletion during garbage collection.
    pub fn delete(&self, cx: &Context) -> Result<(), Error> {
        let response = self.send(cx, self.request(Method::Delete))?;
        expect_status(&response, &[StatusCode::ACCEPTED])
    }

    /// Restore a soft-deleted blob and its snapshots.
    pub fn undelete(&self, cx: &Context) -> Result<(), Error> {
        let mut request = self.request(Method::Put);
        request.url.set_query("comp", "undelete");

        let response = self.send(cx, request)?;
        expect_status(&response, &[StatusCode::OK])
    }

    /// Create a read-only snapshot of the blob.
    pub fn create_snapshot(&self, cx: &Context) -> Result<BlobSnapshotInfo, Error> {
        let mut request = self.request(Method::Put);
        request.url.set_query("comp", "snapshot");

        let response = self.send(cx, request)?;
        expect_status(&response, &[StatusCode::CREATED])?;
        BlobSnapshotInfo::from_headers(response.headers())
    }

    /// Start copying `source_uri` to this blob.
    pub fn start_copy_from_uri(&self, cx: &Context, source_uri: &str) -> Result<BlobCopyInfo, Error> {
        let mut request = self.request(Method::Put);
        request
            .headers
            .insert(models::COPY_SOURCE, source_uri.to_owned());

        let response = self.send(cx, request)?;
        expect_status(&response, &[StatusCode::ACCEPTED])?;
        BlobCopyInfo::from_headers(response.headers())
    }

    /// Abort the pending copy operation `copy_id`.
    pub fn abort_copy_from_uri(&self, cx: &Context, copy_id: &str) -> Result<(), Error> {
        let mut request = self.request(Method::Put);
        request.url.set_query("comp", "copy");
        request.url.set_query("copyid", copy_id);
        request.headers.insert(models::COPY_ACTION, "abort");

        let response = self.send(cx, request)?;
        expect_status(&response, &[StatusCode::NO_CONTENT])
    }
}
