use std::ops::Deref;

use silo::{
    body::BodyStream,
    context::Context,
    http::{Method, StatusCode},
};

use super::{BlobClient, FromParts, expect_status, fmt_range, fmt_u64};
use crate::{
    error::Error,
    models::{
        self, BlobContentInfo, BlobCopyInfo, PageBlobInfo, PageInfo, PageRangesInfo,
        parse_page_list,
    },
    transport::Pipeline,
    url::BlobUrl,
};

/// Client for page blob operations; derefs to the base [`BlobClient`].
///
/// Page blobs are collections of 512-byte pages written in place at aligned
/// offsets. Alignment is enforced by the service, not pre-validated here.
#[derive(Clone, Debug)]
pub struct PageBlobClient {
    inner: BlobClient,
}

impl FromParts for PageBlobClient {
    fn from_parts(url: BlobUrl, pipeline: Pipeline) -> Self {
        Self {
            inner: BlobClient::new(url, pipeline),
        }
    }
}

impl Deref for PageBlobClient {
    type Target = BlobClient;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl PageBlobClient {
    /// Initialize a page blob of the given maximum size, overwriting any
    /// existing blob. The size must be 512-byte aligned.
    pub fn create(&self, cx: &Context, max_size: u64) -> Result<BlobContentInfo, Error> {
        let mut request = self.inner.request(Method::Put);
        request.headers.insert(models::BLOB_TYPE, "PageBlob");
        request
            .headers
            .insert(models::BLOB_CONTENT_LENGTH, fmt_u64(max_size));

        let response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::CREATED])?;
        BlobContentInfo::from_headers(response.headers())
    }

    /// Write `body` to the pages starting at `offset`.
    ///
    /// The body must report its length through
    /// [`len_hint`][BodyStream::len_hint]; the written range is derived from
    /// it.
    pub fn upload_pages(
        &self,
        cx: &Context,
        offset: u64,
        body: Box<dyn BodyStream>,
    ) -> Result<PageInfo, Error> {
        let len = body.len_hint().ok_or(Error::UnsizedBody)?;

        let mut request = self.inner.request(Method::Put);
        request.url.set_query("comp", "page");
        request.headers.insert(models::PAGE_WRITE, "update");
        request.headers.insert(models::RANGE, fmt_range(offset, len)?);
        request.headers.insert(models::CONTENT_LENGTH, fmt_u64(len));
        request.body = Some(body);

        let response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::CREATED])?;
        PageInfo::from_headers(response.headers())
    }

    /// Clear `length` bytes of pages starting at `offset`.
    pub fn clear_pages(&self, cx: &Context, offset: u64, length: u64) -> Result<PageInfo, Error> {
        let mut request = self.inner.request(Method::Put);
        request.url.set_query("comp", "page");
        request.headers.insert(models::PAGE_WRITE, "clear");
        request
            .headers
            .insert(models::RANGE, fmt_range(offset, length)?);

        let response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::CREATED])?;
        PageInfo::from_headers(response.headers())
    }

    /// Resize the page blob; pages beyond the new size are discarded.
    pub fn resize(&self, cx: &Context, size: u64) -> Result<PageBlobInfo, Error> {
        let mut request = self.inner.request(Method::Put);
        request.url.set_query("comp", "properties");
        request
            .headers
            .insert(models::BLOB_CONTENT_LENGTH, fmt_u64(size));

        let response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::OK])?;
        PageBlobInfo::from_headers(response.headers())
    }

    /// List the valid and cleared page ranges of the blob.
    pub fn get_page_ranges(&self, cx: &Context) -> Result<PageRangesInfo, Error> {
        let mut request = self.inner.request(Method::Get);
        request.url.set_query("comp", "pagelist");

        let mut response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::OK])?;

        let etag = models::required(response.headers(), models::ETAG)?;
        let last_modified = models::required(response.headers(), models::LAST_MODIFIED)?;
        let blob_content_length =
            models::required_u64(response.headers(), models::BLOB_CONTENT_LENGTH)?;

        let body = response.read_body_to_end(cx)?;
        let (page_ranges, clear_ranges) = parse_page_list(&body)?;

        Ok(PageRangesInfo {
            etag,
            last_modified,
            blob_content_length,
            page_ranges,
            clear_ranges,
        })
    }

    /// Start an incremental copy of a snapshot of `source_uri` into this
    /// blob.
    pub fn start_copy_incremental(
        &self,
        cx: &Context,
        source_uri: &str,
    ) -> Result<BlobCopyInfo, Error> {
        let mut request = self.inner.request(Method::Put);
        request.url.set_query("comp", "incrementalcopy");
        request
            .headers
            .insert(models::COPY_SOURCE, source_uri.to_owned());

        let response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::ACCEPTED])?;
        BlobCopyInfo::from_headers(response.headers())
    }
}
