use std::ops::Deref;

use silo::{
    body::{BodyStream, MemoryBodyStream},
    context::Context,
    http::{Method, StatusCode},
};

use super::{BlobClient, FromParts, expect_status, fmt_u64};
use crate::{
    error::Error,
    models::{self, BlobContentInfo, block_list_xml},
    transport::Pipeline,
    url::BlobUrl,
};

/// Client for block blob operations; derefs to the base [`BlobClient`].
#[derive(Clone, Debug)]
pub struct BlockBlobClient {
    inner: BlobClient,
}

impl FromParts for BlockBlobClient {
    fn from_parts(url: BlobUrl, pipeline: Pipeline) -> Self {
        Self {
            inner: BlobClient::new(url, pipeline),
        }
    }
}

impl Deref for BlockBlobClient {
    type Target = BlobClient;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl BlockBlobClient {
    /// Upload `body` as the blob's whole content, overwriting any existing
    /// blob.
    pub fn upload(
        &self,
        cx: &Context,
        body: Box<dyn BodyStream>,
    ) -> Result<BlobContentInfo, Error> {
        let mut request = self.inner.request(Method::Put);
        request.headers.insert(models::BLOB_TYPE, "BlockBlob");
        if let Some(len) = body.len_hint() {
            request.headers.insert(models::CONTENT_LENGTH, fmt_u64(len));
        }
        request.body = Some(body);

        let response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::CREATED])?;
        BlobContentInfo::from_headers(response.headers())
    }

    /// Stage a block for a later [`commit_block_list`][Self::commit_block_list].
    pub fn stage_block(
        &self,
        cx: &Context,
        block_id: &str,
        body: Box<dyn BodyStream>,
    ) -> Result<(), Error> {
        let mut request = self.inner.request(Method::Put);
        request.url.set_query("comp", "block");
        request.url.set_query("blockid", block_id);
        if let Some(len) = body.len_hint() {
            request.headers.insert(models::CONTENT_LENGTH, fmt_u64(len));
        }
        request.body = Some(body);

        let response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::CREATED])
    }

    /// Commit previously staged blocks as the blob's content, in the given
    /// order.
    pub fn commit_block_list(
        &self,
        cx: &Context,
        block_ids: &[String],
    ) -> Result<BlobContentInfo, Error> {
        let mut request = self.inner.request(Method::Put);
        request.url.set_query("comp", "blocklist");
        request.body = Some(Box::new(MemoryBodyStream::from(block_list_xml(block_ids))));

        let response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::CREATED])?;
        BlobContentInfo::from_headers(response.headers())
    }
}
