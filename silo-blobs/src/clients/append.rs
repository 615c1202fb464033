use std::ops::Deref;

use silo::{
    body::BodyStream,
    context::Context,
    http::{Method, StatusCode},
};

use super::{BlobClient, FromParts, expect_status, fmt_u64};
use crate::{
    error::Error,
    models::{self, AppendBlockInfo, BlobContentInfo},
    transport::Pipeline,
    url::BlobUrl,
};

/// Client for append blob operations; derefs to the base [`BlobClient`].
#[derive(Clone, Debug)]
pub struct AppendBlobClient {
    inner: BlobClient,
}

impl FromParts for AppendBlobClient {
    fn from_parts(url: BlobUrl, pipeline: Pipeline) -> Self {
        Self {
            inner: BlobClient::new(url, pipeline),
        }
    }
}

impl Deref for AppendBlobClient {
    type Target = BlobClient;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AppendBlobClient {
    /// Initialize an empty append blob, overwriting any existing blob.
    pub fn create(&self, cx: &Context) -> Result<BlobContentInfo, Error> {
        let mut request = self.inner.request(Method::Put);
        request.headers.insert(models::BLOB_TYPE, "AppendBlob");

        let response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::CREATED])?;
        BlobContentInfo::from_headers(response.headers())
    }

    /// Append `body` as one block at the end of the blob.
    pub fn append_block(
        &self,
        cx: &Context,
        body: Box<dyn BodyStream>,
    ) -> Result<AppendBlockInfo, Error> {
        let mut request = self.inner.request(Method::Put);
        request.url.set_query("comp", "appendblock");
        if let Some(len) = body.len_hint() {
            request.headers.insert(models::CONTENT_LENGTH, fmt_u64(len));
        }
        request.body = Some(body);

        let response = self.inner.send(cx, request)?;
        expect_status(&response, &[StatusCode::CREATED])?;
        AppendBlockInfo::from_headers(response.headers())
    }
}
