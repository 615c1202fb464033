//! Typed results assembled from response headers and bodies.
use silo::headers::HeaderMap;

use crate::error::Error;

// ===== Wire header names =====

pub(crate) const ETAG: &str = "ETag";
pub(crate) const LAST_MODIFIED: &str = "Last-Modified";
pub(crate) const CONTENT_LENGTH: &str = "Content-Length";
pub(crate) const CONTENT_TYPE: &str = "Content-Type";

pub(crate) const META_PREFIX: &str = "x-ms-meta-";
pub(crate) const BLOB_TYPE: &str = "x-ms-blob-type";
pub(crate) const BLOB_CONTENT_LENGTH: &str = "x-ms-blob-content-length";
pub(crate) const SNAPSHOT: &str = "x-ms-snapshot";
pub(crate) const COPY_ID: &str = "x-ms-copy-id";
pub(crate) const COPY_STATUS: &str = "x-ms-copy-status";
pub(crate) const COPY_SOURCE: &str = "x-ms-copy-source";
pub(crate) const COPY_ACTION: &str = "x-ms-copy-action";
pub(crate) const RANGE: &str = "x-ms-range";
pub(crate) const PAGE_WRITE: &str = "x-ms-page-write";
pub(crate) const SEQUENCE_NUMBER: &str = "x-ms-blob-sequence-number";
pub(crate) const APPEND_OFFSET: &str = "x-ms-blob-append-offset";
pub(crate) const COMMITTED_BLOCK_COUNT: &str = "x-ms-blob-committed-block-count";
pub(crate) const SERVER_ENCRYPTED: &str = "x-ms-server-encrypted";

// ===== Models =====

/// User-defined metadata as ordered name and value pairs.
///
/// Names are the part after the `x-ms-meta-` header prefix, case preserved
/// as received.
pub type Metadata = Vec<(String, String)>;

/// Standard and system properties of one blob.
#[derive(Clone, Debug, Default)]
pub struct BlobProperties {
    pub etag: String,
    pub last_modified: String,
    pub content_length: u64,
    pub content_type: Option<String>,
    pub blob_type: Option<String>,
    pub server_encrypted: Option<bool>,
    pub metadata: Metadata,
}

/// Downloaded blob: its properties plus the body stream, handed out by
/// ownership transfer.
pub struct BlobDownloadResponse {
    pub properties: BlobProperties,
    pub body: Box<dyn silo::body::BodyStream>,
}

impl std::fmt::Debug for BlobDownloadResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlobDownloadResponse")
            .field("properties", &self.properties)
            .field("body", &self.body.len_hint())
            .finish()
    }
}

/// ETag and modification time of a written blob.
#[derive(Clone, Debug, Default)]
pub struct BlobContentInfo {
    pub etag: String,
    pub last_modified: String,
}

/// A newly created snapshot.
#[derive(Clone, Debug, Default)]
pub struct BlobSnapshotInfo {
    pub snapshot: String,
    pub etag: String,
    pub last_modified: String,
}

/// Progress state of a server-side copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyStatus {
    Pending,
    Success,
    Aborted,
    Failed,
}

/// State of a started copy operation.
#[derive(Clone, Debug)]
pub struct BlobCopyInfo {
    pub copy_id: String,
    pub copy_status: CopyStatus,
}

/// State of updated pages.
#[derive(Clone, Debug, Default)]
pub struct PageInfo {
    pub etag: String,
    pub last_modified: String,
    pub sequence_number: Option<u64>,
}

/// State of a resized page blob.
#[derive(Clone, Debug, Default)]
pub struct PageBlobInfo {
    pub etag: String,
    pub sequence_number: Option<u64>,
}

/// One contiguous page range, 512-byte aligned on the service side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRange {
    pub offset: u64,
    pub length: u64,
}

/// Valid and cleared ranges of a page blob.
#[derive(Clone, Debug, Default)]
pub struct PageRangesInfo {
    pub etag: String,
    pub last_modified: String,
    pub blob_content_length: u64,
    pub page_ranges: Vec<PageRange>,
    pub clear_ranges: Vec<PageRange>,
}

/// State of an appended block.
#[derive(Clone, Debug, Default)]
pub struct AppendBlockInfo {
    pub etag: String,
    pub last_modified: String,
    pub append_offset: u64,
    pub committed_block_count: u64,
}

// ===== Header decoding =====

pub(crate) fn required(headers: &HeaderMap, name: &'static str) -> Result<String, Error> {
    headers
        .get(name)
        .map(|v| v.as_str().to_owned())
        .ok_or(Error::MissingHeader(name))
}

pub(crate) fn required_u64(headers: &HeaderMap, name: &'static str) -> Result<u64, Error> {
    let value = headers.get(name).ok_or(Error::MissingHeader(name))?;
    value.as_str().parse().map_err(|_| Error::InvalidHeader {
        name,
        value: value.as_str().to_owned(),
    })
}

pub(crate) fn optional(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).map(|v| v.as_str().to_owned())
}

pub(crate) fn optional_u64(headers: &HeaderMap, name: &'static str) -> Result<Option<u64>, Error> {
    match headers.get(name) {
        Some(value) => value
            .as_str()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidHeader {
                name,
                value: value.as_str().to_owned(),
            }),
        None => Ok(None),
    }
}

fn optional_bool(headers: &HeaderMap, name: &'static str) -> Result<Option<bool>, Error> {
    match headers.get(name) {
        Some(value) => match value.as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(Error::InvalidHeader {
                name,
                value: other.to_owned(),
            }),
        },
        None => Ok(None),
    }
}

/// Collect `x-ms-meta-*` headers, stripping the prefix and preserving the
/// case and order of what remains.
pub(crate) fn metadata(headers: &HeaderMap) -> Metadata {
    headers
        .iter()
        .filter_map(|(name, value)| {
            let name = name.as_str();
            if name.len() > META_PREFIX.len()
                && name[..META_PREFIX.len()].eq_ignore_ascii_case(META_PREFIX)
            {
                Some((name[META_PREFIX.len()..].to_owned(), value.as_str().to_owned()))
            } else {
                None
            }
        })
        .collect()
}

impl BlobProperties {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        Ok(Self {
            etag: required(headers, ETAG)?,
            last_modified: required(headers, LAST_MODIFIED)?,
            content_length: required_u64(headers, CONTENT_LENGTH)?,
            content_type: optional(headers, CONTENT_TYPE),
            blob_type: optional(headers, BLOB_TYPE),
            server_encrypted: optional_bool(headers, SERVER_ENCRYPTED)?,
            metadata: metadata(headers),
        })
    }
}

impl BlobContentInfo {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        Ok(Self {
            etag: required(headers, ETAG)?,
            last_modified: required(headers, LAST_MODIFIED)?,
        })
    }
}

impl BlobSnapshotInfo {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        Ok(Self {
            snapshot: required(headers, SNAPSHOT)?,
            etag: required(headers, ETAG)?,
            last_modified: required(headers, LAST_MODIFIED)?,
        })
    }
}

impl CopyStatus {
    fn parse(value: &str) -> Result<CopyStatus, Error> {
        match value {
            "pending" => Ok(Self::Pending),
            "success" => Ok(Self::Success),
            "aborted" => Ok(Self::Aborted),
            "failed" => Ok(Self::Failed),
            other => Err(Error::InvalidHeader {
                name: COPY_STATUS,
                value: other.to_owned(),
            }),
        }
    }
}

impl BlobCopyInfo {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        Ok(Self {
            copy_id: required(headers, COPY_ID)?,
            copy_status: CopyStatus::parse(&required(headers, COPY_STATUS)?)?,
        })
    }
}

impl PageInfo {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        Ok(Self {
            etag: required(headers, ETAG)?,
            last_modified: required(headers, LAST_MODIFIED)?,
            sequence_number: optional_u64(headers, SEQUENCE_NUMBER)?,
        })
    }
}

impl PageBlobInfo {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        Ok(Self {
            etag: required(headers, ETAG)?,
            sequence_number: optional_u64(headers, SEQUENCE_NUMBER)?,
        })
    }
}

impl AppendBlockInfo {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        Ok(Self {
            etag: required(headers, ETAG)?,
            last_modified: required(headers, LAST_MODIFIED)?,
            append_offset: required_u64(headers, APPEND_OFFSET)?,
            committed_block_count: required_u64(headers, COMMITTED_BLOCK_COUNT)?,
        })
    }
}

// ===== Body decoding =====

/// Decode the `PageList` document of a page-range listing.
///
/// The service reports inclusive `<Start>`/`<End>` bounds; ranges are
/// exposed as offset plus length. Page and clear ranges are returned
/// separately, each in document order.
pub(crate) fn parse_page_list(body: &[u8]) -> Result<(Vec<PageRange>, Vec<PageRange>), Error> {
    let text =
        std::str::from_utf8(body).map_err(|_| Error::InvalidBody("page list is not utf-8"))?;

    let mut pages = Vec::new();
    let mut clears = Vec::new();
    let mut rest = text;

    loop {
        let page = rest.find("<PageRange>");
        let clear = rest.find("<ClearRange>");
        let (at, open, close, out) = match (page, clear) {
            (Some(p), Some(c)) if p < c => (p, "<PageRange>", "</PageRange>", &mut pages),
            (Some(p), None) => (p, "<PageRange>", "</PageRange>", &mut pages),
            (_, Some(c)) => (c, "<ClearRange>", "</ClearRange>", &mut clears),
            (None, None) => break,
        };

        let start = at + open.len();
        let end = rest[start..]
            .find(close)
            .ok_or(Error::InvalidBody("unterminated range element"))?
            + start;

        let element = &rest[start..end];
        let first = element_u64(element, "<Start>", "</Start>")?;
        let last = element_u64(element, "<End>", "</End>")?;
        if last < first {
            return Err(Error::InvalidBody("range end before start"));
        }
        out.push(PageRange {
            offset: first,
            length: last - first + 1,
        });

        rest = &rest[end + close.len()..];
    }

    Ok((pages, clears))
}

fn element_u64(element: &str, open: &str, close: &str) -> Result<u64, Error> {
    let start = element
        .find(open)
        .ok_or(Error::InvalidBody("missing range bound"))?
        + open.len();
    let end = element[start..]
        .find(close)
        .ok_or(Error::InvalidBody("missing range bound"))?
        + start;
    element[start..end]
        .trim()
        .parse()
        .map_err(|_| Error::InvalidBody("range bound is not an integer"))
}

/// Render the `BlockList` commit document from block ids, most recent
/// version of each block.
pub(crate) fn block_list_xml(block_ids: &[String]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="utf-8"?><BlockList>"#);
    for id in block_ids {
        xml.push_str("<Latest>");
        xml.push_str(id);
        xml.push_str("</Latest>");
    }
    xml.push_str("</BlockList>");
    xml
}
