//! Blob client types.
//!
//! [`BlobClient`] is the only publicly constructible client. The block, page
//! and append subtype clients are built by a factory private to this module
//! and reached through the conversion methods on the base client, so every
//! subtype shares the URL and pipeline of the client it came from.
mod append;
mod blob;
mod block;
mod page;


pub use append::AppendBlobClient;
pub use blob::BlobClient;
pub use block::BlockBlobClient;
pub use page::PageBlobClient;

use silo::http::{Response, StatusCode};

use crate::{error::Error, transport::Pipeline, url::BlobUrl};

/// Construction capability for subtype clients, sealed inside this module.
trait FromParts {
    fn from_parts(url: BlobUrl, pipeline: Pipeline) -> Self;
}

/// The single factory every conversion method goes through.
fn client<C: FromParts>(url: BlobUrl, pipeline: Pipeline) -> C {
    C::from_parts(url, pipeline)
}

fn expect_status(response: &Response, accepted: &[StatusCode]) -> Result<(), Error> {
    if accepted.contains(&response.status()) {
        Ok(())
    } else {
        Err(Error::UnexpectedStatus {
            status: response.status(),
            reason: response.reason_phrase().to_owned(),
        })
    }
}

fn fmt_u64(value: u64) -> String {
    itoa::Buffer::new().format(value).to_owned()
}

/// `bytes=first-last` range header value, bounds inclusive.
///
/// The inclusive form cannot express zero bytes, so a zero `length` is
/// rejected before anything reaches the transport.
fn fmt_range(offset: u64, length: u64) -> Result<String, Error> {
    if length == 0 {
        return Err(Error::EmptyRange);
    }
    let mut buf = itoa::Buffer::new();
    let mut value = String::from("bytes=");
    value.push_str(buf.format(offset));
    value.push('-');
    value.push_str(buf.format(offset + length - 1));
    Ok(value)
}
