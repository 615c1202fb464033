//! HTTP response model.
mod method;
mod response;
mod status;

pub use method::Method;
pub use response::Response;
pub use status::StatusCode;
