//! HTTP response headers.
//!
//! [`HeaderMap`] is a multi-value mapping: repeated names are all retained in
//! the order they were inserted. Names are stored with their original case;
//! lookup is ASCII case-insensitive per HTTP semantics.
mod name;
mod value;
mod map;

#[cfg(test)]
mod test;

pub use name::HeaderName;
pub use value::HeaderValue;
pub use map::{GetAll, HeaderMap, Iter};
