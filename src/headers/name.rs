use crate::bytestring::ByteStr;

/// HTTP header name.
///
/// The name is stored exactly as received, original case included. Header
/// names compare equal ASCII case-insensitively, so `"ETag"` and `"etag"`
/// are the same name while remaining distinct in storage.
#[derive(Clone)]
pub struct HeaderName(ByteStr);

impl HeaderName {
    /// Create header name from an owned string without copying.
    pub fn from_string(name: String) -> Self {
        Self(ByteStr::from_string(name))
    }

    /// Extracts a string slice of the header name, original case preserved.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Checks that two header names are an ASCII case-insensitive match.
    pub fn eq_ignore_ascii_case(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl From<&str> for HeaderName {
    fn from(value: &str) -> Self {
        Self(ByteStr::from(value))
    }
}

impl From<String> for HeaderName {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl From<ByteStr> for HeaderName {
    fn from(value: ByteStr) -> Self {
        Self(value)
    }
}

/// ASCII case-insensitive, per HTTP field name semantics.
impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        self.eq_ignore_ascii_case(other.as_str())
    }
}

impl Eq for HeaderName {}

impl PartialEq<str> for HeaderName {
    fn eq(&self, other: &str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for HeaderName {
    fn eq(&self, other: &&str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl std::fmt::Display for HeaderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for HeaderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderName").field(&self.as_str()).finish()
    }
}
