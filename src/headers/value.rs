use crate::bytestring::ByteStr;

/// HTTP header value.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderValue(ByteStr);

impl HeaderValue {
    /// Create header value from an owned string without copying.
    pub fn from_string(value: String) -> Self {
        Self(ByteStr::from_string(value))
    }

    /// Extracts a string slice of the header value.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns header value as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self(ByteStr::from(value))
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl From<ByteStr> for HeaderValue {
    fn from(value: ByteStr) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for HeaderValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HeaderValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderValue").field(&self.as_str()).finish()
    }
}
