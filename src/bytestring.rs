use std::ops::Deref;

use bytes::Bytes;

/// str based on [`Bytes`].
///
/// Cloning is cheap and does not copy the underlying buffer.
#[derive(Clone, Default)]
pub struct ByteStr(Bytes);

impl ByteStr {
    /// Create [`ByteStr`] from an owned string without copying.
    pub fn from_string(s: String) -> ByteStr {
        Self(Bytes::from(s.into_bytes()))
    }

    /// Extracts a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: checked at construction and immutable
        unsafe { std::str::from_utf8_unchecked(self.0.as_ref()) }
    }
}

impl Deref for ByteStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for ByteStr {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for ByteStr {
    fn from(value: &str) -> Self {
        Self(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for ByteStr {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl PartialEq for ByteStr {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for ByteStr {}

impl PartialEq<str> for ByteStr {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteStr {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == other.as_bytes()
    }
}

impl std::fmt::Display for ByteStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self)
    }
}

impl std::fmt::Debug for ByteStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ByteStr").field(&self.as_str()).finish()
    }
}
