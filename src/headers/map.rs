use super::{HeaderName, HeaderValue};

/// HTTP headers multimap.
///
/// Entries are kept in insertion order and repeated names are all retained,
/// which matters for legitimately multi-valued headers. Storage never
/// normalizes case; lookup compares ASCII case-insensitively.
#[derive(Clone, Default)]
pub struct HeaderMap {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns the number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the map contains an entry for the given name.
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the first value for the given name, in insertion order.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Returns an iterator over every value for the given name, in insertion
    /// order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> GetAll<'a> {
        GetAll {
            name,
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over all entries in insertion order, duplicates
    /// included, names in their original case.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

// ===== Mutation =====

impl HeaderMap {
    /// Append a header entry, retaining any existing entries with the same
    /// name.
    pub fn append(&mut self, name: impl Into<HeaderName>, value: impl Into<HeaderValue>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Insert a header entry, replacing every existing entry with the same
    /// name.
    ///
    /// Returns the first replaced value, if any.
    pub fn insert(
        &mut self,
        name: impl Into<HeaderName>,
        value: impl Into<HeaderValue>,
    ) -> Option<HeaderValue> {
        let name = name.into();
        let replaced = self.remove(name.as_str());
        self.entries.push((name, value.into()));
        replaced
    }

    /// Remove every entry with the given name, returning the first removed
    /// value if any.
    pub fn remove(&mut self, name: &str) -> Option<HeaderValue> {
        let mut removed = None;
        self.entries.retain(|(n, v)| {
            if n.eq_ignore_ascii_case(name) {
                if removed.is_none() {
                    removed = Some(v.clone());
                }
                false
            } else {
                true
            }
        });
        removed
    }

    /// Append a raw wire-format header line.
    ///
    /// The name is everything before the first `:`, stored verbatim. The
    /// value starts after the `:` once leading spaces and horizontal tabs
    /// are skipped, and runs up to the first carriage return or end of line.
    /// The transport's line splitting is authoritative: a trailing line feed
    /// is assumed to be already stripped and is not trimmed here.
    ///
    /// A line without a `:` is not a header. Blank lines, terminator lines
    /// and malformed input alike are discarded silently; this is the
    /// contract, not an error.
    pub fn append_line(&mut self, line: &[u8]) {
        let Some(colon) = line.iter().position(|&b| b == b':') else {
            return;
        };
        let (name, rest) = line.split_at(colon);

        let mut value = &rest[1..];
        while let [b' ' | b'\t', tail @ ..] = value {
            value = tail;
        }
        if let Some(cr) = value.iter().position(|&b| b == b'\r') {
            value = &value[..cr];
        }

        // non-UTF-8 lines are noise, same as lines without a separator
        let (Ok(name), Ok(value)) = (std::str::from_utf8(name), std::str::from_utf8(value)) else {
            return;
        };

        log::trace!("parsed header line {name:?}");
        self.entries.push((
            HeaderName::from_string(name.to_owned()),
            HeaderValue::from_string(value.to_owned()),
        ));
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// ===== Iterators =====

/// Iterator over every value for one header name, see [`HeaderMap::get_all`].
#[derive(Debug)]
pub struct GetAll<'a> {
    name: &'a str,
    inner: std::slice::Iter<'a, (HeaderName, HeaderValue)>,
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a HeaderValue;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find(|(n, _)| n.eq_ignore_ascii_case(self.name))
            .map(|(_, v)| v)
    }
}

/// Iterator over headers as name and value pair, see [`HeaderMap::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (HeaderName, HeaderValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a HeaderValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, v)| (n, v))
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a HeaderName, &'a HeaderValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
