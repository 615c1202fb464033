//! Blob endpoint URL.

/// URL of one blob, with editable query parameters.
///
/// This is request-shaping infrastructure, not a general URL parser:
/// components are stored verbatim, no percent decoding is performed, and
/// only the pieces the REST surface edits (query parameters) are mutable.
#[derive(Clone, PartialEq, Eq)]
pub struct BlobUrl {
    scheme: String,
    host: String,
    path: String,
    query: Vec<(String, String)>,
}

impl BlobUrl {
    /// Parse a blob URL of the shape `scheme://host/path?query`.
    pub fn parse(input: &str) -> Result<BlobUrl, UrlError> {
        let (scheme, rest) = input
            .split_once("://")
            .ok_or(UrlError { reason: "missing scheme" })?;
        if scheme.is_empty() {
            return Err(UrlError { reason: "missing scheme" });
        }

        // the query starts at the first `?` even when no path precedes it
        let (location, query_str) = match rest.split_once('?') {
            Some((location, query)) => (location, query),
            None => (rest, ""),
        };

        let (authority, path) = match location.split_once('/') {
            Some((authority, path)) => (authority, path),
            None => (location, ""),
        };
        if authority.is_empty() {
            return Err(UrlError { reason: "missing host" });
        }

        let mut query = Vec::new();
        for pair in query_str.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            query.push((name.to_owned(), value.to_owned()));
        }

        Ok(Self {
            scheme: scheme.to_owned(),
            host: authority.to_owned(),
            path: format!("/{path}"),
            query,
        })
    }

    /// Returns the URL scheme, e.g: `"https"`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the host, e.g: `"account.blob.example.net"`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the path, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters in order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the first value of the named query parameter.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set the named query parameter, replacing any existing occurrence.
    pub fn set_query(&mut self, name: &str, value: &str) {
        self.remove_query(name);
        self.query.push((name.to_owned(), value.to_owned()));
    }

    /// Remove every occurrence of the named query parameter.
    pub fn remove_query(&mut self, name: &str) {
        self.query.retain(|(n, _)| n != name);
    }
}

impl std::fmt::Display for BlobUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)?;
        for (i, (name, value)) in self.query.iter().enumerate() {
            f.write_str(if i == 0 { "?" } else { "&" })?;
            if value.is_empty() {
                write!(f, "{name}")?;
            } else {
                write!(f, "{name}={value}")?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for BlobUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BlobUrl({self})")
    }
}

/// Failure parsing a [`BlobUrl`].
#[derive(thiserror::Error, Debug)]
#[error("invalid blob url: {reason}")]
pub struct UrlError {
    reason: &'static str,
}
