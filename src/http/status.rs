use std::num::NonZeroU16;

/// HTTP [Status Code][rfc].
///
/// A client parses codes it did not mint, so any value in `100..=599` is
/// representable; constants cover the codes the storage surface meets. The
/// wire reason phrase lives on the [`Response`][super::Response], while
/// [`canonical_reason`][StatusCode::canonical_reason] gives the registered
/// text for known codes.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(NonZeroU16);

impl Default for StatusCode {
    fn default() -> Self {
        Self::OK
    }
}

impl StatusCode {
    /// Create [`StatusCode`] from a wire value, `100..=599`.
    pub const fn from_u16(code: u16) -> Option<StatusCode> {
        match code {
            100..=599 => match NonZeroU16::new(code) {
                Some(code) => Some(Self(code)),
                None => None,
            },
            _ => None,
        }
    }

    /// Returns status code value, e.g: `200`.
    pub const fn as_u16(&self) -> u16 {
        self.0.get()
    }

    /// `100..=199`.
    pub const fn is_informational(&self) -> bool {
        matches!(self.0.get(), 100..=199)
    }

    /// `200..=299`.
    pub const fn is_success(&self) -> bool {
        matches!(self.0.get(), 200..=299)
    }

    /// `300..=399`.
    pub const fn is_redirection(&self) -> bool {
        matches!(self.0.get(), 300..=399)
    }

    /// `400..=499`.
    pub const fn is_client_error(&self) -> bool {
        matches!(self.0.get(), 400..=499)
    }

    /// `500..=599`.
    pub const fn is_server_error(&self) -> bool {
        matches!(self.0.get(), 500..=599)
    }
}

macro_rules! status_codes {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            /// Returns the registered reason phrase for known codes,
            /// e.g: `"OK"`.
            pub const fn canonical_reason(&self) -> Option<&'static str> {
                match self.0.get() {
                    $(
                        $int => Some($msg),
                    )*
                    _ => None,
                }
            }
        }

        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self(NonZeroU16::new($int).unwrap());
            )*
        }
    };
}

status_codes! {
    /// `200`. The request succeeded.
    200 OK "OK";
    /// `201`. The request succeeded, and a new resource was created as a result.
    201 CREATED "Created";
    /// `202`. The request has been accepted for processing, but the processing
    /// has not been completed.
    202 ACCEPTED "Accepted";
    /// `204`. There is no content to send for this request, but the headers are
    /// useful.
    204 NO_CONTENT "No Content";
    /// `206`. The request succeeded for a range of the resource.
    206 PARTIAL_CONTENT "Partial Content";
    /// `304`. The resource has not been modified since the given validators.
    304 NOT_MODIFIED "Not Modified";
    /// `400`. The server cannot or will not process the request due to
    /// something that is perceived to be a client error.
    400 BAD_REQUEST "Bad Request";
    /// `403`. The client's identity is known to the server, but the client
    /// does not have access rights to the content.
    403 FORBIDDEN "Forbidden";
    /// `404`. The server cannot find the requested resource.
    404 NOT_FOUND "Not Found";
    /// `409`. The request conflicts with the current state of the resource.
    409 CONFLICT "Conflict";
    /// `412`. A precondition given in the request headers evaluated to false.
    412 PRECONDITION_FAILED "Precondition Failed";
    /// `416`. The requested range is outside the size of the resource.
    416 RANGE_NOT_SATISFIABLE "Range Not Satisfiable";
    /// `500`. The server has encountered a situation it does not know how to
    /// handle.
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    /// `503`. The server is not ready to handle the request.
    503 SERVICE_UNAVAILABLE "Service Unavailable";
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.get())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.canonical_reason() {
            Some(reason) => write!(f, "{} {}", self.0.get(), reason),
            None => write!(f, "{}", self.0.get()),
        }
    }
}
