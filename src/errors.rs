//! Closed error taxonomy shared by every tool
//!
//! Each internal error enum (`FetchError`, `SearchError`, `UrlRejection`) maps onto
//! one `ErrorKind`. Tool results only ever carry the fixed user-facing text of an
//! error; the underlying detail is written to the tracing log.

use serde::Serialize;
use std::fmt;

/// Category of a failed tool operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or empty URL or query after sanitization
    InvalidInput,
    /// URL failed the SSRF safety check
    SecurityBlocked,
    /// Declared or streamed body size exceeded the configured cap
    ResourceTooLarge,
    /// Body could not be interpreted as text
    DecodeFailure,
    /// Timeout, connection failure, or non-2xx status
    TransportFailure,
    /// Search API answered with an error status
    UpstreamRejected,
    /// Anything uncategorized
    Unexpected,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::SecurityBlocked => "security_blocked",
            ErrorKind::ResourceTooLarge => "resource_too_large",
            ErrorKind::DecodeFailure => "decode_failure",
            ErrorKind::TransportFailure => "transport_failure",
            ErrorKind::UpstreamRejected => "upstream_rejected",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
