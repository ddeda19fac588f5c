//! Error taxonomy for the search client
//!
//! Upstream statuses collapse onto a handful of fixed messages; response bodies
//! from the API are logged and never surfaced.

use reqwest::StatusCode;
use thiserror::Error;

use crate::errors::ErrorKind;

#[derive(Debug, Error)]
pub enum SearchError {
    /// No `BRAVE_API_KEY` configured; raised before any network access
    #[error("BRAVE_API_KEY environment variable is required")]
    MissingApiKey,

    /// HTTP 422
    #[error("Search request was rejected - please check your query")]
    Rejected,

    /// HTTP 429
    #[error("Rate limit exceeded - please wait before making another request")]
    RateLimited,

    /// Any other non-2xx status
    #[error("Search service temporarily unavailable")]
    Unavailable(StatusCode),

    #[error("Network error occurred during search")]
    Network(#[source] reqwest::Error),

    #[error("An unexpected error occurred during search")]
    Unexpected(String),
}

impl SearchError {
    /// Map an unsuccessful upstream status onto the taxonomy
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNPROCESSABLE_ENTITY => SearchError::Rejected,
            StatusCode::TOO_MANY_REQUESTS => SearchError::RateLimited,
            other => SearchError::Unavailable(other),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::MissingApiKey | SearchError::Unexpected(_) => ErrorKind::Unexpected,
            SearchError::Rejected | SearchError::RateLimited | SearchError::Unavailable(_) => {
                ErrorKind::UpstreamRejected
            }
            SearchError::Network(_) => ErrorKind::TransportFailure,
        }
    }

    /// Whether the failure is a local configuration problem rather than an
    /// upstream one
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, SearchError::MissingApiKey)
    }
}
