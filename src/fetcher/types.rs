//! Result and error types for page retrieval

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::errors::ErrorKind;
use crate::url_guard::UrlRejection;
use crate::utils::constants::MAX_LINKS_SHOWN;

/// Failure of a single page retrieval.
///
/// `Display` yields the fixed text shown to the caller. Wrapped sources are for
/// the log only.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error: Invalid URL format")]
    InvalidUrl,

    #[error("Error: URL not allowed for security reasons")]
    Blocked(#[source] UrlRejection),

    #[error("Error: Content too large ({declared} bytes, max {limit})")]
    DeclaredTooLarge { declared: u64, limit: u64 },

    #[error("Error: Content exceeded size limit ({limit} bytes)")]
    ExceededLimit { limit: u64 },

    #[error("Error: Unable to decode content as text")]
    Decode,

    #[error("Error: Unable to fetch URL content")]
    Transport(#[source] reqwest::Error),

    #[error("Error: Unable to fetch URL content")]
    Status(StatusCode),

    #[error("Error: Unable to fetch URL content")]
    TooManyRedirects,

    /// The whole retrieval, redirects and DNS included, ran past the timeout
    #[error("Error: Unable to fetch URL content")]
    TimedOut,

    #[error("Error: An unexpected error occurred while processing the URL")]
    Unexpected(String),
}

impl FetchError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::InvalidUrl => ErrorKind::InvalidInput,
            FetchError::Blocked(rejection) => rejection.kind(),
            FetchError::DeclaredTooLarge { .. } | FetchError::ExceededLimit { .. } => {
                ErrorKind::ResourceTooLarge
            }
            FetchError::Decode => ErrorKind::DecodeFailure,
            FetchError::Transport(_)
            | FetchError::Status(_)
            | FetchError::TooManyRedirects
            | FetchError::TimedOut => {
                ErrorKind::TransportFailure
            }
            FetchError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

/// Outcome of fetching a page's visible text.
///
/// Always carries displayable text: the page content on success, the fixed
/// error string otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchResult {
    pub source_url: String,
    pub text: String,
    pub truncated: bool,
    pub error_kind: Option<ErrorKind>,
}

impl FetchResult {
    #[must_use]
    pub fn success(source_url: impl Into<String>, text: String, truncated: bool) -> Self {
        Self {
            source_url: source_url.into(),
            text,
            truncated,
            error_kind: None,
        }
    }

    #[must_use]
    pub fn failure(source_url: impl Into<String>, error: &FetchError) -> Self {
        Self {
            source_url: source_url.into(),
            text: error.to_string(),
            truncated: false,
            error_kind: Some(error.kind()),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error_kind.is_some()
    }
}

/// Links discovered on a page, capped at `MAX_LINKS_SHOWN`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkListResult {
    pub source_url: String,
    pub links: Vec<String>,
    /// Number of qualifying links before the cap was applied
    pub total_count: usize,
}

impl LinkListResult {
    #[must_use]
    pub fn new(source_url: impl Into<String>, mut links: Vec<String>) -> Self {
        let total_count = links.len();
        links.truncate(MAX_LINKS_SHOWN);
        Self {
            source_url: source_url.into(),
            links,
            total_count,
        }
    }

    /// Text block returned by the `fetch_page_links` tool
    #[must_use]
    pub fn render(&self) -> String {
        let listing = self
            .links
            .iter()
            .map(|link| format!("- {link}"))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Links found on {} ({} total, showing first {}):\n\n{}",
            self.source_url, self.total_count, MAX_LINKS_SHOWN, listing
        )
    }
}
