//! Core configuration type for the server
//!
//! `ServerConfig` is read once at startup and never mutated afterwards.

use std::fmt;
use std::time::Duration;

use crate::utils::constants::{
    DEFAULT_BRAVE_RATE_LIMIT_RPS, DEFAULT_CONTENT_LENGTH_LIMIT, DEFAULT_MAX_RESPONSE_SIZE,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Immutable runtime configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Whole-request timeout for page fetches and search calls
    pub(crate) request_timeout: Duration,
    /// Character budget for tool output
    pub(crate) content_length_limit: usize,
    /// Byte cap on any single response body
    pub(crate) max_response_size: u64,
    /// Brave Search subscription token; search is unavailable without it
    pub(crate) brave_api_key: Option<String>,
    /// Always within `[1, MAX_BRAVE_RATE_LIMIT_RPS]`
    pub(crate) brave_rate_limit_rps: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            content_length_limit: DEFAULT_CONTENT_LENGTH_LIMIT,
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
            brave_api_key: None,
            brave_rate_limit_rps: DEFAULT_BRAVE_RATE_LIMIT_RPS,
        }
    }
}

// The API key must never reach a log line
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("request_timeout", &self.request_timeout)
            .field("content_length_limit", &self.content_length_limit)
            .field("max_response_size", &self.max_response_size)
            .field(
                "brave_api_key",
                &self.brave_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("brave_rate_limit_rps", &self.brave_rate_limit_rps)
            .finish()
    }
}
