//! Accessor methods for `ServerConfig`

use std::time::Duration;

use super::types::ServerConfig;

impl ServerConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub fn content_length_limit(&self) -> usize {
        self.content_length_limit
    }

    #[must_use]
    pub fn max_response_size(&self) -> u64 {
        self.max_response_size
    }

    #[must_use]
    pub fn brave_api_key(&self) -> Option<&str> {
        self.brave_api_key.as_deref()
    }

    #[must_use]
    pub fn has_brave_api_key(&self) -> bool {
        self.brave_api_key.is_some()
    }

    #[must_use]
    pub fn brave_rate_limit_rps(&self) -> u32 {
        self.brave_rate_limit_rps
    }

    /// Minimum spacing between two Brave Search requests
    #[must_use]
    pub fn min_request_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.brave_rate_limit_rps))
    }
}
