//! Programmatic builder for `ServerConfig`
//!
//! Applies the same normalization as environment loading: the rate limit is
//! clamped and zero-valued limits fall back to defaults.

use std::time::Duration;
use tracing::warn;

use super::types::ServerConfig;
use crate::utils::constants::MAX_BRAVE_RATE_LIMIT_RPS;

#[derive(Debug, Default, Clone)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfig {
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

impl ServerConfigBuilder {
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        if !timeout.is_zero() {
            self.config.request_timeout = timeout;
        }
        self
    }

    #[must_use]
    pub fn content_length_limit(mut self, chars: usize) -> Self {
        if chars > 0 {
            self.config.content_length_limit = chars;
        }
        self
    }

    #[must_use]
    pub fn max_response_size(mut self, bytes: u64) -> Self {
        if bytes > 0 {
            self.config.max_response_size = bytes;
        }
        self
    }

    /// Blank keys are treated as absent
    #[must_use]
    pub fn brave_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        let key = key.trim();
        self.config.brave_api_key = (!key.is_empty()).then(|| key.to_string());
        self
    }

    #[must_use]
    pub fn brave_rate_limit_rps(mut self, rps: i64) -> Self {
        self.config.brave_rate_limit_rps = clamp_rate_limit(rps);
        self
    }

    #[must_use]
    pub fn build(self) -> ServerConfig {
        self.config
    }
}

/// Clamp a requested rate into `[1, MAX_BRAVE_RATE_LIMIT_RPS]`, warning when
/// the value had to change
pub(crate) fn clamp_rate_limit(rps: i64) -> u32 {
    let max = i64::from(MAX_BRAVE_RATE_LIMIT_RPS);
    if rps < 1 {
        warn!("Invalid BRAVE_RATE_LIMIT_RPS ({rps}), using default: 1");
        1
    } else if rps > max {
        warn!("Rate limit ({rps}) exceeds maximum tier ({max}), capping at {max}");
        MAX_BRAVE_RATE_LIMIT_RPS
    } else {
        // In range, so the conversion cannot fail
        u32::try_from(rps).unwrap_or(MAX_BRAVE_RATE_LIMIT_RPS)
    }
}
