//! Environment-based configuration loading
//!
//! Keys: `BRAVE_API_KEY`, `BRAVE_RATE_LIMIT_RPS`, `REQUEST_TIMEOUT` (seconds),
//! `CONTENT_LENGTH_LIMIT` (characters), `MAX_RESPONSE_SIZE` (bytes). Invalid
//! numbers fall back to defaults with a warning; loading never fails.

use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use super::builder::clamp_rate_limit;
use super::types::ServerConfig;
use crate::utils::constants::{
    DEFAULT_BRAVE_RATE_LIMIT_RPS, DEFAULT_CONTENT_LENGTH_LIMIT, DEFAULT_MAX_RESPONSE_SIZE,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub const BRAVE_API_KEY: &str = "BRAVE_API_KEY";
pub const BRAVE_RATE_LIMIT_RPS: &str = "BRAVE_RATE_LIMIT_RPS";
pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
pub const CONTENT_LENGTH_LIMIT: &str = "CONTENT_LENGTH_LIMIT";
pub const MAX_RESPONSE_SIZE: &str = "MAX_RESPONSE_SIZE";

impl ServerConfig {
    /// Read configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let request_timeout_secs: u64 =
            parse_positive(&lookup, REQUEST_TIMEOUT, DEFAULT_REQUEST_TIMEOUT_SECS);
        let content_length_limit: usize =
            parse_positive(&lookup, CONTENT_LENGTH_LIMIT, DEFAULT_CONTENT_LENGTH_LIMIT);
        let max_response_size: u64 =
            parse_positive(&lookup, MAX_RESPONSE_SIZE, DEFAULT_MAX_RESPONSE_SIZE);
        let rps: i64 = parse_or_default(
            &lookup,
            BRAVE_RATE_LIMIT_RPS,
            i64::from(DEFAULT_BRAVE_RATE_LIMIT_RPS),
        );

        let brave_api_key = lookup(BRAVE_API_KEY)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            request_timeout: Duration::from_secs(request_timeout_secs),
            content_length_limit,
            max_response_size,
            brave_api_key,
            brave_rate_limit_rps: clamp_rate_limit(rps),
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {key} value, using default: {default}");
            default
        }),
    }
}

fn parse_positive<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display + PartialEq + Default,
{
    let value = parse_or_default(lookup, key, default);
    if value == T::default() {
        warn!("Invalid {key} value (must be positive), using default: {default}");
        return default;
    }
    value
}
