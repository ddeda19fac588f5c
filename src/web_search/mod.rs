//! Web search through the Brave Search API
//!
//! [`BraveSearchClient`] performs one throttled request per call and returns
//! `{title, url, description}` triples in relevance order. All clients built from
//! the same [`RateLimiter`] share one global request spacing.

mod client;
mod errors;
mod rate_limiter;
mod types;

// Re-export public types
pub use client::BraveSearchClient;
pub use errors::SearchError;
pub use rate_limiter::RateLimiter;
pub use types::{BRAVE_SEARCH_URL, SearchResult};
