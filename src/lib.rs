//! URL text fetcher MCP server
//!
//! Fetches visible page text and links over SSRF-checked, size-bounded HTTP
//! requests, and combines rate-limited Brave web searches with page fetching.

pub mod config;
pub mod errors;
pub mod fetcher;
pub mod mcp;
pub mod orchestrator;
pub mod url_guard;
pub mod utils;
pub mod web_search;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use errors::ErrorKind;
pub use fetcher::{ContentFetcher, FetchError, FetchResult, LinkListResult};
pub use mcp::UrlFetcherServer;
pub use orchestrator::SearchAndFetch;
pub use url_guard::{AddressPolicy, HostResolver, SystemResolver, UrlRejection, UrlValidator};
pub use web_search::{BraveSearchClient, RateLimiter, SearchError, SearchResult};
