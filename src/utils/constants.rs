//! Shared constants for url-text-fetcher
//!
//! Default configuration values, fixed request headers, and the truncation
//! markers that appear in tool output.

/// Default whole-request timeout: 10 seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default content budget: 5000 characters of extracted text per tool result
pub const DEFAULT_CONTENT_LENGTH_LIMIT: usize = 5000;

/// Default response cap: 10 MiB of raw body bytes
pub const DEFAULT_MAX_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

/// Default Brave Search rate: 1 request per second (free tier)
pub const DEFAULT_BRAVE_RATE_LIMIT_RPS: u32 = 1;

/// Highest Brave Search plan rate
pub const MAX_BRAVE_RATE_LIMIT_RPS: u32 = 50;

/// Descriptive user agent sent with every outbound request
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; MCP-URL-Fetcher/1.0)";

/// Browser-like `Accept` header for page fetches
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Maximum length of a sanitized search query, in characters
pub const MAX_QUERY_LENGTH: usize = 500;

/// Maximum number of links shown by `fetch_page_links`
pub const MAX_LINKS_SHOWN: usize = 100;

/// Maximum number of redirects followed (each hop is re-validated)
pub const MAX_REDIRECTS: usize = 5;

/// Appended to fetched page text cut at the content limit
pub const CONTENT_TRUNCATED_MARKER: &str = "... [Content truncated]";

/// Appended to a single search result's content cut at its share of the budget
pub const RESULT_TRUNCATED_MARKER: &str = "... [Truncated]";

/// Appended to a whole search report cut at the content limit
pub const RESPONSE_TRUNCATED_MARKER: &str = "... [Response truncated]";
