//! MCP argument types for the fetcher tools
//!
//! Field doc comments become the JSON schema descriptions shown to clients.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::orchestrator::DEFAULT_MAX_RESULTS;

/// Arguments for `fetch_url_text`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FetchUrlArgs {
    /// The URL to fetch text from
    pub url: String,
}

/// Arguments for `fetch_page_links`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FetchPageLinksArgs {
    /// The URL to fetch links from
    pub url: String,
}

/// Arguments for `brave_search_and_fetch`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchAndFetchArgs {
    /// The search query
    pub query: String,

    /// Maximum number of results to fetch content for (1-10, default 3)
    #[serde(default = "default_max_results")]
    #[schemars(range(min = 1, max = 10))]
    pub max_results: i64,
}

fn default_max_results() -> i64 {
    DEFAULT_MAX_RESULTS
}
