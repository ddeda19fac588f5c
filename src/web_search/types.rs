//! Data structures and constants for Brave web search

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Brave Search web endpoint
pub const BRAVE_SEARCH_URL: &str = "https://api.search.brave.com/res/v1/web/search";

/// Header carrying the Brave subscription token
pub const SUBSCRIPTION_TOKEN_HEADER: &str = "X-Subscription-Token";

/// Fixed locale and filtering parameters sent with every search
pub const SEARCH_LANG: &str = "en";
pub const SEARCH_COUNTRY: &str = "US";
pub const SAFE_SEARCH: &str = "moderate";

// =============================================================================
// Data Structures
// =============================================================================

/// A single search hit, in upstream relevance order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Subset of the Brave response that we read. Every level is optional so a
/// response without web results simply yields no hits.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct BraveResponse {
    #[serde(default)]
    pub web: Option<BraveWeb>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BraveWeb {
    #[serde(default)]
    pub results: Vec<BraveWebResult>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BraveWebResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<BraveWebResult> for SearchResult {
    fn from(raw: BraveWebResult) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
        }
    }
}

impl BraveResponse {
    pub(crate) fn into_results(self) -> Vec<SearchResult> {
        self.web
            .map(|web| web.results.into_iter().map(SearchResult::from).collect())
            .unwrap_or_default()
    }
}
