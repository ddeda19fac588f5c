//! Brave Search API client
//!
//! Checks for an API key, waits on the shared [`RateLimiter`], sends exactly one
//! request, and maps the outcome onto [`SearchError`].

use reqwest::Client;
use std::sync::Arc;
use tracing::{error, info};
use url::Url;

use super::errors::SearchError;
use super::rate_limiter::RateLimiter;
use super::types::{
    BRAVE_SEARCH_URL, BraveResponse, SAFE_SEARCH, SEARCH_COUNTRY, SEARCH_LANG, SUBSCRIPTION_TOKEN_HEADER,
    SearchResult,
};
use crate::config::ServerConfig;
use crate::utils::constants::USER_AGENT;

#[derive(Debug, Clone)]
pub struct BraveSearchClient {
    http: Client,
    api_key: Option<String>,
    endpoint: Url,
    limiter: Arc<RateLimiter>,
}

impl BraveSearchClient {
    /// Create a client using the configured key and timeout.
    ///
    /// A missing key is not an error here; it is reported by [`Self::search`].
    pub fn new(config: &ServerConfig, limiter: Arc<RateLimiter>) -> Result<Self, SearchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SearchError::Unexpected(format!("failed to build HTTP client: {e}")))?;

        let endpoint = Url::parse(BRAVE_SEARCH_URL)
            .map_err(|e| SearchError::Unexpected(format!("invalid search endpoint: {e}")))?;

        Ok(Self {
            http,
            api_key: config.brave_api_key().map(str::to_string),
            endpoint,
            limiter,
        })
    }

    /// Point the client at a different endpoint (e.g. a mock server)
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Run one web search, returning results in upstream order
    pub async fn search(&self, query: &str, count: u32) -> Result<Vec<SearchResult>, SearchError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("Brave Search API key not configured");
            return Err(SearchError::MissingApiKey);
        };

        self.limiter.throttle().await;

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("count", &count.to_string())
            .append_pair("search_lang", SEARCH_LANG)
            .append_pair("country", SEARCH_COUNTRY)
            .append_pair("safesearch", SAFE_SEARCH);

        info!("SEARCH_REQUEST: Making Brave Search for '{query}' (count={count})");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(SUBSCRIPTION_TOKEN_HEADER, api_key)
            .send()
            .await
            .map_err(|e| {
                error!("Network error during search: {e}");
                SearchError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Brave Search API error: {} - {body}", status.as_u16());
            return Err(SearchError::from_status(status));
        }

        let parsed: BraveResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                error!("Unexpected error in brave search: malformed response: {e}");
                SearchError::Unexpected(e.to_string())
            } else {
                error!("Network error reading search response: {e}");
                SearchError::Network(e)
            }
        })?;

        let results = parsed.into_results();
        info!("SEARCH_SUCCESS: Found {} results for '{query}'", results.len());
        Ok(results)
    }
}
