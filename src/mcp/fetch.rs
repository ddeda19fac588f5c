//! `fetch_url_text` MCP tool - visible text of a single page

use std::sync::Arc;
use tracing::info;

use super::tool::Tool;
use super::types::FetchUrlArgs;
use crate::fetcher::{ContentFetcher, FetchError};
use crate::utils::sanitize::sanitize_url;

pub const FETCH_URL_TEXT: &str = "fetch_url_text";

#[derive(Debug, Clone)]
pub struct FetchUrlTextTool {
    fetcher: Arc<ContentFetcher>,
}

impl FetchUrlTextTool {
    #[must_use]
    pub fn new(fetcher: Arc<ContentFetcher>) -> Self {
        Self { fetcher }
    }
}

impl Tool for FetchUrlTextTool {
    type Args = FetchUrlArgs;

    async fn execute(&self, args: Self::Args) -> String {
        let url = sanitize_url(&args.url);
        if url.is_empty() {
            return FetchError::InvalidUrl.to_string();
        }

        info!("Fetching URL text: {url}");
        let content = self.fetcher.fetch_url_content(&url).await;
        format!("Text content from {url}:\n\n{content}")
    }
}
