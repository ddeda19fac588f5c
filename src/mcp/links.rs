//! `fetch_page_links` MCP tool - links found on a single page

use std::sync::Arc;
use tracing::info;

use super::tool::Tool;
use super::types::FetchPageLinksArgs;
use crate::fetcher::{ContentFetcher, FetchError};
use crate::utils::sanitize::sanitize_url;

pub const FETCH_PAGE_LINKS: &str = "fetch_page_links";

#[derive(Debug, Clone)]
pub struct FetchPageLinksTool {
    fetcher: Arc<ContentFetcher>,
}

impl FetchPageLinksTool {
    #[must_use]
    pub fn new(fetcher: Arc<ContentFetcher>) -> Self {
        Self { fetcher }
    }
}

impl Tool for FetchPageLinksTool {
    type Args = FetchPageLinksArgs;

    async fn execute(&self, args: Self::Args) -> String {
        let url = sanitize_url(&args.url);
        if url.is_empty() {
            return FetchError::InvalidUrl.to_string();
        }

        info!("Fetching page links: {url}");
        match self.fetcher.fetch_page_links(&url).await {
            Ok(links) => links.render(),
            Err(e) => e.to_string(),
        }
    }
}
