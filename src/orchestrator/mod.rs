//! Search-and-fetch orchestration
//!
//! Runs one Brave search, then fetches page text for the top results in order
//! until `max_results` results with a URL have been processed. A result counts
//! once its fetch was attempted, whether or not the fetch succeeded; results
//! without a URL are skipped without counting. That keeps the work per call
//! bounded by `max_results` fetches.
//!
//! Each result's content gets `content_length_limit / max_results` characters and
//! the whole report is capped at `content_length_limit` characters.

mod progress;
mod report;

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::ServerConfig;
use crate::fetcher::ContentFetcher;
use crate::utils::constants::RESULT_TRUNCATED_MARKER;
use crate::utils::sanitize::sanitize_query;
use crate::utils::string_utils::truncate_with_marker;
use crate::web_search::{BraveSearchClient, SearchError};
use report::Report;

pub use progress::{NoProgress, ProgressReporter, SearchEvent};

pub const DEFAULT_MAX_RESULTS: i64 = 3;
pub const MIN_RESULTS: i64 = 1;
pub const MAX_RESULTS: i64 = 10;

/// Over-fetch factor compensating for results without a URL
const OVERFETCH_FACTOR: u32 = 2;

#[derive(Debug, Clone)]
pub struct SearchAndFetch {
    search: Arc<BraveSearchClient>,
    fetcher: Arc<ContentFetcher>,
    content_length_limit: usize,
}

impl SearchAndFetch {
    #[must_use]
    pub fn new(
        config: &ServerConfig,
        search: Arc<BraveSearchClient>,
        fetcher: Arc<ContentFetcher>,
    ) -> Self {
        Self {
            search,
            fetcher,
            content_length_limit: config.content_length_limit(),
        }
    }

    /// Search, fetch the top results, and return a single text report.
    ///
    /// Never fails: every problem is reported as an `Error: ...` string.
    pub async fn run(&self, query: &str, max_results: i64) -> String {
        self.run_with_progress(query, max_results, &NoProgress).await
    }

    /// Same as [`Self::run`], reporting each step to `progress`
    pub async fn run_with_progress(
        &self,
        query: &str,
        max_results: i64,
        progress: &dyn ProgressReporter,
    ) -> String {
        let query = sanitize_query(query);
        if query.is_empty() {
            return "Error: Invalid or empty search query".to_string();
        }

        let max_results = clamp_max_results(max_results);
        info!("Performing Brave search: {query} (max_results={max_results})");
        progress
            .report(SearchEvent::Started {
                query: query.clone(),
            })
            .await;

        let pipeline =
            AssertUnwindSafe(self.build_report(&query, max_results, progress)).catch_unwind();
        let message = match pipeline.await {
            Ok(Ok(report)) => return report,
            Ok(Err(e)) => {
                error!("Search operation failed: {e:?}");
                format!("Error: {e}")
            }
            Err(_) => {
                error!("Search operation failed: pipeline panicked for query '{query}'");
                "Error: Search operation failed".to_string()
            }
        };

        progress
            .report(SearchEvent::Failed {
                message: message.clone(),
            })
            .await;
        message
    }

    async fn build_report(
        &self,
        query: &str,
        max_results: u32,
        progress: &dyn ProgressReporter,
    ) -> Result<String, SearchError> {
        let results = self
            .search
            .search(query, max_results * OVERFETCH_FACTOR)
            .await?;

        if results.is_empty() {
            return Ok(format!("No search results found for query: {query}"));
        }

        let per_result_budget = self.content_length_limit / max_results as usize;
        let mut report = Report::new(query);

        for result in &results {
            if report.entries() >= max_results as usize {
                break;
            }

            if result.url.trim().is_empty() {
                debug!("Skipping search result without URL: {}", result.title);
                continue;
            }

            progress
                .report(SearchEvent::Fetching {
                    current: report.entries() as u32 + 1,
                    total: max_results,
                })
                .await;

            let content = self.fetcher.fetch_url_content(&result.url).await;
            let (content, _) = truncate_with_marker(content, per_result_budget, RESULT_TRUNCATED_MARKER);
            report.push_entry(&result.title, &result.url, &result.description, &content);
        }

        let fetched = report.entries() as u32;
        info!("Search completed successfully: {fetched} results fetched");
        progress.report(SearchEvent::Completed { fetched }).await;
        Ok(report.finish(self.content_length_limit))
    }
}

/// Clamp a caller-supplied result count into `[MIN_RESULTS, MAX_RESULTS]`
#[must_use]
pub fn clamp_max_results(requested: i64) -> u32 {
    // Clamped range fits in u32
    u32::try_from(requested.clamp(MIN_RESULTS, MAX_RESULTS)).unwrap_or(1)
}
