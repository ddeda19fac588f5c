//! `brave_search_and_fetch` MCP tool
//!
//! Searches the web with Brave Search and fetches visible text from the top
//! results in one call. Progress goes to whatever reporter the caller supplies.

use super::types::SearchAndFetchArgs;
use crate::orchestrator::{ProgressReporter, SearchAndFetch};

pub const BRAVE_SEARCH_AND_FETCH: &str = "brave_search_and_fetch";

#[derive(Debug, Clone)]
pub struct SearchAndFetchTool {
    pipeline: SearchAndFetch,
}

impl SearchAndFetchTool {
    #[must_use]
    pub fn new(pipeline: SearchAndFetch) -> Self {
        Self { pipeline }
    }

    pub async fn execute(&self, args: SearchAndFetchArgs, progress: &dyn ProgressReporter) -> String {
        self.pipeline
            .run_with_progress(&args.query, args.max_results, progress)
            .await
    }
}
