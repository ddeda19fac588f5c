//! Progress events emitted while a search-and-fetch run is in flight
//!
//! The pipeline knows nothing about the transport; the MCP layer turns these
//! events into progress and logging notifications for the calling client.

use futures::future::BoxFuture;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The sanitized query is about to be sent upstream
    Started { query: String },
    /// Result `current` of `total` is about to be fetched (1-based)
    Fetching { current: u32, total: u32 },
    /// The report was assembled from `fetched` results
    Completed { fetched: u32 },
    /// The run ended with an error message for the caller
    Failed { message: String },
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: SearchEvent) -> BoxFuture<'_, ()>;
}

/// Reporter that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _event: SearchEvent) -> BoxFuture<'_, ()> {
        Box::pin(async {})
    }
}
