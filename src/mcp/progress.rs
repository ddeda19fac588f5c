//! Client-visible progress for `brave_search_and_fetch`
//!
//! Progress notifications are only sent when the request carried a progress
//! token. Logging notifications are always sent. Delivery failures are logged
//! and otherwise ignored; the tool result does not depend on them.

use futures::future::BoxFuture;
use rmcp::model::{
    LoggingLevel, LoggingMessageNotificationParam, ProgressNotificationParam, ProgressToken,
};
use rmcp::service::RequestContext;
use rmcp::{Peer, RoleServer};
use serde_json::Value;
use tracing::debug;

use crate::orchestrator::{ProgressReporter, SearchEvent};

const LOGGER: &str = "brave_search_and_fetch";

/// Forwards search events to the MCP client that issued the request
#[derive(Clone)]
pub struct ClientProgress {
    peer: Peer<RoleServer>,
    token: Option<ProgressToken>,
}

impl ClientProgress {
    #[must_use]
    pub fn new(context: &RequestContext<RoleServer>) -> Self {
        Self {
            peer: context.peer.clone(),
            token: context.meta.get_progress_token(),
        }
    }
}

impl ProgressReporter for ClientProgress {
    fn report(&self, event: SearchEvent) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            if let Some(param) = progress_param(self.token.as_ref(), &event) {
                if let Err(e) = self.peer.notify_progress(param).await {
                    debug!("Failed to send progress notification: {e}");
                }
            }

            if let Err(e) = self.peer.notify_logging_message(logging_param(&event)).await {
                debug!("Failed to send logging notification: {e}");
            }
        })
    }
}

/// Progress notification for `event`, as a fraction of 1.0
pub(crate) fn progress_param(
    token: Option<&ProgressToken>,
    event: &SearchEvent,
) -> Option<ProgressNotificationParam> {
    let SearchEvent::Fetching { current, total } = event else {
        return None;
    };

    Some(ProgressNotificationParam {
        progress_token: token?.clone(),
        progress: f64::from(*current) / f64::from((*total).max(1)),
        total: Some(1.0),
        message: Some(format!("Fetching content from result {current} of {total}")),
    })
}

pub(crate) fn logging_param(event: &SearchEvent) -> LoggingMessageNotificationParam {
    let (level, text) = match event {
        SearchEvent::Started { query } => {
            (LoggingLevel::Info, format!("Starting search for: {query}"))
        }
        SearchEvent::Fetching { current, total } => (
            LoggingLevel::Debug,
            format!("Fetching content from result {current} of {total}"),
        ),
        SearchEvent::Completed { fetched } => (
            LoggingLevel::Info,
            format!("Search completed successfully: {fetched} results fetched"),
        ),
        SearchEvent::Failed { message } => (
            LoggingLevel::Error,
            format!("Search operation failed: {message}"),
        ),
    };

    LoggingMessageNotificationParam {
        level,
        logger: Some(LOGGER.to_string()),
        data: Value::String(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::NumberOrString;

    fn token() -> ProgressToken {
        ProgressToken(NumberOrString::String("search-1".into()))
    }

    #[test]
    fn test_fetching_event_becomes_fractional_progress() {
        let param = progress_param(Some(&token()), &SearchEvent::Fetching { current: 2, total: 4 })
            .expect("fetching events carry progress");
        assert_eq!(param.progress, 0.5);
        assert_eq!(param.total, Some(1.0));
        assert_eq!(param.message.as_deref(), Some("Fetching content from result 2 of 4"));
    }

    #[test]
    fn test_no_progress_without_token_or_for_other_events() {
        let fetching = SearchEvent::Fetching { current: 1, total: 3 };
        assert!(progress_param(None, &fetching).is_none());
        assert!(progress_param(Some(&token()), &SearchEvent::Completed { fetched: 3 }).is_none());
    }

    #[test]
    fn test_failures_are_logged_as_errors() {
        let param = logging_param(&SearchEvent::Failed {
            message: "Error: Search service temporarily unavailable".into(),
        });
        assert_eq!(param.level, LoggingLevel::Error);
        assert_eq!(param.logger.as_deref(), Some(LOGGER));
        assert_eq!(
            param.data,
            Value::String(
                "Search operation failed: Error: Search service temporarily unavailable".into()
            )
        );
    }

    #[test]
    fn test_start_is_logged_with_query() {
        let param = logging_param(&SearchEvent::Started { query: "dinosaurs".into() });
        assert_eq!(param.level, LoggingLevel::Info);
        assert_eq!(param.data, Value::String("Starting search for: dinosaurs".into()));
    }
}
