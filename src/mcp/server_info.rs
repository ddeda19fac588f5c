//! `get_server_info` MCP tool - summary of the active configuration
//!
//! Reports whether an API key is present, never its value.

use std::fmt::Write as _;
use std::sync::Arc;

use super::fetch::FETCH_URL_TEXT;
use super::links::FETCH_PAGE_LINKS;
use super::tool::Tool;
use super::web_search::BRAVE_SEARCH_AND_FETCH;
use crate::config::ServerConfig;

pub const GET_SERVER_INFO: &str = "get_server_info";

#[derive(Debug, Clone)]
pub struct ServerInfoTool {
    config: Arc<ServerConfig>,
}

impl ServerInfoTool {
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self { config }
    }

    fn render(&self) -> String {
        let config = &self.config;
        let mut out = String::new();

        let _ = writeln!(out, "URL Text Fetcher MCP Server v{}", env!("CARGO_PKG_VERSION"));
        let _ = writeln!(
            out,
            "Tools: {FETCH_URL_TEXT}, {FETCH_PAGE_LINKS}, {BRAVE_SEARCH_AND_FETCH}, {GET_SERVER_INFO}"
        );
        out.push('\n');
        let _ = writeln!(out, "Configuration:");
        let _ = writeln!(out, "  Request timeout: {}s", config.request_timeout().as_secs());
        let _ = writeln!(
            out,
            "  Content length limit: {} characters",
            config.content_length_limit()
        );
        let _ = writeln!(out, "  Max response size: {} bytes", config.max_response_size());
        let _ = writeln!(
            out,
            "  Brave Search API key: {}",
            if config.has_brave_api_key() { "configured" } else { "not configured" }
        );
        let _ = writeln!(
            out,
            "  Brave Search rate limit: {} request(s)/second (interval: {:.3}s)",
            config.brave_rate_limit_rps(),
            config.min_request_interval().as_secs_f64()
        );
        out.push('\n');
        out.push_str(
            "Security: URLs must use http/https; private, loopback, link-local and \
             cloud metadata destinations are blocked; connections are pinned to the \
             validated address.",
        );
        out
    }
}

impl Tool for ServerInfoTool {
    type Args = ();

    async fn execute(&self, _args: Self::Args) -> String {
        self.render()
    }
}
