//! MCP server wiring the tools to the rmcp tool router

use rmcp::handler::server::{ServerHandler, tool::ToolRouter, wrapper::Parameters};
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, tool, tool_handler, tool_router};
use std::sync::Arc;

use super::fetch::FetchUrlTextTool;
use super::links::FetchPageLinksTool;
use super::progress::ClientProgress;
use super::server_info::ServerInfoTool;
use super::tool::Tool;
use super::types::{FetchPageLinksArgs, FetchUrlArgs, SearchAndFetchArgs};
use super::web_search::SearchAndFetchTool;
use crate::config::ServerConfig;
use crate::fetcher::ContentFetcher;
use crate::orchestrator::SearchAndFetch;
use crate::url_guard::UrlValidator;
use crate::web_search::BraveSearchClient;

const SERVER_NAME: &str = "url-text-fetcher";

const INSTRUCTIONS: &str = "Fetches visible text and links from web pages and runs Brave web \
searches. Only public http/https URLs are fetched; responses are size- and time-bounded.";

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[derive(Clone)]
pub struct UrlFetcherServer {
    fetch_text: FetchUrlTextTool,
    fetch_links: FetchPageLinksTool,
    search_and_fetch: SearchAndFetchTool,
    server_info: ServerInfoTool,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl UrlFetcherServer {
    /// Build the server. All tools share one fetcher, and the search client
    /// carries the process-wide rate limiter.
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, validator: UrlValidator, search: BraveSearchClient) -> Self {
        let fetcher = Arc::new(ContentFetcher::new(&config, validator));
        let pipeline = SearchAndFetch::new(&config, Arc::new(search), Arc::clone(&fetcher));

        Self {
            fetch_text: FetchUrlTextTool::new(Arc::clone(&fetcher)),
            fetch_links: FetchPageLinksTool::new(fetcher),
            search_and_fetch: SearchAndFetchTool::new(pipeline),
            server_info: ServerInfoTool::new(config),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Fetch a web page and return its visible text content (scripts and styles removed, truncated to the configured limit)")]
    async fn fetch_url_text(
        &self,
        Parameters(args): Parameters<FetchUrlArgs>,
    ) -> Result<CallToolResult, McpError> {
        text_result(self.fetch_text.execute(args).await)
    }

    #[tool(description = "Fetch a web page and list the links on it (absolute and root-relative hrefs, at most 100 shown)")]
    async fn fetch_page_links(
        &self,
        Parameters(args): Parameters<FetchPageLinksArgs>,
    ) -> Result<CallToolResult, McpError> {
        text_result(self.fetch_links.execute(args).await)
    }

    #[tool(description = "Search the web with Brave Search and fetch visible text from the top results")]
    async fn brave_search_and_fetch(
        &self,
        Parameters(args): Parameters<SearchAndFetchArgs>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let progress = ClientProgress::new(&context);
        text_result(self.search_and_fetch.execute(args, &progress).await)
    }

    #[tool(description = "Show server version, available tools, and the active limits")]
    async fn get_server_info(&self) -> Result<CallToolResult, McpError> {
        text_result(self.server_info.execute(()).await)
    }
}

#[tool_handler]
impl ServerHandler for UrlFetcherServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_logging()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
