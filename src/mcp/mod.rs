//! MCP tools for fetching page text, listing links, and searching the web
//!
//! ## Tools
//!
//! - `fetch_url_text`: visible text of one page, bounded by the content limit
//! - `fetch_page_links`: links on one page, first 100 shown
//! - `brave_search_and_fetch`: Brave search plus text of the top results, with
//!   progress and logging notifications sent to the client while it runs
//! - `get_server_info`: version, tools and active limits
//!
//! Tool handlers never return protocol errors for user-facing failures. Every
//! outcome is a text block, with failures rendered as `Error: ...`.

pub mod fetch;
pub mod links;
pub mod progress;
pub mod server;
pub mod server_info;
pub mod tool;
pub mod types;
pub mod web_search;

pub use fetch::FetchUrlTextTool;
pub use links::FetchPageLinksTool;
pub use progress::ClientProgress;
pub use server::UrlFetcherServer;
pub use server_info::ServerInfoTool;
pub use tool::Tool;
pub use types::{FetchPageLinksArgs, FetchUrlArgs, SearchAndFetchArgs};
pub use web_search::SearchAndFetchTool;
