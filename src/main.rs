// URL Text Fetcher MCP server
//
// Serves the fetch and search tools over stdio. Logs go to stderr so they never
// interleave with protocol messages on stdout.

use anyhow::{Context, Result};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use url_text_fetcher::{BraveSearchClient, RateLimiter, ServerConfig, UrlFetcherServer, UrlValidator};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Arc::new(ServerConfig::from_env());
    info!(
        "Brave Search rate limit: {} request(s)/second (interval: {:.3}s)",
        config.brave_rate_limit_rps(),
        config.min_request_interval().as_secs_f64()
    );
    if !config.has_brave_api_key() {
        info!("BRAVE_API_KEY not set; brave_search_and_fetch will report an error");
    }

    let limiter = Arc::new(RateLimiter::from_rps(config.brave_rate_limit_rps()));
    let search = BraveSearchClient::new(&config, limiter).context("failed to create search client")?;
    let server = UrlFetcherServer::new(config, UrlValidator::default(), search);

    info!("Starting url-text-fetcher MCP server on stdio");
    let running = server.serve(stdio()).await.context("failed to start MCP server")?;
    running.waiting().await?;
    Ok(())
}
