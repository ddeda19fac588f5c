//! Shared helpers for the integration tests
//!
//! Tests never touch the public internet: hostnames ending in `.test` resolve
//! to loopback through [`StubResolver`], and the validator is built with
//! [`AddressPolicy::AllowLoopback`] so it accepts the local mockito server.

use futures::future::BoxFuture;
use mockito::Server;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use url::Url;
use url_text_fetcher::{
    AddressPolicy, BraveSearchClient, ContentFetcher, HostResolver, RateLimiter, ServerConfig,
    UrlValidator,
};

/// Resolves every `*.test` host to 127.0.0.1; everything else fails to resolve
#[derive(Debug, Default)]
pub struct StubResolver;

impl HostResolver for StubResolver {
    fn resolve<'a>(&'a self, host: &'a str, _port: u16) -> BoxFuture<'a, io::Result<Vec<IpAddr>>> {
        Box::pin(async move {
            if host.ends_with(".test") {
                Ok(vec![IpAddr::V4(Ipv4Addr::LOCALHOST)])
            } else {
                Err(io::Error::new(io::ErrorKind::NotFound, "unknown test host"))
            }
        })
    }
}

/// Validator with production rules except that loopback is reachable
#[allow(dead_code)]
pub fn loopback_validator() -> UrlValidator {
    UrlValidator::new(Arc::new(StubResolver)).with_policy(AddressPolicy::AllowLoopback)
}

/// Validator with production rules and the stub resolver
#[allow(dead_code)]
pub fn strict_validator() -> UrlValidator {
    UrlValidator::new(Arc::new(StubResolver))
}

#[allow(dead_code)]
pub fn test_fetcher(config: &ServerConfig) -> ContentFetcher {
    ContentFetcher::new(config, loopback_validator())
}

/// URL on the mock server addressed through a `.test` hostname
#[allow(dead_code)]
pub fn site_url(server: &Server, path: &str) -> String {
    format!("http://site.test:{}{path}", server.socket_address().port())
}

/// Search client pointed at the mock server's search endpoint
#[allow(dead_code)]
pub fn mock_search_client(server: &Server, config: &ServerConfig) -> BraveSearchClient {
    let limiter = Arc::new(RateLimiter::from_rps(config.brave_rate_limit_rps()));
    let endpoint = Url::parse(&format!("{}/res/v1/web/search", server.url()))
        .expect("mock server URL must parse");
    BraveSearchClient::new(config, limiter)
        .expect("search client must build")
        .with_endpoint(endpoint)
}

/// Minimal HTML document wrapping `body`
#[allow(dead_code)]
pub fn html_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>body {{ color: red; }}</style>
</head>
<body>
    {body}
    <script>var hidden = "do not show";</script>
</body>
</html>"#
    )
}

/// Brave-shaped JSON body for the given `(title, url, description)` triples
#[allow(dead_code)]
pub fn brave_body(results: &[(&str, &str, &str)]) -> String {
    let results: Vec<_> = results
        .iter()
        .map(|(title, url, description)| {
            serde_json::json!({ "title": title, "url": url, "description": description })
        })
        .collect();
    serde_json::json!({ "web": { "results": results } }).to_string()
}
