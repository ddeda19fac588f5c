//! Bounded content fetching
//!
//! `ContentFetcher` retrieves a page under three limits: a whole-request timeout,
//! a declared `Content-Length` cap, and a streamed byte cap. Every hop is checked
//! by the [`UrlValidator`] and the connection is pinned to the address the
//! validator approved, so a DNS answer that changes between check and connect
//! cannot redirect the request inward. Redirects are followed by hand for the
//! same reason.
//!
//! Public entry points never fail from the caller's point of view: they return
//! the extracted text or one of the fixed error strings from [`FetchError`].

mod decode;
mod extract;
mod stream;
mod types;

pub use extract::{extract_links, extract_visible_text};
pub use types::{FetchError, FetchResult, LinkListResult};

use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, DNT, HeaderMap, HeaderValue, LOCATION,
    UPGRADE_INSECURE_REQUESTS,
};
use reqwest::{Client, Response, redirect};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::ServerConfig;
use crate::url_guard::{UrlValidator, ValidatedTarget};
use crate::utils::constants::{
    ACCEPT_HTML, ACCEPT_LANGUAGE as ACCEPT_LANGUAGE_VALUE, CONTENT_TRUNCATED_MARKER, MAX_REDIRECTS,
    USER_AGENT,
};
use crate::utils::string_utils::truncate_with_marker;

/// Fetches page text and links with SSRF checks and size/time bounds
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    validator: UrlValidator,
    request_timeout: Duration,
    content_length_limit: usize,
    max_response_size: u64,
}

impl ContentFetcher {
    #[must_use]
    pub fn new(config: &ServerConfig, validator: UrlValidator) -> Self {
        Self {
            validator,
            request_timeout: config.request_timeout(),
            content_length_limit: config.content_length_limit(),
            max_response_size: config.max_response_size(),
        }
    }

    /// Fetch a page's visible text, returning either the text or an error string
    pub async fn fetch_url_content(&self, url: &str) -> String {
        self.fetch(url).await.text
    }

    /// Fetch a page's visible text as a tagged result
    pub async fn fetch(&self, url: &str) -> FetchResult {
        match self.fetch_text(url).await {
            Ok((text, truncated)) => {
                info!("SUCCESS: Fetched {} characters from {url}", text.chars().count());
                FetchResult::success(url, text, truncated)
            }
            Err(e) => {
                log_failure(url, &e);
                FetchResult::failure(url, &e)
            }
        }
    }

    /// Fetch a page and list its absolute and root-relative links
    pub async fn fetch_page_links(&self, url: &str) -> Result<LinkListResult, FetchError> {
        let html = self.fetch_document(url).await.inspect_err(|e| log_failure(url, e))?;
        let links = extract_links(&html);
        debug!("Found {} links on {url}", links.len());
        Ok(LinkListResult::new(url, links))
    }

    async fn fetch_text(&self, url: &str) -> Result<(String, bool), FetchError> {
        let html = self.fetch_document(url).await?;
        let text = extract_visible_text(&html);

        let original_len = text.chars().count();
        let (text, truncated) =
            truncate_with_marker(text, self.content_length_limit, CONTENT_TRUNCATED_MARKER);
        if truncated {
            info!(
                "CONTENT: Truncating content from {url} ({original_len} -> {} chars)",
                self.content_length_limit
            );
        }
        Ok((text, truncated))
    }

    /// Validate, request, and read a document body as text. The timeout spans
    /// every hop, including DNS and the body read.
    async fn fetch_document(&self, url: &str) -> Result<String, FetchError> {
        tokio::time::timeout(self.request_timeout, self.fetch_document_inner(url))
            .await
            .unwrap_or_else(|_| {
                warn!(
                    "REQUEST_ERROR: {url} did not complete within {}s",
                    self.request_timeout.as_secs_f64()
                );
                Err(FetchError::TimedOut)
            })
    }

    async fn fetch_document_inner(&self, url: &str) -> Result<String, FetchError> {
        let mut target = self.validator.validate(url).await.map_err(|rejection| {
            warn!("SECURITY: Blocked unsafe URL: {url} ({rejection})");
            FetchError::Blocked(rejection)
        })?;

        let mut redirects = 0;
        let response = loop {
            let response = self.send(&target).await?;
            let status = response.status();

            if !status.is_redirection() {
                break response;
            }

            if redirects == MAX_REDIRECTS {
                return Err(FetchError::TooManyRedirects);
            }
            redirects += 1;

            let next = redirect_target(&target.url, &response).ok_or(FetchError::Status(status))?;
            debug!("Following redirect {redirects} from {} to {next}", target.url);
            target = self.validator.validate_parsed(next).await.map_err(|rejection| {
                warn!("SECURITY: Blocked unsafe redirect from {url} ({rejection})");
                FetchError::Blocked(rejection)
            })?;
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        info!(
            "RESPONSE: {} from {}, Content-Type: {}",
            status.as_u16(),
            target.url,
            content_type.as_deref().unwrap_or("unknown")
        );

        let declared = response.content_length();
        stream::check_declared_length(declared, self.max_response_size)?;
        let body =
            stream::collect_bounded(response.bytes_stream(), declared, self.max_response_size)
                .await?;

        decode::decode_body(&body, content_type.as_deref())
    }

    async fn send(&self, target: &ValidatedTarget) -> Result<Response, FetchError> {
        let client = self.client_for(target)?;
        info!("REQUEST: Fetching content from {}", target.url);

        client
            .get(target.url.clone())
            .headers(browser_headers())
            .send()
            .await
            .map_err(FetchError::Transport)
    }

    /// Build a client whose DNS for the target host is pinned to the validated
    /// address. Port 0 keeps the URL's own port.
    fn client_for(&self, target: &ValidatedTarget) -> Result<Client, FetchError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.request_timeout)
            .redirect(redirect::Policy::none())
            .no_proxy();

        if let Some(addr) = target.pinned_addr() {
            builder = builder.resolve(&target.host, SocketAddr::new(addr, 0));
        }

        builder
            .build()
            .map_err(|e| FetchError::Unexpected(format!("failed to build HTTP client: {e}")))
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
    headers.insert(DNT, HeaderValue::from_static("1"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers
}

fn redirect_target(current: &Url, response: &Response) -> Option<Url> {
    let location = response.headers().get(LOCATION)?.to_str().ok()?;
    current.join(location.trim()).ok()
}

fn log_failure(url: &str, err: &FetchError) {
    match err {
        FetchError::Transport(source) => error!("REQUEST_ERROR: Failed to fetch {url}: {source}"),
        // Already logged where the timeout fired
        FetchError::TimedOut => {}
        FetchError::Status(status) => error!("REQUEST_ERROR: {url} returned HTTP {status}"),
        FetchError::Unexpected(detail) => error!("UNEXPECTED_ERROR: Processing {url}: {detail}"),
        // Already logged at the point of rejection
        FetchError::Blocked(_) | FetchError::DeclaredTooLarge { .. } | FetchError::ExceededLimit { .. } => {}
        other => warn!("CONTENT: {url}: {other:?}"),
    }
}
