//! End-to-end search-and-fetch runs against mock search and page servers

mod common;

use futures::future::BoxFuture;
use mockito::{Matcher, Server};
use std::sync::{Arc, Mutex};
use url_text_fetcher::orchestrator::{ProgressReporter, SearchEvent};
use url_text_fetcher::utils::constants::RESPONSE_TRUNCATED_MARKER;
use url_text_fetcher::{SearchAndFetch, ServerConfig};

#[derive(Default)]
struct RecordingProgress {
    events: Mutex<Vec<SearchEvent>>,
}

impl RecordingProgress {
    fn events(&self) -> Vec<SearchEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgress {
    fn report(&self, event: SearchEvent) -> BoxFuture<'_, ()> {
        self.events.lock().unwrap().push(event);
        Box::pin(async {})
    }
}

const SEARCH_PATH: &str = "/res/v1/web/search";

fn pipeline(server: &Server, config: &ServerConfig) -> SearchAndFetch {
    let search = Arc::new(common::mock_search_client(server, config));
    let fetcher = Arc::new(common::test_fetcher(config));
    SearchAndFetch::new(config, search, fetcher)
}

fn numbered_entries(report: &str) -> usize {
    report
        .lines()
        .filter(|line| {
            line.split_once(". ")
                .is_some_and(|(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        })
        .count()
}

#[tokio::test]
async fn test_fetches_exactly_max_results_pages() {
    let mut server = Server::new_async().await;
    let config = ServerConfig::builder().brave_api_key("test-key").build();

    let urls: Vec<String> = (1..=6)
        .map(|i| common::site_url(&server, &format!("/page{i}")))
        .collect();
    let hits: Vec<(String, &str, &str)> = urls
        .iter()
        .enumerate()
        .map(|(i, url)| (format!("Dinosaur {}", i + 1), url.as_str(), "About dinosaurs"))
        .collect();
    let hits: Vec<(&str, &str, &str)> = hits.iter().map(|(t, u, d)| (t.as_str(), *u, *d)).collect();

    let search = server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::UrlEncoded("count".into(), "6".into()))
        .with_body(common::brave_body(&hits))
        .create_async()
        .await;

    let mut fetched = Vec::new();
    for i in 1..=3 {
        fetched.push(
            server
                .mock("GET", format!("/page{i}").as_str())
                .with_body(common::html_page("Dino", &format!("<p>Fossil record {i}</p>")))
                .expect(1)
                .create_async()
                .await,
        );
    }
    let untouched = server
        .mock("GET", Matcher::Regex("^/page[4-6]$".into()))
        .expect(0)
        .create_async()
        .await;

    let report = pipeline(&server, &config).run("dinosaurs", 3).await;

    search.assert_async().await;
    for mock in &fetched {
        mock.assert_async().await;
    }
    untouched.assert_async().await;

    assert!(report.starts_with("Search Results for: dinosaurs\n"));
    assert_eq!(numbered_entries(&report), 3);
    assert!(report.contains("1. Dinosaur 1\n"));
    assert!(report.contains("3. Dinosaur 3\n"));
    assert!(report.contains("Fossil record 2"));
    assert!(
        report.chars().count()
            <= config.content_length_limit() + RESPONSE_TRUNCATED_MARKER.chars().count()
    );
}

#[tokio::test]
async fn test_failed_fetch_still_counts_and_results_without_url_are_skipped() {
    let mut server = Server::new_async().await;
    let config = ServerConfig::builder().brave_api_key("test-key").build();

    let broken = common::site_url(&server, "/broken");
    let good = common::site_url(&server, "/good");
    let never = common::site_url(&server, "/never");

    server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::Any)
        .with_body(common::brave_body(&[
            ("No link", "", "missing url"),
            ("Broken", broken.as_str(), "server error"),
            ("Good", good.as_str(), "works"),
            ("Never", never.as_str(), "over budget"),
        ]))
        .create_async()
        .await;
    server.mock("GET", "/broken").with_status(500).create_async().await;
    server
        .mock("GET", "/good")
        .with_body("<p>fine content</p>")
        .create_async()
        .await;
    let never_mock = server.mock("GET", "/never").expect(0).create_async().await;

    let report = pipeline(&server, &config).run("mixed", 2).await;

    never_mock.assert_async().await;
    assert_eq!(numbered_entries(&report), 2);
    assert!(!report.contains("No link"));
    assert!(report.contains("1. Broken\n"));
    assert!(report.contains("Content: Error: Unable to fetch URL content"));
    assert!(report.contains("2. Good\n"));
    assert!(report.contains("Content: fine content"));
}

#[tokio::test]
async fn test_no_results_message() {
    let mut server = Server::new_async().await;
    let config = ServerConfig::builder().brave_api_key("test-key").build();
    server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::Any)
        .with_body(common::brave_body(&[]))
        .create_async()
        .await;

    let report = pipeline(&server, &config).run("zzzz", 3).await;
    assert_eq!(report, "No search results found for query: zzzz");
}

#[tokio::test]
async fn test_missing_key_is_reported_without_network() {
    let mut server = Server::new_async().await;
    let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

    let report = pipeline(&server, &ServerConfig::default()).run("dinosaurs", 3).await;

    mock.assert_async().await;
    assert_eq!(report, "Error: BRAVE_API_KEY environment variable is required");
}

#[tokio::test]
async fn test_empty_query_after_sanitizing_is_rejected() {
    let mut server = Server::new_async().await;
    let config = ServerConfig::builder().brave_api_key("test-key").build();
    let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

    let report = pipeline(&server, &config).run("  <script \u{0} ", 3).await;

    mock.assert_async().await;
    assert_eq!(report, "Error: Invalid or empty search query");
}

#[tokio::test]
async fn test_upstream_error_is_prefixed() {
    let mut server = Server::new_async().await;
    let config = ServerConfig::builder().brave_api_key("test-key").build();
    server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .create_async()
        .await;

    let report = pipeline(&server, &config).run("dinosaurs", 3).await;
    assert_eq!(
        report,
        "Error: Rate limit exceeded - please wait before making another request"
    );
}

#[tokio::test]
async fn test_progress_is_reported_per_fetched_result() {
    let mut server = Server::new_async().await;
    let config = ServerConfig::builder().brave_api_key("test-key").build();

    let first = common::site_url(&server, "/first");
    let second = common::site_url(&server, "/second");
    server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::Any)
        .with_body(common::brave_body(&[
            ("First", first.as_str(), ""),
            ("No link", "", ""),
            ("Second", second.as_str(), ""),
        ]))
        .create_async()
        .await;
    server.mock("GET", "/first").with_body("<p>one</p>").create_async().await;
    server.mock("GET", "/second").with_body("<p>two</p>").create_async().await;

    let progress = RecordingProgress::default();
    pipeline(&server, &config)
        .run_with_progress("fossils", 2, &progress)
        .await;

    assert_eq!(
        progress.events(),
        vec![
            SearchEvent::Started { query: "fossils".into() },
            SearchEvent::Fetching { current: 1, total: 2 },
            SearchEvent::Fetching { current: 2, total: 2 },
            SearchEvent::Completed { fetched: 2 },
        ]
    );
}

#[tokio::test]
async fn test_failure_is_reported_to_progress() {
    let mut server = Server::new_async().await;
    let config = ServerConfig::builder().brave_api_key("test-key").build();
    server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let progress = RecordingProgress::default();
    let report = pipeline(&server, &config)
        .run_with_progress("fossils", 3, &progress)
        .await;

    assert_eq!(report, "Error: Search service temporarily unavailable");
    assert_eq!(
        progress.events(),
        vec![
            SearchEvent::Started { query: "fossils".into() },
            SearchEvent::Failed { message: report.clone() },
        ]
    );
}
