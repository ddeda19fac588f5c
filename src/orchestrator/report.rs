//! Plain-text report assembled by the search-and-fetch pipeline

use std::fmt::Write as _;

use crate::utils::constants::RESPONSE_TRUNCATED_MARKER;
use crate::utils::string_utils::truncate_with_marker;

const RULE_WIDTH: usize = 50;

#[derive(Debug)]
pub(crate) struct Report {
    body: String,
    entries: usize,
}

impl Report {
    pub(crate) fn new(query: &str) -> Self {
        let mut body = String::new();
        let _ = writeln!(body, "Search Results for: {query}");
        let _ = writeln!(body, "{}", "=".repeat(RULE_WIDTH));
        body.push('\n');
        Self { body, entries: 0 }
    }

    /// Append a numbered entry; numbering starts at 1
    pub(crate) fn push_entry(&mut self, title: &str, url: &str, description: &str, content: &str) {
        self.entries += 1;
        let title = if title.is_empty() { "No title" } else { title };
        let description = if description.is_empty() { "No description" } else { description };

        let _ = writeln!(self.body, "{}. {title}", self.entries);
        let _ = writeln!(self.body, "   URL: {url}");
        let _ = writeln!(self.body, "   Description: {description}");
        let _ = writeln!(self.body, "   Content: {content}");
        self.body.push('\n');
    }

    pub(crate) fn entries(&self) -> usize {
        self.entries
    }

    /// Final text, cut to `limit` characters (plus marker) if it grew too long
    pub(crate) fn finish(self, limit: usize) -> String {
        let body = self.body.trim_end_matches('\n').to_string();
        truncate_with_marker(body, limit, RESPONSE_TRUNCATED_MARKER).0
    }
}
