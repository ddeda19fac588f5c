//! Visible text and link extraction from HTML
//!
//! Parsing is done with `scraper` (html5ever), which tolerates arbitrary
//! real-world markup. Traversal is iterative so deeply nested documents cannot
//! exhaust the stack.

use scraper::{Html, Node, Selector};
use std::sync::LazyLock;

/// Elements whose contents are never visible text
const SKIPPED_ELEMENTS: [&str; 2] = ["script", "style"];

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("BUG: hardcoded CSS selector 'a[href]' is invalid")
});

/// Extract the visible text of a document, one trimmed text node per line.
///
/// ```
/// # use url_text_fetcher::fetcher::extract_visible_text;
/// let html = "<p>Hello <b>there</b></p><script>var x;</script>";
/// assert_eq!(extract_visible_text(html), "Hello\nthere");
/// ```
#[must_use]
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines: Vec<&str> = Vec::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    lines.push(trimmed);
                }
            }
            Node::Element(element) if SKIPPED_ELEMENTS.contains(&element.name()) => {}
            Node::Document | Node::Fragment | Node::Element(_) => {
                // Reverse so children pop in document order
                stack.extend(node.children().rev());
            }
            _ => {}
        }
    }

    lines.join("\n")
}

/// Extract `href` values of all anchors that are absolute http(s) or
/// root-relative, in page order.
#[must_use]
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::trim)
        .filter(|href| is_listed_link(href))
        .map(str::to_string)
        .collect()
}

#[inline]
fn is_listed_link(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with('/')
}
