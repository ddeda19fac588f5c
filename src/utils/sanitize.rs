//! Input sanitization for caller-supplied URLs and search queries
//!
//! Both functions are total: malformed input degrades to an empty string, which
//! every caller treats as a rejection.

use tracing::warn;

use super::constants::MAX_QUERY_LENGTH;

/// Substrings removed from search queries (matched ASCII case-insensitively)
const BLOCKED_QUERY_PATTERNS: [&str; 4] = ["<script", "javascript:", "data:", "vbscript:"];

/// Keep everything except ASCII control characters other than tab, LF and CR.
#[inline]
fn is_allowed_char(c: char) -> bool {
    (c as u32) >= 32 || matches!(c, '\t' | '\n' | '\r')
}

fn strip_control_chars(raw: &str) -> String {
    raw.chars().filter(|&c| is_allowed_char(c)).collect()
}

/// Normalize a URL and reject anything without an explicit `http://` or
/// `https://` prefix.
///
/// A missing scheme is never corrected.
///
/// ```
/// # use url_text_fetcher::utils::sanitize_url;
/// assert_eq!(sanitize_url("  https://example.com/\u{0}  "), "https://example.com/");
/// assert_eq!(sanitize_url("example.com"), "");
/// ```
#[must_use]
pub fn sanitize_url(raw: &str) -> String {
    let cleaned = strip_control_chars(raw);
    let url = cleaned.trim();

    if url.is_empty() {
        return String::new();
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        warn!("URL missing protocol: {url}");
        return String::new();
    }

    url.to_string()
}

/// Clean a free-text search query.
///
/// Strips control characters, caps the length at `MAX_QUERY_LENGTH` characters and
/// removes blocklisted script/URI-scheme fragments. Removal repeats until none are
/// left so that deleting one fragment cannot assemble another.
#[must_use]
pub fn sanitize_query(raw: &str) -> String {
    let mut query = strip_control_chars(raw);

    if let Some((byte_idx, _)) = query.char_indices().nth(MAX_QUERY_LENGTH) {
        query.truncate(byte_idx);
        warn!("Query truncated to {MAX_QUERY_LENGTH} characters");
    }

    loop {
        let lowered = query.to_ascii_lowercase();
        let hit = BLOCKED_QUERY_PATTERNS
            .iter()
            .find_map(|pattern| lowered.find(pattern).map(|idx| (idx, *pattern)));

        let Some((idx, pattern)) = hit else {
            break;
        };

        warn!("Potentially dangerous pattern detected in query: {pattern}");
        // ASCII lowercasing keeps byte offsets identical to the original
        query.replace_range(idx..idx + pattern.len(), "");
    }

    query.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_url_accepts_http_and_https() {
        assert_eq!(sanitize_url("http://example.org/page"), "http://example.org/page");
        assert_eq!(sanitize_url("https://example.org"), "https://example.org");
    }

    #[test]
    fn test_sanitize_url_rejects_missing_or_foreign_scheme() {
        assert_eq!(sanitize_url("example.org"), "");
        assert_eq!(sanitize_url("ftp://example.org"), "");
        assert_eq!(sanitize_url("file:///etc/passwd"), "");
        assert_eq!(sanitize_url("   "), "");
    }

    #[test]
    fn test_sanitize_url_strips_control_chars() {
        assert_eq!(sanitize_url("\u{1b}https://exa\u{0}mple.org\u{7}"), "https://example.org");
    }

    #[test]
    fn test_sanitize_url_is_fixed_point() {
        for raw in ["  https://a.example/x\t", "http://b.example/\u{2}", "nope", ""] {
            let once = sanitize_url(raw);
            assert_eq!(sanitize_url(&once), once);
        }
    }

    #[test]
    fn test_sanitize_query_removes_script_tag() {
        let out = sanitize_query("<script>alert(1)</script>");
        assert!(!out.to_ascii_lowercase().contains("<script"));
    }

    #[test]
    fn test_sanitize_query_is_case_insensitive() {
        let out = sanitize_query("JavaScript:void(0) DATA:text VBScript:x <SCRIPT");
        let lowered = out.to_ascii_lowercase();
        for pattern in BLOCKED_QUERY_PATTERNS {
            assert!(!lowered.contains(pattern), "{pattern} survived in {out:?}");
        }
    }

    #[test]
    fn test_sanitize_query_does_not_splice_new_patterns() {
        let out = sanitize_query("<scr<scriptipt>");
        assert!(!out.to_ascii_lowercase().contains("<script"));
    }

    #[test]
    fn test_sanitize_query_truncates_long_input() {
        let long = "a".repeat(2000);
        assert_eq!(sanitize_query(&long).chars().count(), MAX_QUERY_LENGTH);
    }

    #[test]
    fn test_sanitize_query_keeps_plain_text() {
        assert_eq!(sanitize_query("  rust async \u{0}programming  "), "rust async programming");
        assert_eq!(sanitize_query(""), "");
    }
}
