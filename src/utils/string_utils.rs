//! Character-budget truncation helpers
//!
//! All content limits in this crate are expressed in Unicode characters, not
//! bytes, so slicing must happen on `char` boundaries.

/// Truncate `s` to `max_chars` characters and append `marker` when anything was cut.
///
/// Returns the (possibly shortened) text and whether truncation happened. The
/// result is at most `max_chars + marker.chars().count()` characters long.
///
/// ```
/// # use url_text_fetcher::utils::string_utils::truncate_with_marker;
/// let (text, cut) = truncate_with_marker("abcdef".to_string(), 3, "...");
/// assert_eq!(text, "abc...");
/// assert!(cut);
/// ```
#[must_use]
pub fn truncate_with_marker(s: String, max_chars: usize, marker: &str) -> (String, bool) {
    match s.char_indices().nth(max_chars) {
        None => (s, false),
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + marker.len());
            out.push_str(&s[..byte_idx]);
            out.push_str(marker);
            (out, true)
        }
    }
}
