// src/checker/markdown.rs
// =============================================================================
// This module extracts candidate links from Markdown text.
//
// This is a heuristic text scan, not a Markdown parser. A match:
// - starts at http:// or https://
// - continues lazily over characters that are not ( or )
// - then greedily over characters that are not ) or "
//
// So `[text](url)` stops at the closing parenthesis and `("url")` stops at the
// closing quote. Known quirks are kept on purpose:
// - a literal ) inside a query string truncates the link
// - whitespace is not a terminator, so "see http://a.com and more" yields the
//   whole tail of the line (then trimmed)
// - nothing is deduplicated or validated as a URL
//
// Rust concepts:
// - once_cell::Lazy: compile the regex once, on first use
// - impl Iterator: return a lazy sequence borrowing the input text
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[^()]+?[^)"]+"#).expect("link pattern is a valid regex")
});

/// Lazily yields every link found in `text`, whitespace-trimmed.
///
/// The text is scanned as one span, so callers that want line-level
/// granularity (like the file-set parser) should feed it one line at a time.
///
/// ```ignore
/// let links: Vec<_> = extract_links("[Rust](https://www.rust-lang.org)").collect();
/// assert_eq!(links, vec!["https://www.rust-lang.org"]);
/// ```
pub fn extract_links(text: &str) -> impl Iterator<Item = String> + '_ {
    MARKDOWN_URL
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
}
