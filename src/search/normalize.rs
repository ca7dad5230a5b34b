//! Author-name canonicalization.

use regex::Regex;
use std::sync::OnceLock;

static PARENTHESIZED: OnceLock<Regex> = OnceLock::new();

fn parenthesized() -> &'static Regex {
    PARENTHESIZED.get_or_init(|| Regex::new(r"\(.*?\)").expect("parenthesized-span pattern is valid"))
}

/// Canonicalize a raw author name for comparison.
///
/// Parenthesized notes such as affiliations are dropped, whitespace is
/// collapsed, and a name holding exactly one comma is read as `"Last, First"`
/// and rewritten to `"First Last"`. Any other comma count passes through.
///
/// ```
/// use paper_lookup::search::normalize;
///
/// assert_eq!(normalize("Smith, John (MIT)"), "John Smith");
/// assert_eq!(normalize("  Ada   Lovelace "), "Ada Lovelace");
/// ```
pub fn normalize(raw: &str) -> String {
    let stripped = parenthesized().replace_all(raw, "");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.matches(',').count() != 1 {
        return collapsed;
    }

    match collapsed.split_once(',') {
        Some((last, first)) => format!("{} {}", first.trim(), last.trim()),
        None => collapsed,
    }
}
