//! Fuzzy author-name equivalence.
//!
//! Author fields are stored inconsistently: names appear as `"Last, First"`
//! or `"First Last"`, carry parenthesized notes, and several co-authors are
//! joined with `;` or `,`. [`author_matches`] applies a fixed cascade of
//! rules, each more permissive than the last, and accepts the field as soon
//! as any candidate name passes any rule. Precision is traded for recall:
//! a lone surname matches every author sharing it.

use super::normalize::normalize;

/// Decide whether `author_field` plausibly names the person in `query`.
///
/// Comparison is case-insensitive. The cascade, in order:
///
/// 1. `query` is a substring of the whole field.
/// 2. For each candidate name in the field (see below), with both sides
///    normalized:
///    - the candidate equals the query;
///    - a one-token query occurs inside the candidate;
///    - a one-token query prefixes one of the candidate's tokens;
///    - a two-token query, reversed, equals the candidate's tokens.
///
/// Candidates are each `;`-separated entry, followed by every fragment
/// obtained by splitting on both `;` and `,`. The fragments treat every comma
/// as a separator, so `"Smith, John"` also yields `"Smith"` and `"John"`.
pub fn author_matches(author_field: &str, query: &str) -> bool {
    let field = author_field.to_lowercase();
    let query = query.to_lowercase();

    if field.contains(query.as_str()) {
        return true;
    }

    let query_normalized = normalize(&query);
    let query_tokens: Vec<&str> = query_normalized.split_whitespace().collect();

    let found = candidates(&field)
        .any(|candidate| candidate_matches(candidate, &query_normalized, &query_tokens));
    found
}

fn candidates(field: &str) -> impl Iterator<Item = &str> {
    let entries = field.split(';');
    let fragments = field.split([';', ',']);

    entries
        .chain(fragments)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

fn candidate_matches(candidate: &str, query_normalized: &str, query_tokens: &[&str]) -> bool {
    let name = normalize(candidate);
    let name_tokens: Vec<&str> = name.split_whitespace().collect();

    if name == query_normalized {
        return true;
    }

    if let [token] = query_tokens {
        if name.contains(token) {
            return true;
        }
        if name_tokens.iter().any(|part| part.starts_with(token)) {
            return true;
        }
    }

    if let [first, last] = query_tokens {
        if name_tokens == [*last, *first] {
            return true;
        }
    }

    false
}
