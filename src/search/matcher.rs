//! Per-record field predicate.

use super::author::author_matches;
use crate::models::{Field, Record};

/// Check whether `record` matches `query_lower` on `field`.
///
/// Author queries go through [`author_matches`]; every other field is a
/// case-insensitive substring test on the field's text. `query_lower` must
/// already be lower-cased.
pub fn matches(record: &Record, field: Field, query_lower: &str) -> bool {
    let value = field.text(record).to_lowercase();

    match field {
        Field::Author => author_matches(&value, query_lower),
        _ => value.contains(query_lower),
    }
}
