//! Exhaustive scan lookup.

use super::matcher::matches;
use crate::models::{Field, Record};

/// Return every record matching `query` on `field`, in dataset order.
pub fn linear_search<'a>(records: &'a [Record], field: Field, query: &str) -> Vec<&'a Record> {
    let query_lower = query.to_lowercase();

    records
        .iter()
        .filter(|record| matches(record, field, &query_lower))
        .collect()
}
