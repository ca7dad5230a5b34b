//! Binary probe over a field-sorted view, expanded to adjacent matches.
//!
//! The probe narrows by comparing the query text itself against the field
//! value at the midpoint, while success is decided by [`matches`], a substring
//! or fuzzy-author predicate. The two orders disagree: a record containing
//! `"apple"` may sort anywhere relative to the string `"apple"`. The probe can
//! therefore step past every real match, and the expansion only collects the
//! contiguous run around the index the probe lands on. Results are a subset
//! of what [`linear_search`](super::linear_search) returns for the same query.

use super::matcher::matches;
use crate::models::{Field, Record};

/// Look up `query` on `field` in a view sorted by that field.
///
/// Returns the contiguous run of matching records around the first midpoint
/// that matches, in view order, or an empty vector if the probe never hits.
pub fn binary_search<'a>(sorted: &[&'a Record], field: Field, query: &str) -> Vec<&'a Record> {
    let query_lower = query.to_lowercase();

    // Half-open [left, end); midpoint equals the inclusive (left + right) / 2.
    let mut left = 0;
    let mut end = sorted.len();

    while left < end {
        let mid = left + (end - 1 - left) / 2;
        let record = sorted[mid];

        if matches(record, field, &query_lower) {
            tracing::trace!(%field, mid, "probe hit");
            return expand(sorted, mid, field, &query_lower);
        }

        if query_lower.as_str() < field.text(record).to_lowercase().as_str() {
            end = mid;
        } else {
            left = mid + 1;
        }
        tracing::trace!(%field, mid, left, end, "probe narrowed");
    }

    Vec::new()
}

/// Collect the run of matches around a confirmed hit at `mid`.
fn expand<'a>(sorted: &[&'a Record], mid: usize, field: Field, query_lower: &str) -> Vec<&'a Record> {
    let still_matches = |record: &&&'a Record| matches(record, field, query_lower);

    let before = sorted[..mid].iter().rev().take_while(still_matches).count();
    let after = sorted[mid + 1..].iter().take_while(still_matches).count();

    sorted[mid - before..=mid + after].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordBuilder;

    fn titled(titles: &[&str]) -> Vec<Record> {
        titles.iter().map(|t| RecordBuilder::new(*t).build()).collect()
    }

    fn titles<'a>(found: &[&'a Record]) -> Vec<&'a str> {
        found.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_contiguous_run_collected() {
        let records = titled(&["Apple Study", "Banana Survey", "Banana Theory", "Cherry Note"]);
        let view: Vec<&Record> = records.iter().collect();

        let found = binary_search(&view, Field::Title, "banana");
        assert_eq!(titles(&found), vec!["Banana Survey", "Banana Theory"]);
    }

    #[test]
    fn test_expands_both_directions_in_view_order() {
        let records = titled(&["a", "kiwi one", "kiwi three", "kiwi two", "z"]);
        let view: Vec<&Record> = records.iter().collect();

        let found = binary_search(&view, Field::Title, "KIWI");
        assert_eq!(titles(&found), vec!["kiwi one", "kiwi three", "kiwi two"]);
    }

    #[test]
    fn test_run_reaching_both_ends() {
        let records = titled(&["note a", "note b", "note c"]);
        let view: Vec<&Record> = records.iter().collect();

        assert_eq!(binary_search(&view, Field::Title, "note").len(), 3);
    }

    #[test]
    fn test_probe_misses_match_sorted_elsewhere() {
        let records = titled(&["banana", "cherry", "date", "fig apple"]);
        let view: Vec<&Record> = records.iter().collect();

        assert!(binary_search(&view, Field::Title, "apple").is_empty());
    }

    #[test]
    fn test_only_run_around_hit_is_returned() {
        // "apple" and "zebra apple" both match, but they are not adjacent
        let records = titled(&["apple", "mango", "pear", "zebra apple"]);
        let view: Vec<&Record> = records.iter().collect();

        assert_eq!(titles(&binary_search(&view, Field::Title, "apple")), vec!["apple"]);
    }

    #[test]
    fn test_empty_view() {
        assert!(binary_search(&[], Field::Title, "x").is_empty());
    }

    #[test]
    fn test_single_record() {
        let records = titled(&["Only One"]);
        let view: Vec<&Record> = records.iter().collect();

        assert_eq!(binary_search(&view, Field::Title, "one").len(), 1);
        assert!(binary_search(&view, Field::Title, "two").is_empty());
    }

    #[test]
    fn test_year_view() {
        let records: Vec<Record> = [2015, 2018, 2018, 2020, 2022]
            .iter()
            .map(|y| RecordBuilder::new(format!("Paper {y}")).year(y).build())
            .collect();
        let view: Vec<&Record> = records.iter().collect();

        let found = binary_search(&view, Field::Year, "2018");
        assert_eq!(titles(&found), vec!["Paper 2018", "Paper 2018"]);
    }
}
