//! Strategy selection and the per-field fallback policy.

use serde::Serialize;

use super::indexed::binary_search;
use super::linear::linear_search;
use super::views::SortedViews;
use crate::models::{Field, Record, SearchQuery, SearchStrategy};

/// Session-wide lookup settings.
///
/// Holds the active strategy and, for [`SearchStrategy::Binary`], the sorted
/// views built over the dataset when the session starts.
#[derive(Debug, Clone)]
pub struct LookupConfig<'a> {
    strategy: SearchStrategy,
    views: Option<SortedViews<'a>>,
}

impl<'a> LookupConfig<'a> {
    /// Configuration for exhaustive scans; no views are built
    pub fn linear() -> Self {
        Self {
            strategy: SearchStrategy::Linear,
            views: None,
        }
    }

    /// Configuration for binary lookups, building views over `records`
    pub fn binary(records: &'a [Record]) -> Self {
        Self {
            strategy: SearchStrategy::Binary,
            views: Some(SortedViews::build(records)),
        }
    }

    /// Configuration for `strategy` over `records`
    pub fn new(strategy: SearchStrategy, records: &'a [Record]) -> Self {
        match strategy {
            SearchStrategy::Linear => Self::linear(),
            SearchStrategy::Binary => Self::binary(records),
        }
    }

    /// The active strategy
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// The sorted views, when the strategy keeps them
    pub fn views(&self) -> Option<&SortedViews<'a>> {
        self.views.as_ref()
    }
}

/// Records found by [`lookup`] and how they were found
#[derive(Debug, Clone, Serialize)]
pub struct LookupOutcome<'a> {
    /// Matching records in discovery order
    pub records: Vec<&'a Record>,

    /// Strategy the session was configured with
    pub strategy: SearchStrategy,

    /// Whether an empty author probe was retried as a full scan
    pub fell_back: bool,
}

impl LookupOutcome<'_> {
    /// Number of records found
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Run `query` against the dataset under `config`.
///
/// With the binary strategy an empty author result is retried as a linear
/// scan over `records`; title and year results are returned as probed, even
/// when empty. Fields without a sorted view are scanned linearly.
pub fn lookup<'a>(
    records: &'a [Record],
    config: &LookupConfig<'a>,
    query: &SearchQuery,
) -> LookupOutcome<'a> {
    let field = query.field;
    let strategy = config.strategy;
    let mut fell_back = false;

    let found = match (strategy, config.views.as_ref().and_then(|views| views.get(field))) {
        (SearchStrategy::Binary, Some(view)) => {
            let probed = binary_search(view, field, &query.text);

            if probed.is_empty() && field == Field::Author {
                tracing::info!(query = %query.text, "author probe empty, scanning full dataset");
                fell_back = true;
                linear_search(records, field, &query.text)
            } else {
                probed
            }
        }
        (SearchStrategy::Binary, None) => {
            tracing::debug!(%field, "no sorted view for field, scanning");
            linear_search(records, field, &query.text)
        }
        (SearchStrategy::Linear, _) => linear_search(records, field, &query.text),
    };

    tracing::debug!(
        %field,
        %strategy,
        fell_back,
        results = found.len(),
        "lookup complete"
    );

    LookupOutcome {
        records: found,
        strategy,
        fell_back,
    }
}
