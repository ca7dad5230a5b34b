//! Field-sorted views over a dataset.

use std::ops::Deref;

use crate::models::{Field, Record};

/// The records of a dataset, ordered by one field's sort key.
///
/// A view borrows the dataset's records; nothing is copied. Ordering is
/// stable, so records with equal keys keep their dataset order.
#[derive(Debug, Clone)]
pub struct SortedView<'a> {
    field: Field,
    records: Vec<&'a Record>,
}

impl<'a> SortedView<'a> {
    /// Sort `records` by `field`
    pub fn new(records: &'a [Record], field: Field) -> Self {
        let mut sorted: Vec<&'a Record> = records.iter().collect();
        sorted.sort_by_cached_key(|record| field.sort_key(record));

        Self {
            field,
            records: sorted,
        }
    }

    /// The field this view is sorted by
    pub fn field(&self) -> Field {
        self.field
    }

    /// The sorted records
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }
}

impl<'a> Deref for SortedView<'a> {
    type Target = [&'a Record];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

/// Title, Author and Year views, built once per session
#[derive(Debug, Clone)]
pub struct SortedViews<'a> {
    pub title: SortedView<'a>,
    pub author: SortedView<'a>,
    pub year: SortedView<'a>,
}

impl<'a> SortedViews<'a> {
    /// Build all three views over `records`
    pub fn build(records: &'a [Record]) -> Self {
        let views = Self {
            title: SortedView::new(records, Field::Title),
            author: SortedView::new(records, Field::Author),
            year: SortedView::new(records, Field::Year),
        };
        tracing::debug!(records = records.len(), "built sorted views");
        views
    }

    /// The view for `field`, if one is kept
    pub fn get(&self, field: Field) -> Option<&SortedView<'a>> {
        match field {
            Field::Title => Some(&self.title),
            Field::Author => Some(&self.author),
            Field::Year => Some(&self.year),
            Field::Link => None,
        }
    }
}
