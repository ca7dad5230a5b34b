//! Matching and lookup engine.
//!
//! Components, leaf to root:
//!
//! - [`normalize`]: canonicalize a raw author name
//! - [`author_matches`]: fuzzy author-name equivalence built on [`normalize`]
//! - [`matches`]: per-record predicate for any [`Field`](crate::models::Field)
//! - [`linear_search`]: exhaustive scan, complete relative to [`matches`]
//! - [`binary_search`]: probe a [`SortedView`] and expand around the hit
//! - [`lookup`]: apply a [`LookupConfig`], including the author-only fallback
//!
//! # Example
//!
//! ```
//! use paper_lookup::models::{RecordBuilder, SearchQuery};
//! use paper_lookup::search::{lookup, LookupConfig};
//!
//! let records = vec![
//!     RecordBuilder::new("Banana Survey").author("Doe, Jane").year(2020).build(),
//!     RecordBuilder::new("Apple Study").author("Smith, John").year(2018).build(),
//! ];
//!
//! let config = LookupConfig::binary(&records);
//! let outcome = lookup(&records, &config, &SearchQuery::author("Jane Doe"));
//! assert_eq!(outcome.records[0].title, "Banana Survey");
//! ```

mod author;
mod indexed;
mod linear;
mod lookup;
mod matcher;
mod normalize;
mod views;

pub use author::author_matches;
pub use indexed::binary_search;
pub use linear::linear_search;
pub use lookup::{lookup, LookupConfig, LookupOutcome};
pub use matcher::matches;
pub use normalize::normalize;
pub use views::{SortedView, SortedViews};
