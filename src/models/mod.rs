//! Core data models for bibliographic records and queries.

mod record;
mod search;

pub use record::{render_text, ColumnMapping, Field, Record, RecordBuilder, UnknownField};
pub use search::{SearchQuery, SearchStrategy};
