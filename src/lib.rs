//! # Paper Lookup
//!
//! Locate bibliographic records (title, author, year, link) in a loaded
//! dataset by querying one field at a time.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Record, Field, SearchQuery, SearchStrategy)
//! - [`search`]: Name normalization, fuzzy author matching, linear and binary lookup
//! - [`config`]: Configuration management
//! - [`utils`]: Dataset loading and terminal rendering for the CLI

pub mod config;
pub mod models;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use models::{Field, Record, SearchQuery, SearchStrategy};
pub use search::{lookup, LookupConfig, LookupOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
