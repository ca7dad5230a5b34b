//! Utility modules for the command-line front end.
//!
//! - [`load_records`]: read a CSV or JSON dataset into [`Record`](crate::models::Record)s
//! - [`render_table`], [`render_plain`]: format lookup results for the terminal
//! - [`truncate_with_ellipsis`]: width-aware truncation for table cells
//!
//! # Loading a dataset
//!
//! ```rust,no_run
//! use paper_lookup::models::ColumnMapping;
//! use paper_lookup::utils::load_records;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = load_records(Path::new("papers.csv"), &ColumnMapping::default())?;
//! println!("{} records", records.len());
//! # Ok(())
//! # }
//! ```

mod dataset;
mod display;

pub use dataset::{load_records, read_csv_records, read_records, DatasetError};
pub use display::{
    is_terminal, record_table_columns, render_plain, render_table, terminal_width,
    truncate_with_ellipsis, DEFAULT_WIDTH,
};
