//! Dataset loading for the command-line front end.
//!
//! Reads a local file of rows, either a CSV export with a header line or a
//! JSON document holding an array of row objects, and maps each row's columns
//! onto a [`Record`] through a [`ColumnMapping`]. Files ending in `.csv` are
//! read as CSV; anything else as JSON.

use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::models::{ColumnMapping, Record};

/// Errors that can occur while loading a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Dataset file not found
    #[error("dataset not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the dataset file
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level value is not an array
    #[error("dataset {path} must be a JSON array of rows")]
    NotAnArray { path: PathBuf },

    /// A row is not a JSON object
    #[error("row {index} in {path} is not an object")]
    InvalidRow { path: PathBuf, index: usize },

    /// The CSV file is malformed
    #[error("failed to parse CSV dataset {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Load records from a CSV or JSON file
pub fn load_records(path: &Path, columns: &ColumnMapping) -> Result<Vec<Record>, DatasetError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let reader = BufReader::new(file);
    let records = if is_csv {
        read_csv_records(reader, path, columns)?
    } else {
        read_records(reader, path, columns)?
    };
    tracing::info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

/// Parse records from a JSON array; `path` is only used in error messages
pub fn read_records<R: Read>(
    reader: R,
    path: &Path,
    columns: &ColumnMapping,
) -> Result<Vec<Record>, DatasetError> {
    let document: Value = serde_json::from_reader(reader).map_err(|e| DatasetError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let Value::Array(rows) = document else {
        return Err(DatasetError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            row.as_object()
                .map(|object| Record::from_row(object, columns))
                .ok_or_else(|| DatasetError::InvalidRow {
                    path: path.to_path_buf(),
                    index,
                })
        })
        .collect()
}

/// Parse records from CSV with a header line; `path` is only used in error messages.
///
/// Cells are taken as text. A column missing from the header yields empty
/// fields, as with JSON rows.
pub fn read_csv_records<R: Read>(
    reader: R,
    path: &Path,
    columns: &ColumnMapping,
) -> Result<Vec<Record>, DatasetError> {
    let csv_error = |source: csv::Error| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(csv_error)?;
        let object: Map<String, Value> = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();
        records.push(Record::from_row(&object, columns));
    }

    Ok(records)
}
