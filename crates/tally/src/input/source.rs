//! Raw survey rows and metadata about where they came from.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One respondent's row: column name to cell value, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    cells: IndexMap<String, String>,
}

impl RawRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, replacing any previous value for the column.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Builder-style variant of [`RawRow::insert`].
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    /// Get a cell value by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Iterate over `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// An ordered, finite sequence of raw rows.
///
/// Any iterator of `Result<RawRow>` is a row source. An `Err` item means the
/// underlying reader failed and the run must be abandoned.
pub trait RowSource: Iterator<Item = Result<RawRow>> {}

impl<T> RowSource for T where T: Iterator<Item = Result<RawRow>> {}

/// Metadata about the source data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows read (excluding header).
    pub row_count: usize,
    /// Number of columns in the header.
    pub column_count: usize,
    /// When the analysis was performed.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file about to be read. `row_count` is filled in
    /// once the rows have been consumed.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count: 0,
            column_count,
            analyzed_at: Utc::now(),
        }
    }
}
