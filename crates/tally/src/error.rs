//! Error types for the Tally library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The row source could not be opened or read.
    #[error("Source unavailable '{path}': {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library while reading rows.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The row source yielded zero rows.
    #[error("Empty source: {0}")]
    EmptySource(String),

    /// A row carries no usable question/answer pairs.
    #[error("Malformed row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    /// A computed score fell outside 0..=100.
    #[error("Scoring overflow: amount {amount} outside 0..=100")]
    ScoringOverflow { amount: f64 },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TallyError {
    /// Whether the engine recovers from this error locally instead of
    /// aborting the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TallyError::MalformedRow { .. } | TallyError::ScoringOverflow { .. }
        )
    }
}

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;
