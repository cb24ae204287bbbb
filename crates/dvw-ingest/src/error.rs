//! Error types for play log ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a play log or roster.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size})")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Roster row could not be interpreted.
    #[error("invalid roster row {row} in {path}: {message}")]
    RosterRow {
        path: PathBuf,
        row: usize,
        message: String,
    },

    // === Play Log Errors ===
    /// Required play log columns are absent.
    #[error("play log is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl IngestError {
    /// Map an I/O error for `path`, distinguishing a missing file.
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
