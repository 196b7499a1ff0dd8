//! Error types for word-list output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a word list.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the parent directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output file.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a CSV record.
    #[error("failed to write word list: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to flush buffered output.
    #[error("failed to flush word list: {0}")]
    Flush(#[source] std::io::Error),
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
