//! Error types for word-list lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a word list or NG-word file.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Word list or NG-word file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the word-list CSV.
    #[error("failed to read word list {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to parse word-list CSV from an in-memory reader.
    #[error("failed to read word list: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for dictionary operations.
pub type Result<T> = std::result::Result<T, DictionaryError>;
