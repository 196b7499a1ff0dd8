//! Error types for lexicon ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading lexicon sources.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Lexicon file not found.
    #[error("lexicon file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file.
    #[error("lexicon source is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Failed to open or read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Encoding Errors ===
    /// File starts with a byte order mark for an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}, expected UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// A row is not valid UTF-8.
    #[error("invalid UTF-8 in {path} at line {line}")]
    InvalidEncoding { path: PathBuf, line: u64 },

    // === CSV Parsing Errors ===
    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
