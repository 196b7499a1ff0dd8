//! Error types for word-list builds.

use std::path::PathBuf;

use shiritori_ingest::IngestError;
use thiserror::Error;

/// Errors that abort a build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A row too short to project, under the abort policy.
    #[error("malformed row in {path} at line {line}: {fields} fields, at least {required} required")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        fields: usize,
        required: usize,
    },
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
