//! Up-front checks on the configured lexicon sources.

use std::path::PathBuf;

use crate::error::{IngestError, Result};

/// Verify every source exists and is a regular file.
///
/// A build has no partial-success mode, so a missing source must fail
/// before the first row of any other source is read.
pub fn check_sources(sources: &[PathBuf]) -> Result<()> {
    for path in sources {
        if !path.exists() {
            return Err(IngestError::FileNotFound { path: path.clone() });
        }
        if !path.is_file() {
            return Err(IngestError::NotAFile { path: path.clone() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_all_present() {
        let dir = TempDir::new().unwrap();
        let small = dir.path().join("small_lex.csv");
        let core = dir.path().join("core_lex.csv");
        std::fs::write(&small, "").unwrap();
        std::fs::write(&core, "").unwrap();
        assert!(check_sources(&[small, core]).is_ok());
    }

    #[test]
    fn test_missing_source_named() {
        let dir = TempDir::new().unwrap();
        let small = dir.path().join("small_lex.csv");
        std::fs::write(&small, "").unwrap();
        let missing = dir.path().join("notcore_lex.csv");
        let err = check_sources(&[small, missing.clone()]).unwrap_err();
        match err {
            IngestError::FileNotFound { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_directory_is_not_a_source() {
        let dir = TempDir::new().unwrap();
        let err = check_sources(&[dir.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, IngestError::NotAFile { .. }));
    }
}
