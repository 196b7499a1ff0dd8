//! NG-word lists.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{DictionaryError, Result};

/// Parse an NG-word list: one reading per line, CR or LF separated.
pub fn parse_ng_words(text: &str) -> HashSet<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read an NG-word list from disk.
pub fn load_ng_words(path: &Path) -> Result<HashSet<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DictionaryError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DictionaryError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let words = parse_ng_words(&text);
    tracing::debug!(path = %path.display(), count = words.len(), "NG words loaded");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_line_ending() {
        let words = parse_ng_words("かめ\r\nねこ\rとり\n\n  \n");
        assert_eq!(words.len(), 3);
        assert!(words.contains("かめ"));
        assert!(words.contains("とり"));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_ng_words(&dir.path().join("ng_words.txt")).unwrap_err();
        assert!(matches!(err, DictionaryError::FileNotFound { .. }));
    }
}
