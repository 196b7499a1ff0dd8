use std::path::PathBuf;

use shiritori_core::BuildReport;
use shiritori_model::WordEntry;

#[derive(Debug)]
pub struct BuildResult {
    pub output: PathBuf,
    pub report: BuildReport,
    pub report_file: Option<PathBuf>,
}

/// Entries matched by `lookup` or `random`.
#[derive(Debug)]
pub struct QueryResult {
    pub dictionary: PathBuf,
    /// The query after katakana-to-hiragana normalization.
    pub query: String,
    pub entries: Vec<WordEntry>,
    /// Lookup hit a reading listed as an NG word.
    pub ng_word: bool,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
