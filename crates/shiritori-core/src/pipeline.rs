//! Word-list build pipeline.
//!
//! Rows flow through four stages:
//!
//! 1. **Normalize**: katakana reading to hiragana merge key
//! 2. **Filter**: the admission rules in [`crate::filter`]
//! 3. **Score**: [`crate::score::score`]
//! 4. **Merge**: fold into the [`MergeTable`]
//!
//! Sources are processed strictly in the order given, rows in file order.
//! Row order matters: it decides surface order on ties.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use shiritori_ingest::{LexiconReader, LexiconRecord, check_sources};
use shiritori_model::{BuildOptions, LexiconRow, MalformedRowPolicy, REQUIRED_FIELDS, WordEntry};
use tracing::{debug, info, info_span, trace, warn};

use crate::error::{BuildError, Result};
use crate::filter::{Candidate, Rejection, admit};
use crate::merge::{MergeOutcome, MergeTable};
use crate::score::score;

/// Result of offering one row to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Rejected(Rejection),
    Merged(MergeOutcome),
}

/// Row counts for a single lexicon source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceReport {
    pub path: PathBuf,
    /// Rows with every required column.
    pub rows: usize,
    /// Short rows skipped under [`MalformedRowPolicy::Skip`].
    pub malformed: usize,
    pub admitted: usize,
    pub rejected: usize,
}

/// How admitted candidates landed in the merge table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeCounts {
    pub inserted: usize,
    pub promoted: usize,
    pub appended: usize,
    pub duplicate: usize,
    pub dominated: usize,
}

impl MergeCounts {
    pub fn record(&mut self, outcome: MergeOutcome) {
        let slot = match outcome {
            MergeOutcome::Inserted => &mut self.inserted,
            MergeOutcome::Promoted => &mut self.promoted,
            MergeOutcome::Appended => &mut self.appended,
            MergeOutcome::Duplicate => &mut self.duplicate,
            MergeOutcome::Dominated => &mut self.dominated,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.inserted + self.promoted + self.appended + self.duplicate + self.dominated
    }
}

/// Summary of a whole build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub sources: Vec<SourceReport>,
    pub rejections: BTreeMap<Rejection, usize>,
    pub merges: MergeCounts,
    pub entries: usize,
}

impl BuildReport {
    pub fn total_rows(&self) -> usize {
        self.sources.iter().map(|source| source.rows).sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.rejections.values().sum()
    }

    pub fn rejected_for(&self, reason: Rejection) -> usize {
        self.rejections.get(&reason).copied().unwrap_or(0)
    }
}

/// Finished word list with its build summary.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Entries in first-seen reading order.
    pub entries: Vec<WordEntry>,
    pub report: BuildReport,
}

/// Accumulates lexicon rows into a word list.
#[derive(Debug, Default)]
pub struct WordListBuilder {
    options: BuildOptions,
    table: MergeTable,
    report: BuildReport,
}

impl WordListBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Run one row through normalize, filter, score and merge.
    pub fn offer(&mut self, row: &LexiconRow) -> Admission {
        let candidate = Candidate::from_row(row);
        if let Err(rejection) = admit(&candidate) {
            *self.report.rejections.entry(rejection).or_insert(0) += 1;
            trace!(surface = %row.surface, reading = %candidate.reading, %rejection, "rejected");
            return Admission::Rejected(rejection);
        }
        let outcome = self
            .table
            .offer(&candidate, score(&row.pos2, &row.compound));
        self.report.merges.record(outcome);
        Admission::Merged(outcome)
    }

    /// Read every row of one lexicon file.
    ///
    /// # Errors
    ///
    /// Fails on I/O and encoding errors, and on short rows under
    /// [`MalformedRowPolicy::Abort`].
    pub fn add_source(&mut self, path: &Path) -> Result<SourceReport> {
        let span = info_span!("source", path = %path.display());
        let _guard = span.enter();
        let start = Instant::now();
        info!("loading lexicon source");

        let mut source = SourceReport {
            path: path.to_path_buf(),
            ..SourceReport::default()
        };
        let mut reasons: BTreeMap<Rejection, usize> = BTreeMap::new();
        let mut reader = LexiconReader::open(path)?;
        for record in reader.records() {
            match record? {
                LexiconRecord::Short { line, fields } => match self.options.malformed_rows {
                    MalformedRowPolicy::Abort => {
                        return Err(BuildError::MalformedRow {
                            path: path.to_path_buf(),
                            line,
                            fields,
                            required: REQUIRED_FIELDS,
                        });
                    }
                    MalformedRowPolicy::Skip => {
                        warn!(line, fields, required = REQUIRED_FIELDS, "skipping malformed row");
                        source.malformed += 1;
                    }
                },
                LexiconRecord::Row { row, .. } => {
                    source.rows += 1;
                    match self.offer(&row) {
                        Admission::Merged(_) => source.admitted += 1,
                        Admission::Rejected(reason) => {
                            source.rejected += 1;
                            *reasons.entry(reason).or_insert(0) += 1;
                        }
                    }
                }
            }
        }

        for (reason, count) in &reasons {
            debug!(reason = %reason, count, "rejected rows");
        }
        info!(
            rows = source.rows,
            admitted = source.admitted,
            rejected = source.rejected,
            malformed = source.malformed,
            entries = self.table.len(),
            duration_ms = start.elapsed().as_millis(),
            "lexicon source loaded"
        );
        self.report.sources.push(source.clone());
        Ok(source)
    }

    /// Drain the merge table into a word list.
    pub fn finish(mut self) -> WordList {
        self.report.entries = self.table.len();
        WordList {
            entries: self.table.into_entries(),
            report: self.report,
        }
    }
}

/// Build a word list from the given sources, in order.
///
/// Every source is checked before any is read, so a missing file fails the
/// build without partial work.
pub fn build_word_list(sources: &[PathBuf], options: &BuildOptions) -> Result<WordList> {
    check_sources(sources)?;
    let mut builder = WordListBuilder::new(options.clone());
    for path in sources {
        builder.add_source(path)?;
    }
    let list = builder.finish();
    info!(
        sources = sources.len(),
        rows = list.report.total_rows(),
        entries = list.entries.len(),
        "word list built"
    );
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiritori_model::{CompoundClass, pos};

    fn noun(surface: &str, reading: &str) -> LexiconRow {
        LexiconRow {
            surface: surface.to_string(),
            pos1: pos::NOUN.to_string(),
            pos2: pos::COMMON_NOUN.to_string(),
            pos3: pos::GENERAL.to_string(),
            reading: reading.to_string(),
            compound: CompoundClass::A,
        }
    }

    #[test]
    fn offer_counts_rejections_and_merges() {
        let mut builder = WordListBuilder::new(BuildOptions::new());
        assert_eq!(
            builder.offer(&noun("猫", "ネコ")),
            Admission::Merged(MergeOutcome::Inserted)
        );
        assert_eq!(
            builder.offer(&noun("本", "ホン")),
            Admission::Rejected(Rejection::EndsWithN)
        );
        assert_eq!(
            builder.offer(&noun("ねこ", "ネコ")),
            Admission::Merged(MergeOutcome::Appended)
        );
        let list = builder.finish();
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.report.entries, 1);
        assert_eq!(list.report.rejected_for(Rejection::EndsWithN), 1);
        assert_eq!(list.report.merges.inserted, 1);
        assert_eq!(list.report.merges.appended, 1);
        assert_eq!(list.report.merges.total(), 2);
    }

    #[test]
    fn report_serializes_rejection_keys() {
        let mut builder = WordListBuilder::new(BuildOptions::new());
        builder.offer(&noun("本", "ホン"));
        let report = builder.finish().report;
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rejections"]["ends_with_n"], 1);
        assert_eq!(json["merges"]["inserted"], 0);
    }
}
