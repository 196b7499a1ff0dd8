//! Merge table keyed by hiragana reading.
//!
//! Candidates that share a reading are folded into one [`WordEntry`]:
//!
//! - a strictly higher score takes over `pos2`, `pos3`, `compound` and the
//!   score, but the surfaces collected so far are kept;
//! - an equal score appends its surface if it is new;
//! - a lower score is ignored entirely, surface included.

use std::collections::HashMap;

use serde::Serialize;
use shiritori_model::WordEntry;

use crate::filter::Candidate;

/// What a single [`MergeTable::offer`] did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeOutcome {
    /// First candidate for its reading.
    Inserted,
    /// Higher score replaced the entry's metadata.
    Promoted,
    /// Equal score added a new surface.
    Appended,
    /// Equal score, surface already present.
    Duplicate,
    /// Lower score, nothing changed.
    Dominated,
}

/// Build a fresh entry from an admitted candidate.
pub fn new_entry(candidate: &Candidate<'_>, score: u32) -> WordEntry {
    let row = candidate.row;
    WordEntry {
        reading: candidate.reading.clone(),
        surfaces: vec![row.surface.clone()],
        pos2: row.pos2.clone(),
        pos3: row.pos3.clone(),
        compound: row.compound.clone(),
        score,
    }
}

/// Fold a candidate into the existing entry for its reading.
pub fn merge_entry(existing: &mut WordEntry, candidate: &Candidate<'_>, score: u32) -> MergeOutcome {
    debug_assert_eq!(existing.reading, candidate.reading);
    let row = candidate.row;
    if score > existing.score {
        existing.pos2.clone_from(&row.pos2);
        existing.pos3.clone_from(&row.pos3);
        existing.compound = row.compound.clone();
        existing.score = score;
        MergeOutcome::Promoted
    } else if score == existing.score {
        if existing.surfaces.contains(&row.surface) {
            MergeOutcome::Duplicate
        } else {
            existing.surfaces.push(row.surface.clone());
            MergeOutcome::Appended
        }
    } else {
        MergeOutcome::Dominated
    }
}

/// Word entries in first-seen reading order, one per reading.
#[derive(Debug, Default)]
pub struct MergeTable {
    entries: Vec<WordEntry>,
    index: HashMap<String, usize>,
}

impl MergeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge an admitted candidate with the given score.
    pub fn offer(&mut self, candidate: &Candidate<'_>, score: u32) -> MergeOutcome {
        match self.index.get(&candidate.reading) {
            Some(&position) => merge_entry(&mut self.entries[position], candidate, score),
            None => {
                self.index
                    .insert(candidate.reading.clone(), self.entries.len());
                self.entries.push(new_entry(candidate, score));
                MergeOutcome::Inserted
            }
        }
    }

    pub fn get(&self, reading: &str) -> Option<&WordEntry> {
        self.index.get(reading).map(|&position| &self.entries[position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    /// Drain the table, keeping insertion order.
    pub fn into_entries(self) -> Vec<WordEntry> {
        self.entries
    }
}
