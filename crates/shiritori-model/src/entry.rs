use serde::{Deserialize, Serialize};

use crate::compound::CompoundClass;
use crate::pos;

/// Separator used when several surfaces share one reading in the word list.
pub const SURFACE_SEPARATOR: &str = "/";

/// One word of the finished list, keyed by its hiragana reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Hiragana reading. Unique within a word list.
    pub reading: String,
    /// Distinct written forms in first-seen order.
    pub surfaces: Vec<String>,
    pub pos2: String,
    pub pos3: String,
    pub compound: CompoundClass,
    /// Priority of the metadata currently held. Not part of the CSV output.
    #[serde(default)]
    pub score: u32,
}

impl WordEntry {
    /// Surfaces joined with [`SURFACE_SEPARATOR`], as written to the word list.
    pub fn joined_surfaces(&self) -> String {
        self.surfaces.join(SURFACE_SEPARATOR)
    }

    pub fn is_proper_noun(&self) -> bool {
        self.pos2 == pos::PROPER_NOUN
    }

    /// First character of the reading, used for chaining.
    pub fn head(&self) -> Option<char> {
        self.reading.chars().next()
    }
}
