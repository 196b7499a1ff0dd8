//! Configuration options for building and querying word lists.

use serde::{Deserialize, Serialize};

use crate::compound::CompoundClass;
use crate::entry::WordEntry;

/// What to do with a lexicon row that has too few fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRowPolicy {
    /// Stop the whole build on the first short row.
    #[default]
    Abort,
    /// Log a warning, count the row and keep going.
    Skip,
}

/// Options controlling a word-list build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    #[serde(default)]
    pub malformed_rows: MalformedRowPolicy,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }
}

/// How strict a query is about compound words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundFilterMode {
    /// Only `A`.
    Strict,
    /// `A` or `B`.
    Limited,
    /// No restriction.
    #[default]
    All,
}

impl CompoundFilterMode {
    pub fn allows(self, compound: &CompoundClass) -> bool {
        match self {
            Self::Strict => matches!(compound, CompoundClass::A),
            Self::Limited => matches!(compound, CompoundClass::A | CompoundClass::B),
            Self::All => true,
        }
    }
}

/// Conditions applied when looking words up in a built list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFilter {
    pub allow_proper_noun: bool,
    pub compound: CompoundFilterMode,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            allow_proper_noun: true,
            compound: CompoundFilterMode::All,
        }
    }
}

impl WordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proper_nouns(mut self, allow: bool) -> Self {
        self.allow_proper_noun = allow;
        self
    }

    pub fn with_compound(mut self, mode: CompoundFilterMode) -> Self {
        self.compound = mode;
        self
    }

    pub fn matches(&self, entry: &WordEntry) -> bool {
        if !self.allow_proper_noun && entry.is_proper_noun() {
            return false;
        }
        self.compound.allows(&entry.compound)
    }
}
