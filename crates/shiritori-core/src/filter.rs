//! Admission rules for lexicon candidates.
//!
//! Each rule is an independent predicate over a [`Candidate`]. A candidate is
//! admitted only when every rule accepts it; the first failing rule names the
//! [`Rejection`]. Rules run in [`Rejection::ALL`] order.

use std::fmt;

use serde::Serialize;
use shiritori_model::{LexiconRow, pos};

use crate::kana::{is_hiragana_reading, is_valid_surface, katakana_to_hiragana};

/// Terminal sound that ends a game of shiritori. Words ending in it are never
/// playable.
pub const FORBIDDEN_TERMINAL: char = 'ん';

/// A lexicon row paired with its hiragana reading.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub row: &'a LexiconRow,
    /// Hiragana form of `row.reading`. This is the merge key.
    pub reading: String,
}

impl<'a> Candidate<'a> {
    pub fn from_row(row: &'a LexiconRow) -> Self {
        Self {
            row,
            reading: katakana_to_hiragana(&row.reading),
        }
    }
}

/// Why a candidate was left out of the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// `pos1` is not a noun.
    NotNoun,
    /// `pos2` is a numeral.
    Numeral,
    /// `pos3` is a person name.
    PersonName,
    /// Place name that is not classified `A`.
    CompoundPlaceName,
    /// Reading contains something other than hiragana and `ー`.
    NonHiraganaReading,
    /// Surface contains ASCII, symbols or a script outside kana/kanji.
    InvalidSurface,
    /// Reading ends with `ん`.
    EndsWithN,
}

impl Rejection {
    /// Every reason, in rule order.
    pub const ALL: [Rejection; 7] = [
        Rejection::NotNoun,
        Rejection::Numeral,
        Rejection::PersonName,
        Rejection::CompoundPlaceName,
        Rejection::NonHiraganaReading,
        Rejection::InvalidSurface,
        Rejection::EndsWithN,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::NotNoun => "not a noun",
            Self::Numeral => "numeral",
            Self::PersonName => "person name",
            Self::CompoundPlaceName => "compound place name",
            Self::NonHiraganaReading => "non-hiragana reading",
            Self::InvalidSurface => "invalid surface",
            Self::EndsWithN => "ends with ん",
        }
    }

    /// Returns true when the candidate passes this rule.
    pub fn accepts(self, candidate: &Candidate<'_>) -> bool {
        let row = candidate.row;
        match self {
            Self::NotNoun => row.pos1 == pos::NOUN,
            Self::Numeral => row.pos2 != pos::NUMERAL,
            Self::PersonName => row.pos3 != pos::PERSON_NAME,
            Self::CompoundPlaceName => row.pos3 != pos::PLACE_NAME || row.compound.is_top_rank(),
            Self::NonHiraganaReading => is_hiragana_reading(&candidate.reading),
            Self::InvalidSurface => is_valid_surface(&row.surface),
            Self::EndsWithN => !candidate.reading.ends_with(FORBIDDEN_TERMINAL),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Run the rule chain, stopping at the first rule that fails.
pub fn admit(candidate: &Candidate<'_>) -> Result<(), Rejection> {
    match Rejection::ALL
        .into_iter()
        .find(|rule| !rule.accepts(candidate))
    {
        Some(rejection) => Err(rejection),
        None => Ok(()),
    }
}
