//! Named projection of a lexicon CSV row.
//!
//! Lexicon dumps have no header row, so columns are addressed by position.
//! The positions below are the contract; field names are only for readability.

use serde::{Deserialize, Serialize};

use crate::compound::CompoundClass;
use crate::error::{ModelError, Result};

/// Column holding the written form.
pub const SURFACE_COLUMN: usize = 0;
/// Column holding the top-level part of speech.
pub const POS1_COLUMN: usize = 5;
/// Column holding the part-of-speech sub-category.
pub const POS2_COLUMN: usize = 6;
/// Column holding the semantic sub-class.
pub const POS3_COLUMN: usize = 7;
/// Column holding the katakana reading.
pub const READING_COLUMN: usize = 11;
/// Column holding the compound classification.
pub const COMPOUND_COLUMN: usize = 14;

/// Minimum number of fields a row needs for every column above to exist.
pub const REQUIRED_FIELDS: usize = COMPOUND_COLUMN + 1;

/// One lexicon entry, as read from a single CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconRow {
    pub surface: String,
    pub pos1: String,
    pub pos2: String,
    pub pos3: String,
    /// Reading in the source script (katakana).
    pub reading: String,
    pub compound: CompoundClass,
}

impl LexiconRow {
    /// Project the fixed columns out of a raw row.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ShortRow`] when the row has fewer than
    /// [`REQUIRED_FIELDS`] fields.
    pub fn from_fields(fields: &[&str]) -> Result<Self> {
        if fields.len() < REQUIRED_FIELDS {
            return Err(ModelError::ShortRow {
                fields: fields.len(),
                required: REQUIRED_FIELDS,
            });
        }
        Ok(Self {
            surface: fields[SURFACE_COLUMN].to_string(),
            pos1: fields[POS1_COLUMN].to_string(),
            pos2: fields[POS2_COLUMN].to_string(),
            pos3: fields[POS3_COLUMN].to_string(),
            reading: fields[READING_COLUMN].to_string(),
            compound: CompoundClass::parse(fields[COMPOUND_COLUMN]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unidic_fields() -> Vec<&'static str> {
        vec![
            "猫", "1", "1", "5000", "猫", "名詞", "普通名詞", "一般", "*", "*", "*", "ネコ",
            "猫", "猫", "A", "ネコ",
        ]
    }

    #[test]
    fn projects_fixed_columns() {
        let row = LexiconRow::from_fields(&unidic_fields()).unwrap();
        assert_eq!(row.surface, "猫");
        assert_eq!(row.pos1, "名詞");
        assert_eq!(row.pos2, "普通名詞");
        assert_eq!(row.pos3, "一般");
        assert_eq!(row.reading, "ネコ");
        assert_eq!(row.compound, CompoundClass::A);
    }

    #[test]
    fn exactly_required_fields_is_enough() {
        let fields = unidic_fields();
        let row = LexiconRow::from_fields(&fields[..REQUIRED_FIELDS]).unwrap();
        assert_eq!(row.compound, CompoundClass::A);
    }

    #[test]
    fn short_row_is_rejected() {
        let fields = unidic_fields();
        let err = LexiconRow::from_fields(&fields[..12]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShortRow {
                fields: 12,
                required: 15
            }
        ));
    }
}
