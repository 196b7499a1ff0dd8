pub mod compound;
pub mod entry;
pub mod error;
pub mod lexicon;
pub mod options;
pub mod pos;

pub use compound::CompoundClass;
pub use entry::WordEntry;
pub use error::{ModelError, Result};
pub use lexicon::{LexiconRow, REQUIRED_FIELDS};
pub use options::{BuildOptions, CompoundFilterMode, MalformedRowPolicy, WordFilter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_entry_serializes() {
        let entry = WordEntry {
            reading: "ねこ".to_string(),
            surfaces: vec!["猫".to_string(), "ネコ".to_string()],
            pos2: pos::COMMON_NOUN.to_string(),
            pos3: pos::GENERAL.to_string(),
            compound: CompoundClass::A,
            score: 13,
        };
        let json = serde_json::to_string(&entry).expect("serialize entry");
        let round: WordEntry = serde_json::from_str(&json).expect("deserialize entry");
        assert_eq!(round, entry);
        assert!(json.contains("\"compound\":\"A\""));
    }
}
