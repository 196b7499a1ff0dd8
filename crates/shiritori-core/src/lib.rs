//! Shiritori word-list building.
//!
//! Turns morphological-lexicon rows into a list of playable nouns keyed by
//! hiragana reading. See [`pipeline`] for the stage order.

pub mod error;
pub mod filter;
pub mod kana;
pub mod merge;
pub mod pipeline;
pub mod score;

pub use error::{BuildError, Result};
pub use filter::{Candidate, FORBIDDEN_TERMINAL, Rejection, admit};
pub use kana::{is_hiragana_reading, is_valid_surface, katakana_to_hiragana};
pub use merge::{MergeOutcome, MergeTable, merge_entry};
pub use pipeline::{
    Admission, BuildReport, MergeCounts, SourceReport, WordList, WordListBuilder, build_word_list,
};
pub use score::score;
