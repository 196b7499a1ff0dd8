//! Part-of-speech labels used by the lexicon dumps.
//!
//! The lexicon uses the UniDic tag set, so the labels are Japanese. Only the
//! handful the word-list rules look at are named here.

/// `pos1` value for nouns. Anything else (verbs, adjectives, ...) is dropped.
pub const NOUN: &str = "名詞";

/// `pos2` value for common nouns. Preferred when ranking candidates.
pub const COMMON_NOUN: &str = "普通名詞";

/// `pos2` value for proper nouns.
pub const PROPER_NOUN: &str = "固有名詞";

/// `pos2` value for numerals.
pub const NUMERAL: &str = "数詞";

/// `pos3` value for person names.
pub const PERSON_NAME: &str = "人名";

/// `pos3` value for place names.
pub const PLACE_NAME: &str = "地名";

/// `pos3` value for the general sub-class.
pub const GENERAL: &str = "一般";
