//! Candidate priority used to pick between entries sharing a reading.

use shiritori_model::{CompoundClass, pos};

/// Contribution of a common-noun `pos2`.
pub const COMMON_NOUN_SCORE: u32 = 10;

/// Rank a candidate: common nouns first, then more atomic words.
///
/// Only the ordering matters; the values are not part of any output.
pub fn score(pos2: &str, compound: &CompoundClass) -> u32 {
    let pos_score = if pos2 == pos::COMMON_NOUN {
        COMMON_NOUN_SCORE
    } else {
        0
    };
    let compound_score = match compound {
        CompoundClass::A => 3,
        CompoundClass::B => 2,
        CompoundClass::C | CompoundClass::Other(_) => 1,
    };
    pos_score + compound_score
}
