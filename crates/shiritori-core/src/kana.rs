//! Kana script helpers.
//!
//! Lexicon readings are katakana, while word-list keys and the game itself
//! work in hiragana. The two blocks are laid out in parallel, so conversion is
//! a fixed code-point offset.

/// First katakana character with a hiragana counterpart (`ァ`).
pub const KATAKANA_START: char = '\u{30A1}';
/// Last katakana character with a hiragana counterpart (`ヶ`).
pub const KATAKANA_END: char = '\u{30F6}';
/// Distance from a katakana character to its hiragana counterpart.
const KATAKANA_TO_HIRAGANA: u32 = 0x60;

/// First hiragana character (`ぁ`).
pub const HIRAGANA_START: char = '\u{3041}';
/// Last hiragana character (`ゖ`).
pub const HIRAGANA_END: char = '\u{3096}';

/// Prolonged sound mark, shared by both scripts.
pub const PROLONGED_SOUND_MARK: char = 'ー';

/// Convert every katakana character to hiragana, leaving anything else as is.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars().map(to_hiragana).collect()
}

fn to_hiragana(ch: char) -> char {
    if (KATAKANA_START..=KATAKANA_END).contains(&ch) {
        // The offset lands inside the hiragana block for the whole range.
        char::from_u32(ch as u32 - KATAKANA_TO_HIRAGANA).unwrap_or(ch)
    } else {
        ch
    }
}

pub fn is_hiragana(ch: char) -> bool {
    (HIRAGANA_START..=HIRAGANA_END).contains(&ch) || ch == PROLONGED_SOUND_MARK
}

/// True when `text` is non-empty and made only of hiragana and `ー`.
pub fn is_hiragana_reading(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_hiragana)
}

/// Characters allowed in a written form: both kana blocks, CJK unified
/// ideographs and `ー`.
pub fn is_surface_char(ch: char) -> bool {
    matches!(ch,
        '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{4E00}'..='\u{9FFF}'
        | PROLONGED_SOUND_MARK)
}

/// True when `text` is non-empty and free of ASCII, symbols and other scripts.
pub fn is_valid_surface(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_surface_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_katakana() {
        assert_eq!(katakana_to_hiragana("ネコ"), "ねこ");
        assert_eq!(katakana_to_hiragana("ァヶ"), "ぁゖ");
        assert_eq!(katakana_to_hiragana("ヴァイオリン"), "ゔぁいおりん");
    }

    #[test]
    fn leaves_other_characters() {
        assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
        assert_eq!(katakana_to_hiragana("猫cat・"), "猫cat・");
        assert_eq!(katakana_to_hiragana("ヷ"), "ヷ");
        assert_eq!(katakana_to_hiragana(""), "");
    }

    #[test]
    fn preserves_length() {
        for text in ["ネコ", "ラーメン", "ａｂｃ", "ハングル한글"] {
            assert_eq!(
                katakana_to_hiragana(text).chars().count(),
                text.chars().count()
            );
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        for text in ["ねこ", "ネコ", "らーめん", "ハングル한글", "猫"] {
            let once = katakana_to_hiragana(text);
            assert_eq!(katakana_to_hiragana(&once), once);
        }
    }

    #[test]
    fn hiragana_reading_check() {
        assert!(is_hiragana_reading("ねこ"));
        assert!(is_hiragana_reading("らーめん"));
        assert!(!is_hiragana_reading(""));
        assert!(!is_hiragana_reading("ネコ"));
        assert!(!is_hiragana_reading("ねこ1"));
        assert!(!is_hiragana_reading("한글"));
    }

    #[test]
    fn surface_check() {
        assert!(is_valid_surface("猫"));
        assert!(is_valid_surface("ネコ"));
        assert!(is_valid_surface("ラーメン"));
        assert!(is_valid_surface("お茶"));
        assert!(!is_valid_surface(""));
        assert!(!is_valid_surface("Tシャツ"));
        assert!(!is_valid_surface("１号"));
        assert!(!is_valid_surface("猫!"));
    }
}
