//! Reading back word lists produced by the build step.

use shiritori_core::WordListBuilder;
use shiritori_dictionary::ShiritoriDictionary;
use shiritori_model::{BuildOptions, CompoundClass, LexiconRow, WordFilter, pos};
use shiritori_output::write_word_list;

fn noun(surface: &str, pos2: &str, reading: &str, compound: CompoundClass) -> LexiconRow {
    LexiconRow {
        surface: surface.to_string(),
        pos1: pos::NOUN.to_string(),
        pos2: pos2.to_string(),
        pos3: pos::GENERAL.to_string(),
        reading: reading.to_string(),
        compound,
    }
}

#[test]
fn test_built_list_is_readable_by_position() {
    let mut builder = WordListBuilder::new(BuildOptions::new());
    builder.offer(&noun("紙", pos::COMMON_NOUN, "カミ", CompoundClass::A));
    builder.offer(&noun("神", pos::COMMON_NOUN, "カミ", CompoundClass::A));
    builder.offer(&noun("亀", pos::COMMON_NOUN, "カメ", CompoundClass::B));
    builder.offer(&noun("伊豆", pos::PROPER_NOUN, "イズ", CompoundClass::A));
    let list = builder.finish();

    let mut buffer = Vec::new();
    write_word_list(&mut buffer, &list.entries).unwrap();
    let dict = ShiritoriDictionary::from_reader(buffer.as_slice()).unwrap();

    assert_eq!(dict.len(), 3);
    assert_eq!(dict.surface("かみ").as_deref(), Some("紙/神"));
    assert_eq!(dict.get("かめ").unwrap().compound, CompoundClass::B);
    assert!(dict.get("いず").unwrap().is_proper_noun());
    let no_proper = WordFilter::new().with_proper_nouns(false);
    assert!(!dict.has_reading_with("いず", &no_proper));
    for entry in &list.entries {
        assert_eq!(dict.get(&entry.reading).unwrap().score, entry.score);
    }
}
