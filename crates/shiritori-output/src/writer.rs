//! CSV writer for word lists.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use shiritori_model::WordEntry;

use crate::error::{OutputError, Result};

/// Header row of the word list.
///
/// The values under it are `reading, surfaces, pos2, pos3, compound`: the
/// first two labels are swapped relative to their contents and there is no
/// `pos1` value. Readers rely on column positions, so this is left as is.
pub const HEADER: [&str; 6] = ["surface", "reading", "pos1", "pos2", "pos3", "compound"];

/// Values written for one entry, in column order.
pub fn word_list_record(entry: &WordEntry) -> [String; 5] {
    [
        entry.reading.clone(),
        entry.joined_surfaces(),
        entry.pos2.clone(),
        entry.pos3.clone(),
        entry.compound.to_string(),
    ]
}

/// Write the header and one row per entry, in the order given. Lines end
/// with CRLF.
pub fn write_word_list<W: Write>(writer: W, entries: &[WordEntry]) -> Result<()> {
    // Header and rows differ in width.
    let mut csv = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(writer);
    csv.write_record(HEADER)?;
    for entry in entries {
        csv.write_record(word_list_record(entry))?;
    }
    csv.flush().map_err(OutputError::Flush)?;
    Ok(())
}

/// Write a word list to `path`, creating parent directories as needed.
pub fn write_word_list_file(path: &Path, entries: &[WordEntry]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_word_list(file, entries)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "word list written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiritori_model::{CompoundClass, pos};

    fn entry(reading: &str, surfaces: &[&str], compound: CompoundClass) -> WordEntry {
        WordEntry {
            reading: reading.to_string(),
            surfaces: surfaces.iter().map(|s| (*s).to_string()).collect(),
            pos2: pos::COMMON_NOUN.to_string(),
            pos3: pos::GENERAL.to_string(),
            compound,
            score: 13,
        }
    }

    fn render(entries: &[WordEntry]) -> String {
        let mut buffer = Vec::new();
        write_word_list(&mut buffer, entries).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn writes_header_then_rows_in_order() {
        let output = render(&[
            entry("ねこ", &["猫"], CompoundClass::A),
            entry("いぬ", &["犬", "イヌ"], CompoundClass::A),
            entry("とり", &["鳥"], CompoundClass::C),
        ]);
        insta::assert_snapshot!(output.replace("\r\n", "\n").trim_end(), @r"
        surface,reading,pos1,pos2,pos3,compound
        ねこ,猫,普通名詞,一般,A
        いぬ,犬/イヌ,普通名詞,一般,A
        とり,鳥,普通名詞,一般,C
        ");
    }

    #[test]
    fn empty_list_is_header_only() {
        assert_eq!(render(&[]), "surface,reading,pos1,pos2,pos3,compound\r\n");
    }

    #[test]
    fn unknown_compound_label_written_verbatim() {
        let output = render(&[entry("かさ", &["傘"], CompoundClass::Other("*".into()))]);
        assert!(output.ends_with("かさ,傘,普通名詞,一般,*\r\n"));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("best_shiritori_words.csv");
        write_word_list_file(&path, &[entry("ねこ", &["猫"], CompoundClass::A)]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn every_line_ends_with_crlf() {
        let output = render(&[
            entry("ねこ", &["猫"], CompoundClass::A),
            entry("とり", &["鳥"], CompoundClass::C),
        ]);
        assert_eq!(output.matches("\r\n").count(), 3);
        assert_eq!(output.matches('\n').count(), 3);
    }

    #[test]
    fn parent_that_is_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let err = write_word_list_file(
            &blocker.join("words.csv"),
            &[entry("ねこ", &["猫"], CompoundClass::A)],
        )
        .unwrap_err();
        match err {
            OutputError::CreateDir { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }
}
