//! In-memory word list for game-time lookups.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use rand::Rng;
use rand::seq::SliceRandom;
use shiritori_core::score;
use shiritori_model::entry::SURFACE_SEPARATOR;
use shiritori_model::{CompoundClass, WordEntry, WordFilter};
use tracing::{debug, info, warn};

use crate::error::{DictionaryError, Result};

/// Number of value columns in a word-list row.
const WORD_LIST_COLUMNS: usize = 5;

/// A loaded word list with a reading index and a head-character index.
///
/// NG words are removed from the head index only, so they are never offered
/// as random picks or initial-letter lists but are still found by direct
/// reading lookups.
#[derive(Debug, Default)]
pub struct ShiritoriDictionary {
    entries: Vec<WordEntry>,
    by_reading: HashMap<String, usize>,
    by_head: HashMap<char, Vec<usize>>,
    ng_words: HashSet<String>,
}

impl ShiritoriDictionary {
    /// Index entries as given. A later entry with the same reading replaces
    /// the earlier one in place.
    pub fn from_entries(entries: impl IntoIterator<Item = WordEntry>) -> Self {
        let mut dictionary = Self::default();
        for entry in entries {
            dictionary.insert(entry);
        }
        dictionary.rebuild_head_index();
        dictionary
    }

    /// Load a word list written by the build step.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DictionaryError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DictionaryError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let entries = read_entries(file).map_err(|source| DictionaryError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_entries(entries);
        info!(path = %path.display(), entries = dictionary.len(), "word list loaded");
        Ok(dictionary)
    }

    /// Load a word list from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::from_entries(read_entries(reader)?))
    }

    /// Exclude the given readings from the head index.
    pub fn with_ng_words(mut self, words: impl IntoIterator<Item = String>) -> Self {
        self.ng_words.extend(words);
        self.rebuild_head_index();
        debug!(ng_words = self.ng_words.len(), "NG words applied");
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_ng_word(&self, reading: &str) -> bool {
        self.ng_words.contains(reading)
    }

    pub fn get(&self, reading: &str) -> Option<&WordEntry> {
        self.by_reading
            .get(reading)
            .map(|&position| &self.entries[position])
    }

    pub fn has_reading(&self, reading: &str) -> bool {
        !reading.is_empty() && self.by_reading.contains_key(reading)
    }

    /// Surfaces for a reading, joined as written in the word list.
    pub fn surface(&self, reading: &str) -> Option<String> {
        self.get(reading).map(WordEntry::joined_surfaces)
    }

    pub fn has_reading_with(&self, reading: &str, filter: &WordFilter) -> bool {
        self.get(reading).is_some_and(|entry| filter.matches(entry))
    }

    pub fn surface_with(&self, reading: &str, filter: &WordFilter) -> Option<String> {
        self.get(reading)
            .filter(|entry| filter.matches(entry))
            .map(WordEntry::joined_surfaces)
    }

    /// Every playable word starting with `head`, in word-list order.
    pub fn list_by_initial(&self, head: char) -> Vec<&WordEntry> {
        self.by_head
            .get(&head)
            .map(|positions| positions.iter().map(|&p| &self.entries[p]).collect())
            .unwrap_or_default()
    }

    pub fn list_by_initial_with(&self, head: char, filter: &WordFilter) -> Vec<&WordEntry> {
        self.list_by_initial(head)
            .into_iter()
            .filter(|entry| filter.matches(entry))
            .collect()
    }

    pub fn random_by_initial<R: Rng + ?Sized>(&self, head: char, rng: &mut R) -> Option<&WordEntry> {
        self.list_by_initial(head).choose(rng).copied()
    }

    pub fn random_by_initial_with<R: Rng + ?Sized>(
        &self,
        head: char,
        filter: &WordFilter,
        rng: &mut R,
    ) -> Option<&WordEntry> {
        self.list_by_initial_with(head, filter).choose(rng).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    fn insert(&mut self, entry: WordEntry) {
        match self.by_reading.get(&entry.reading) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.by_reading
                    .insert(entry.reading.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    fn rebuild_head_index(&mut self) {
        self.by_head.clear();
        for (position, entry) in self.entries.iter().enumerate() {
            if self.ng_words.contains(&entry.reading) {
                continue;
            }
            if let Some(head) = entry.head() {
                self.by_head.entry(head).or_default().push(position);
            }
        }
    }
}

fn read_entries<R: Read>(reader: R) -> std::result::Result<Vec<WordEntry>, csv::Error> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut entries = Vec::new();
    let mut record = StringRecord::new();
    while csv.read_record(&mut record)? {
        let line = record.position().map_or(0, csv::Position::line);
        if record.len() < WORD_LIST_COLUMNS {
            warn!(line, fields = record.len(), "skipping short word-list row");
            continue;
        }
        if let Some(entry) = parse_entry(&record) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

fn parse_entry(record: &StringRecord) -> Option<WordEntry> {
    let reading = record[0].trim();
    if reading.is_empty() {
        return None;
    }
    let pos2 = record[2].trim().to_string();
    let compound = CompoundClass::parse(record[4].trim());
    Some(WordEntry {
        reading: reading.to_string(),
        surfaces: record[1]
            .trim()
            .split(SURFACE_SEPARATOR)
            .filter(|surface| !surface.is_empty())
            .map(str::to_string)
            .collect(),
        score: score(&pos2, &compound),
        pos2,
        pos3: record[3].trim().to_string(),
        compound,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use shiritori_model::CompoundFilterMode;

    const WORD_LIST: &str = "surface,reading,pos1,pos2,pos3,compound
かみ,紙/神,普通名詞,一般,A
かめ,亀,普通名詞,一般,B
かすみがうら,霞ケ浦,固有名詞,地名,A
かたまり,塊,普通名詞,一般,C
ねこ,猫,普通名詞,一般,A
";

    fn dictionary() -> ShiritoriDictionary {
        ShiritoriDictionary::from_reader(WORD_LIST.as_bytes()).unwrap()
    }

    #[test]
    fn loads_entries_and_splits_surfaces() {
        let dict = dictionary();
        assert_eq!(dict.len(), 5);
        let kami = dict.get("かみ").unwrap();
        assert_eq!(kami.surfaces, vec!["紙", "神"]);
        assert_eq!(kami.score, 13);
        assert_eq!(dict.surface("かみ").as_deref(), Some("紙/神"));
    }

    #[test]
    fn reading_lookups() {
        let dict = dictionary();
        assert!(dict.has_reading("ねこ"));
        assert!(!dict.has_reading("いぬ"));
        assert!(!dict.has_reading(""));
        assert_eq!(dict.surface("いぬ"), None);
    }

    #[test]
    fn filtered_lookups() {
        let dict = dictionary();
        let no_proper = WordFilter::new().with_proper_nouns(false);
        assert!(dict.has_reading("かすみがうら"));
        assert!(!dict.has_reading_with("かすみがうら", &no_proper));
        let strict = WordFilter::new().with_compound(CompoundFilterMode::Strict);
        assert_eq!(dict.surface_with("かめ", &strict), None);
        assert_eq!(dict.surface_with("かみ", &strict).as_deref(), Some("紙/神"));
    }

    #[test]
    fn unknown_compound_label_passes_only_unrestricted_filter() {
        let text = "surface,reading,pos1,pos2,pos3,compound\nかさ,傘,普通名詞,一般,*\n";
        let dict = ShiritoriDictionary::from_reader(text.as_bytes()).unwrap();
        assert_eq!(
            dict.get("かさ").unwrap().compound,
            CompoundClass::Other("*".to_string())
        );
        let all = WordFilter::new().with_compound(CompoundFilterMode::All);
        assert_eq!(dict.surface_with("かさ", &all).as_deref(), Some("傘"));
        assert_eq!(dict.list_by_initial_with('か', &all).len(), 1);
        let limited = WordFilter::new().with_compound(CompoundFilterMode::Limited);
        assert!(!dict.has_reading_with("かさ", &limited));
        let strict = WordFilter::new().with_compound(CompoundFilterMode::Strict);
        assert!(!dict.has_reading_with("かさ", &strict));
    }

    #[test]
    fn head_index_keeps_list_order() {
        let dict = dictionary();
        let readings: Vec<&str> = dict
            .list_by_initial('か')
            .iter()
            .map(|e| e.reading.as_str())
            .collect();
        assert_eq!(readings, vec!["かみ", "かめ", "かすみがうら", "かたまり"]);
        assert!(dict.list_by_initial('ぬ').is_empty());
    }

    #[test]
    fn filtered_initial_list() {
        let dict = dictionary();
        let limited = WordFilter::new()
            .with_proper_nouns(false)
            .with_compound(CompoundFilterMode::Limited);
        let readings: Vec<&str> = dict
            .list_by_initial_with('か', &limited)
            .iter()
            .map(|e| e.reading.as_str())
            .collect();
        assert_eq!(readings, vec!["かみ", "かめ"]);
    }

    #[test]
    fn ng_words_leave_index_but_not_lookup() {
        let dict = dictionary().with_ng_words(["かめ".to_string()]);
        assert!(dict.is_ng_word("かめ"));
        assert!(dict.has_reading("かめ"));
        assert!(dict.list_by_initial('か').iter().all(|e| e.reading != "かめ"));
        let all = WordFilter::new();
        assert!(
            dict.list_by_initial_with('か', &all)
                .iter()
                .all(|e| e.reading != "かめ")
        );
    }

    #[test]
    fn random_pick_starts_with_head() {
        let dict = dictionary();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let entry = dict.random_by_initial('か', &mut rng).unwrap();
            assert_eq!(entry.head(), Some('か'));
        }
        assert!(dict.random_by_initial('ぬ', &mut rng).is_none());
    }

    #[test]
    fn random_pick_respects_filter() {
        let dict = dictionary();
        let strict = WordFilter::new()
            .with_proper_nouns(false)
            .with_compound(CompoundFilterMode::Strict);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let entry = dict.random_by_initial_with('か', &strict, &mut rng).unwrap();
            assert_eq!(entry.reading, "かみ");
        }
    }

    #[test]
    fn short_and_empty_rows_are_skipped() {
        let text = "surface,reading,pos1,pos2,pos3,compound\nかみ,紙\n,空,普通名詞,一般,A\nねこ,猫,普通名詞,一般,A\n";
        let dict = ShiritoriDictionary::from_reader(text.as_bytes()).unwrap();
        assert_eq!(dict.len(), 1);
        assert!(dict.has_reading("ねこ"));
    }

    #[test]
    fn later_duplicate_replaces_in_place() {
        let text = "surface,reading,pos1,pos2,pos3,compound\nかみ,紙,普通名詞,一般,A\nねこ,猫,普通名詞,一般,A\nかみ,神,普通名詞,一般,B\n";
        let dict = ShiritoriDictionary::from_reader(text.as_bytes()).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.surface("かみ").as_deref(), Some("神"));
        let first: Vec<&str> = dict.iter().map(|e| e.reading.as_str()).collect();
        assert_eq!(first, vec!["かみ", "ねこ"]);
    }
}
