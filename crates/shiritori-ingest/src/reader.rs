//! Positional CSV reading for lexicon dumps.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use shiritori_model::{LexiconRow, ModelError};

use crate::error::{IngestError, Result};

/// One physical record of a lexicon file.
///
/// Empty lines never show up here: the CSV reader skips them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconRecord {
    /// A row with every required column present.
    Row { line: u64, row: LexiconRow },
    /// A row with too few fields to project, whitespace-only lines included.
    Short { line: u64, fields: usize },
}

/// Reader over a single lexicon source.
pub struct LexiconReader {
    path: PathBuf,
    inner: csv::Reader<File>,
}

impl LexiconReader {
    /// Open a lexicon file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be opened, or
    /// starts with a UTF-16 byte order mark.
    pub fn open(path: &Path) -> Result<Self> {
        validate_encoding(path)?;
        let file = open_file(path)?;
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);
        tracing::debug!(path = %path.display(), "opened lexicon source");
        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Iterate records in file order.
    pub fn records(&mut self) -> LexiconRecords<'_> {
        LexiconRecords {
            reader: self,
            record: StringRecord::new(),
            first: true,
        }
    }
}

/// Iterator returned by [`LexiconReader::records`].
pub struct LexiconRecords<'a> {
    reader: &'a mut LexiconReader,
    record: StringRecord,
    first: bool,
}

impl Iterator for LexiconRecords<'_> {
    type Item = Result<LexiconRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.inner.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let first = std::mem::replace(&mut self.first, false);
                Some(Ok(classify(&self.record, first)))
            }
            Err(err) => Some(Err(map_csv_error(&self.reader.path, err))),
        }
    }
}

fn classify(record: &StringRecord, first: bool) -> LexiconRecord {
    let line = record.position().map_or(0, csv::Position::line);
    let mut fields: Vec<&str> = record.iter().collect();
    if first && let Some(field) = fields.first_mut() {
        *field = field.trim_start_matches('\u{feff}');
    }
    match LexiconRow::from_fields(&fields) {
        Ok(row) => LexiconRecord::Row { line, row },
        Err(ModelError::ShortRow { fields, .. }) => LexiconRecord::Short { line, fields },
    }
}

fn map_csv_error(path: &Path, err: csv::Error) -> IngestError {
    if let csv::ErrorKind::Utf8 { pos, .. } = err.kind() {
        return IngestError::InvalidEncoding {
            path: path.to_path_buf(),
            line: pos.as_ref().map_or(0, csv::Position::line),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source: err,
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported. Invalid UTF-8
/// further into the file is reported per line while reading.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open_file(path)?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}
