//! Lexicon ingestion.
//!
//! This crate reads morphological-lexicon dumps (UniDic-style CSV files
//! without a header row) and turns each row into a [`LexiconRecord`].
//!
//! # Features
//!
//! - **Positional reading**: Columns are addressed by index, not by header
//! - **Encoding checks**: UTF-16 files and invalid UTF-8 are reported with the
//!   offending file and line
//! - **Source checks**: Every configured source is verified before any row is read
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use shiritori_ingest::{LexiconReader, LexiconRecord};
//!
//! let mut reader = LexiconReader::open(Path::new("small_lex.csv"))?;
//! for record in reader.records() {
//!     if let LexiconRecord::Row { row, .. } = record? {
//!         println!("{} {}", row.surface, row.reading);
//!     }
//! }
//! ```

mod error;
mod reader;
mod sources;

// === Error Types ===
pub use error::{IngestError, Result};

// === Lexicon Reading ===
pub use reader::{LexiconReader, LexiconRecord, LexiconRecords, validate_encoding};

// === Source Checks ===
pub use sources::check_sources;
