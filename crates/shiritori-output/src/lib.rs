//! Word-list output.
//!
//! Writes a finished word list as UTF-8 CSV, one row per reading.
//!
//! The header row is kept exactly as existing consumers expect it, including
//! its column labels, which do not line up with the values written below
//! them (see [`HEADER`]).

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{HEADER, word_list_record, write_word_list, write_word_list_file};
