//! Game-time lookups over a built shiritori word list.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use shiritori_dictionary::{ShiritoriDictionary, load_ng_words};
//! use shiritori_model::{CompoundFilterMode, WordFilter};
//!
//! let dict = ShiritoriDictionary::load(Path::new("best_shiritori_words.csv"))?
//!     .with_ng_words(load_ng_words(Path::new("ng_words.txt"))?);
//! let filter = WordFilter::new().with_compound(CompoundFilterMode::Limited);
//! let next = dict.random_by_initial_with('か', &filter, &mut rand::thread_rng());
//! ```

mod dictionary;
mod error;
mod ng_words;

pub use dictionary::ShiritoriDictionary;
pub use error::{DictionaryError, Result};
pub use ng_words::{load_ng_words, parse_ng_words};
