//! Build configuration: an optional TOML file with command-line overrides.
//!
//! ```toml
//! sources = ["small_lex.csv", "core_lex.csv", "notcore_lex.csv"]
//! output = "best_shiritori_words.csv"
//! malformed_rows = "skip"
//! ```
//!
//! Relative paths in the file are resolved against the file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shiritori_model::{BuildOptions, MalformedRowPolicy};

/// Lexicon dumps read when no sources are given, in merge order.
pub const DEFAULT_SOURCES: [&str; 3] = ["small_lex.csv", "core_lex.csv", "notcore_lex.csv"];

/// Word list written when no output is given.
pub const DEFAULT_OUTPUT: &str = "best_shiritori_words.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_sources")]
    pub sources: Vec<PathBuf>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(flatten)]
    pub options: BuildOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            output: default_output(),
            options: BuildOptions::default(),
        }
    }
}

/// Values given on the command line; `None` and empty mean "not given".
#[derive(Debug, Clone, Default)]
pub struct BuildOverrides {
    pub sources: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub skip_malformed: bool,
}

impl BuildConfig {
    /// Parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut config: Self =
            toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Load `path` if given, otherwise start from defaults, then apply overrides.
    pub fn resolve(path: Option<&Path>, overrides: BuildOverrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if !overrides.sources.is_empty() {
            config.sources = overrides.sources;
        }
        if let Some(output) = overrides.output {
            config.output = output;
        }
        if overrides.skip_malformed {
            config.options.malformed_rows = MalformedRowPolicy::Skip;
        }
        Ok(config)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for source in &mut self.sources {
            if source.is_relative() {
                *source = base.join(&*source);
            }
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
    }
}

fn default_sources() -> Vec<PathBuf> {
    DEFAULT_SOURCES.iter().map(PathBuf::from).collect()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_lexicon_layout() {
        let config = BuildConfig::default();
        assert_eq!(
            config.sources,
            vec![
                PathBuf::from("small_lex.csv"),
                PathBuf::from("core_lex.csv"),
                PathBuf::from("notcore_lex.csv"),
            ]
        );
        assert_eq!(config.output, PathBuf::from("best_shiritori_words.csv"));
        assert_eq!(config.options.malformed_rows, MalformedRowPolicy::Abort);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: BuildConfig = toml::from_str("malformed_rows = \"skip\"").unwrap();
        assert_eq!(config.sources.len(), 3);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.options.malformed_rows, MalformedRowPolicy::Skip);
    }

    #[test]
    fn overrides_win() {
        let config = BuildConfig::resolve(
            None,
            BuildOverrides {
                sources: vec![PathBuf::from("a.csv")],
                output: Some(PathBuf::from("out.csv")),
                skip_malformed: true,
            },
        )
        .unwrap();
        assert_eq!(config.sources, vec![PathBuf::from("a.csv")]);
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.options.malformed_rows, MalformedRowPolicy::Skip);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result: std::result::Result<BuildConfig, _> = toml::from_str("malformed_rows = \"retry\"");
        assert!(result.is_err());
    }
}
