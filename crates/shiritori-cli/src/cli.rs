//! CLI argument definitions for the shiritori word-list tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use shiritori_model::{CompoundFilterMode, WordFilter};

/// Word list read by `lookup` and `random` when none is given.
pub const DEFAULT_DICTIONARY: &str = "best_shiritori_words.csv";

#[derive(Parser)]
#[command(
    name = "shiritori",
    version,
    about = "Shiritori word-list builder - Curate playable nouns from lexicon dumps",
    long_about = "Build a shiritori word list from UniDic-style lexicon CSV dumps.\n\n\
                  Keeps nouns with hiragana-only readings, drops numerals, person names,\n\
                  compound place names and words ending in ん, and merges entries that\n\
                  share a reading."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a word list from lexicon sources.
    Build(BuildArgs),

    /// Look up a reading in a built word list.
    Lookup(LookupArgs),

    /// Pick a random word starting with the given kana.
    Random(RandomArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Lexicon CSV files, processed in the order given.
    ///
    /// Defaults to small_lex.csv, core_lex.csv and notcore_lex.csv, or to the
    /// sources listed in --config.
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<PathBuf>,

    /// Output path for the word list.
    #[arg(short, long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML build configuration (sources, output, malformed_rows).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip rows with too few columns instead of aborting.
    #[arg(long = "skip-malformed")]
    pub skip_malformed: bool,

    /// Also write the build report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Options shared by commands that read a built word list.
#[derive(Args)]
pub struct DictionaryArgs {
    /// Word list produced by `build`.
    #[arg(long = "dictionary", value_name = "PATH", default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,

    /// Readings to leave out of initial-letter picks, one per line.
    #[arg(long = "ng-words", value_name = "PATH")]
    pub ng_words: Option<PathBuf>,

    /// Exclude proper nouns (place names and the like).
    #[arg(long = "no-proper-nouns")]
    pub no_proper_nouns: bool,

    /// Which compound classes to accept.
    #[arg(long = "compound", value_enum, default_value = "all")]
    pub compound: CompoundArg,
}

impl DictionaryArgs {
    pub fn word_filter(&self) -> WordFilter {
        WordFilter::new()
            .with_proper_nouns(!self.no_proper_nouns)
            .with_compound(self.compound.into())
    }
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Reading to look up (hiragana or katakana).
    #[arg(value_name = "READING")]
    pub reading: String,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

#[derive(Parser)]
pub struct RandomArgs {
    /// First kana of the word (hiragana or katakana).
    #[arg(value_name = "HEAD")]
    pub head: char,

    /// List every matching word instead of picking one.
    #[arg(long = "list")]
    pub list: bool,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// CLI compound filter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CompoundArg {
    /// Only A.
    Strict,
    /// A or B.
    Limited,
    /// Any class.
    All,
}

impl From<CompoundArg> for CompoundFilterMode {
    fn from(arg: CompoundArg) -> Self {
        match arg {
            CompoundArg::Strict => CompoundFilterMode::Strict,
            CompoundArg::Limited => CompoundFilterMode::Limited,
            CompoundArg::All => CompoundFilterMode::All,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
