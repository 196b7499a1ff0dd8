use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use shiritori_cli::config::{BuildConfig, BuildOverrides};
use shiritori_core::{BuildReport, build_word_list, katakana_to_hiragana};
use shiritori_dictionary::{ShiritoriDictionary, load_ng_words};
use shiritori_output::write_word_list_file;
use tracing::{info, info_span};

use crate::cli::{BuildArgs, DictionaryArgs, LookupArgs, RandomArgs};
use crate::types::{BuildResult, QueryResult};

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let config = BuildConfig::resolve(
        args.config.as_deref(),
        BuildOverrides {
            sources: args.sources.clone(),
            output: args.output.clone(),
            skip_malformed: args.skip_malformed,
        },
    )?;
    let span = info_span!("build", output = %config.output.display());
    let _guard = span.enter();

    let list = build_word_list(&config.sources, &config.options).context("build word list")?;
    write_word_list_file(&config.output, &list.entries)
        .with_context(|| format!("write word list {}", config.output.display()))?;
    if let Some(path) = &args.report {
        write_report(path, &list.report)?;
    }
    Ok(BuildResult {
        output: config.output,
        report: list.report,
        report_file: args.report.clone(),
    })
}

pub fn run_lookup(args: &LookupArgs) -> Result<QueryResult> {
    let dictionary = load_dictionary(&args.dictionary)?;
    let filter = args.dictionary.word_filter();
    let query = katakana_to_hiragana(args.reading.trim());
    let entries = dictionary
        .get(&query)
        .filter(|entry| filter.matches(entry))
        .cloned()
        .into_iter()
        .collect();
    Ok(QueryResult {
        dictionary: args.dictionary.dictionary.clone(),
        ng_word: dictionary.is_ng_word(&query),
        query,
        entries,
    })
}

pub fn run_random(args: &RandomArgs) -> Result<QueryResult> {
    let dictionary = load_dictionary(&args.dictionary)?;
    let filter = args.dictionary.word_filter();
    let query = katakana_to_hiragana(&args.head.to_string());
    let head = query.chars().next().unwrap_or(args.head);
    let entries = if args.list {
        dictionary
            .list_by_initial_with(head, &filter)
            .into_iter()
            .cloned()
            .collect()
    } else {
        dictionary
            .random_by_initial_with(head, &filter, &mut rand::thread_rng())
            .cloned()
            .into_iter()
            .collect()
    };
    Ok(QueryResult {
        dictionary: args.dictionary.dictionary.clone(),
        query,
        entries,
        ng_word: false,
    })
}

fn load_dictionary(args: &DictionaryArgs) -> Result<ShiritoriDictionary> {
    let mut dictionary = ShiritoriDictionary::load(&args.dictionary)
        .with_context(|| format!("load word list {}", args.dictionary.display()))?;
    if let Some(path) = &args.ng_words {
        let words = load_ng_words(path)
            .with_context(|| format!("load NG words {}", path.display()))?;
        dictionary = dictionary.with_ng_words(words);
    }
    Ok(dictionary)
}

fn write_report(path: &Path, report: &BuildReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize build report")?;
    fs::write(path, json).with_context(|| format!("write build report {}", path.display()))?;
    info!(path = %path.display(), "build report written");
    Ok(())
}
