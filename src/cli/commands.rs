//! Command implementations for the Fuzzfix CLI.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use log::info;

use crate::analysis::text::{strip_html, tokenize};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::corrector::FuzzyCorrector;
use crate::spelling::levenshtein::EditDistance;

/// Execute a CLI command, writing to stdout.
pub fn execute_command(args: FuzzfixArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)
}

/// Execute a CLI command, writing to `out`.
pub fn execute_command_to<W: Write>(args: &FuzzfixArgs, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Correct(corpus_args) => correct(corpus_args, args, out),
        Command::Report(corpus_args) => report(corpus_args, args, out),
        Command::Stats(corpus_args) => stats(corpus_args, args, out),
        Command::Distance(distance_args) => distance(distance_args, args, out),
    }
}

/// Print the learned correction map, sorted by misspelling.
fn correct<W: Write>(corpus_args: &CorpusArgs, cli_args: &FuzzfixArgs, out: &mut W) -> Result<()> {
    let corrector = build_corrector(corpus_args)?;

    let entries: Vec<CorrectionEntry> = corrector
        .corrections()
        .sorted()
        .into_iter()
        .map(|(misspelling, correction)| CorrectionEntry {
            misspelling: misspelling.to_string(),
            correction: correction.to_string(),
            frequency: corrector.frequencies().frequency(misspelling),
        })
        .collect();

    output_result(
        &format!("Learned {} corrections", entries.len()),
        &entries,
        cli_args,
        out,
    )
}

/// Print each correction with its misspellings.
fn report<W: Write>(corpus_args: &CorpusArgs, cli_args: &FuzzfixArgs, out: &mut W) -> Result<()> {
    let corrector = build_corrector(corpus_args)?;

    let entries: Vec<ReportEntry> = corrector
        .misspellings_by_correction()
        .into_iter()
        .map(|(correction, misspellings)| ReportEntry {
            correction,
            count: misspellings.len(),
            misspellings,
        })
        .collect();

    output_result("Corrections and their misspellings", &entries, cli_args, out)
}

/// Print corrector statistics.
fn stats<W: Write>(corpus_args: &CorpusArgs, cli_args: &FuzzfixArgs, out: &mut W) -> Result<()> {
    let corrector = build_corrector(corpus_args)?;
    output_result("Corrector statistics", corrector.stats(), cli_args, out)
}

/// Print the distance and misspelling between two words.
fn distance<W: Write>(
    distance_args: &DistanceArgs,
    cli_args: &FuzzfixArgs,
    out: &mut W,
) -> Result<()> {
    let info = EditDistance::new(&distance_args.dictionary_word, &distance_args.word);
    let result = DistanceResult {
        dictionary_word: distance_args.dictionary_word.clone(),
        word: distance_args.word.clone(),
        distance: info.distance(),
        misspelling: info.misspelling(),
    };

    output_result("Edit distance", &result, cli_args, out)
}

/// Read the corpus and dictionary files and learn corrections from them.
fn build_corrector(corpus_args: &CorpusArgs) -> Result<FuzzyCorrector> {
    let config = corpus_args.corrector_config()?;

    let mut text = fs::read_to_string(&corpus_args.corpus)
        .with_context(|| format!("failed to read corpus {}", corpus_args.corpus.display()))?;
    if corpus_args.html {
        text = strip_html(&text);
    }
    let tokens = tokenize(&text);

    let dictionary = load_dictionary(&corpus_args.dictionary)?;
    info!(
        "loaded {} corpus tokens and {} dictionary words",
        tokens.len(),
        dictionary.len()
    );

    FuzzyCorrector::with_config(tokens, dictionary, config)
}

/// Load a dictionary file with one word per line, skipping blank lines.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
