//! Command line argument parsing for the Fuzzfix CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::config::CorrectorConfig;

/// Fuzzfix - learn spelling corrections from a corpus and a dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "fuzzfix")]
#[command(about = "Learn spelling corrections from a corpus and a reference dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FuzzfixArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FuzzfixArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the learned misspelling -> correction map
    Correct(CorpusArgs),

    /// Print each correction with the misspellings mapped to it
    Report(CorpusArgs),

    /// Print statistics gathered while learning corrections
    Stats(CorpusArgs),

    /// Print the edit distance and misspelling between two words
    Distance(DistanceArgs),
}

/// Arguments shared by commands that learn from a corpus
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Corpus text file
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Dictionary file with one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Strip HTML tags from the corpus before tokenizing
    #[arg(long)]
    pub html: bool,

    /// Override the frequency ratio a correction must reach
    #[arg(long)]
    pub ratio: Option<usize>,

    /// Override the k-gram length
    #[arg(long)]
    pub kgram_size: Option<usize>,

    /// Retrieve candidates in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl CorpusArgs {
    /// Resolve the corrector configuration from the config file and flag overrides.
    pub fn corrector_config(&self) -> Result<CorrectorConfig> {
        let mut config = match &self.config {
            Some(path) => CorrectorConfig::load_from_file(path)?,
            None => CorrectorConfig::default(),
        };

        if let Some(ratio) = self.ratio {
            config.misspell_ratio = ratio;
        }
        if let Some(kgram_size) = self.kgram_size {
            config.kgram_size = kgram_size;
        }
        if self.parallel {
            config.parallel = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Dictionary-side word
    #[arg(value_name = "DICTIONARY_WORD")]
    pub dictionary_word: String,

    /// Observed word
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// Tab-separated output
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_correct() {
        let args = FuzzfixArgs::try_parse_from([
            "fuzzfix", "-vv", "-f", "json", "correct", "corpus.txt", "dict.txt", "--ratio", "10",
            "--parallel",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Correct(corpus_args) => {
                assert_eq!(corpus_args.corpus, PathBuf::from("corpus.txt"));
                let config = corpus_args.corrector_config().unwrap();
                assert_eq!(config.misspell_ratio, 10);
                assert!(config.parallel);
                assert_eq!(config.kgram_size, 3);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            FuzzfixArgs::try_parse_from(["fuzzfix", "-q", "-v", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_invalid_override() {
        let args = FuzzfixArgs::try_parse_from([
            "fuzzfix",
            "stats",
            "c",
            "d",
            "--kgram-size",
            "0",
        ])
        .unwrap();
        match args.command {
            Command::Stats(corpus_args) => assert!(corpus_args.corrector_config().is_err()),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
