//! # Fuzzfix
//!
//! Learns corrections for misspelled words in a free-text corpus against a
//! reference dictionary, without a hand-written rule table.
//!
//! ## Features
//!
//! - K-gram inverted index for sub-linear candidate retrieval
//! - Restricted (optimal string alignment) edit distance
//! - Frequency-ratio filtering of candidate corrections
//! - Disambiguation by global misspelling pattern counts
//!
//! ```
//! use fuzzfix::spelling::FuzzyCorrector;
//!
//! let mut corpus = vec!["correct"; 100];
//! corpus.extend(["correkt", "correkt"]);
//!
//! let corrector = FuzzyCorrector::new(corpus, ["correct"]).unwrap();
//! assert_eq!(corrector.correction_of("correkt"), Some("correct"));
//! assert_eq!(corrector.correction_of("unrelated"), None);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod spelling;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
