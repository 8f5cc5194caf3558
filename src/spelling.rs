//! Corpus-driven spelling correction.
//!
//! A [`KgramIndex`](kgram::KgramIndex) narrows the dictionary down to words
//! sharing a k-gram with an unknown word, the restricted edit distance in
//! [`levenshtein`] filters them, and the [`FuzzyCorrector`](corrector::FuzzyCorrector)
//! uses corpus frequencies and global misspelling statistics to choose one
//! correction per unknown word.

pub mod config;
pub mod corrector;
pub mod frequency;
pub mod kgram;
pub mod levenshtein;
pub mod patterns;

// Re-export commonly used types
pub use config::CorrectorConfig;
pub use corrector::{CorrectorStats, FuzzyCorrectionMap, FuzzyCorrector};
pub use frequency::FrequencyTable;
pub use kgram::KgramIndex;
pub use levenshtein::{EditDistance, MisspellingSpan, local_misspelling, restricted_distance};
pub use patterns::{CandidatePair, MisspellingPatternIndex, select_correction};
