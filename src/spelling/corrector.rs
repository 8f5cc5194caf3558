//! Fuzzy corrector that learns a misspelling -> correction map from a corpus.
//!
//! Construction runs the whole pipeline once:
//!
//! 1. index the dictionary by k-grams,
//! 2. count corpus word frequencies,
//! 3. collect the corpus words missing from the dictionary,
//! 4. retrieve dictionary candidates within a length-dependent edit distance,
//! 5. keep candidates that are dramatically more frequent than the unknown word,
//! 6. count misspelling spans of the surviving distance-1 pairs,
//! 7. pick one correction per unknown word by span count.
//!
//! Everything is read-only afterwards.

use std::collections::BTreeMap;

use ahash::AHashMap;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Result;
use crate::spelling::config::CorrectorConfig;
use crate::spelling::frequency::FrequencyTable;
use crate::spelling::kgram::KgramIndex;
use crate::spelling::levenshtein::EditDistance;
use crate::spelling::patterns::{CandidatePair, MisspellingPatternIndex, select_correction};

/// Distances reported in the candidate distance distribution.
const REPORTED_DISTANCES: usize = 5;

/// Mapping from an unknown word to its single chosen dictionary correction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuzzyCorrectionMap {
    corrections: AHashMap<String, String>,
}

impl FuzzyCorrectionMap {
    /// The correction chosen for `word`.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.corrections.get(word).map(String::as_str)
    }

    /// Check if `word` has a correction.
    pub fn contains(&self, word: &str) -> bool {
        self.corrections.contains_key(word)
    }

    /// Number of corrected words.
    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    /// Check if no word was corrected.
    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }

    /// Iterate over (misspelling, correction) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.corrections
            .iter()
            .map(|(word, correction)| (word.as_str(), correction.as_str()))
    }

    /// All pairs sorted by misspelling.
    pub fn sorted(&self) -> BTreeMap<&str, &str> {
        self.iter().collect()
    }
}

impl Serialize for FuzzyCorrectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.sorted())
    }
}

/// Statistics gathered while building the corrector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectorStats {
    /// Dictionary entries, duplicates included.
    pub dictionary_words: usize,
    /// Distinct k-grams in the index.
    pub kgrams: usize,
    /// Corpus tokens counted.
    pub corpus_tokens: usize,
    /// Distinct corpus words.
    pub distinct_words: usize,
    /// Distinct corpus words missing from the dictionary.
    pub unknown_words: usize,
    /// Candidate pairs within the distance ceiling.
    pub candidate_pairs: usize,
    /// Candidate pairs that passed the frequency ratio filter.
    pub accepted_pairs: usize,
    /// Distinct misspelling spans counted.
    pub patterns: usize,
    /// Words that received a correction.
    pub corrections: usize,
    /// Number of candidate pairs at each edit distance.
    pub distance_histogram: Vec<usize>,
}

impl CorrectorStats {
    /// Share of candidate pairs at `distance`, 0.0 when there are none.
    pub fn distance_share(&self, distance: usize) -> f64 {
        if self.candidate_pairs == 0 {
            return 0.0;
        }
        self.distance_histogram.get(distance).copied().unwrap_or(0) as f64
            / self.candidate_pairs as f64
    }
}

/// Corpus-driven fuzzy corrector.
#[derive(Debug)]
pub struct FuzzyCorrector {
    config: CorrectorConfig,
    index: KgramIndex,
    frequencies: FrequencyTable,
    patterns: MisspellingPatternIndex,
    corrections: FuzzyCorrectionMap,
    stats: CorrectorStats,
}

impl FuzzyCorrector {
    /// Build a corrector with the default configuration.
    pub fn new<C, D, S, T>(corpus: C, dictionary: D) -> Result<Self>
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
        D: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::with_config(corpus, dictionary, CorrectorConfig::default())
    }

    /// Build a corrector with a custom configuration.
    pub fn with_config<C, D, S, T>(
        corpus: C,
        dictionary: D,
        config: CorrectorConfig,
    ) -> Result<Self>
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
        D: IntoIterator<Item = T>,
        T: Into<String>,
    {
        config.validate()?;

        let index =
            KgramIndex::with_params(dictionary, config.kgram_size, config.boundary_marker);
        debug!(
            "indexed {} dictionary words under {} k-grams",
            index.len(),
            index.kgram_count()
        );

        let frequencies = FrequencyTable::from_words(corpus);
        debug!(
            "counted {} tokens, {} distinct words",
            frequencies.total(),
            frequencies.len()
        );

        let mut unknown_words: Vec<&str> = frequencies
            .words()
            .filter(|word| !index.contains_word(word))
            .collect();
        unknown_words.sort_unstable();
        debug!("{} words are missing from the dictionary", unknown_words.len());

        let retrieve = |word: &&str| {
            let max_distance = config.max_distance_for(word.chars().count());
            find_closest_words(&index, word, max_distance)
        };
        let groups: Vec<Vec<CandidatePair>> = if config.parallel {
            unknown_words.par_iter().map(retrieve).collect()
        } else {
            unknown_words.iter().map(retrieve).collect()
        };

        let mut stats = CorrectorStats {
            dictionary_words: index.len(),
            kgrams: index.kgram_count(),
            corpus_tokens: frequencies.total(),
            distinct_words: frequencies.len(),
            unknown_words: unknown_words.len(),
            ..Default::default()
        };
        for pair in groups.iter().flatten() {
            if stats.distance_histogram.len() <= pair.distance {
                stats.distance_histogram.resize(pair.distance + 1, 0);
            }
            stats.distance_histogram[pair.distance] += 1;
            stats.candidate_pairs += 1;
        }
        for distance in 0..REPORTED_DISTANCES {
            info!(
                "distance {}: {:.4} of candidate pairs",
                distance,
                stats.distance_share(distance)
            );
        }

        let trusted = |group: Vec<CandidatePair>| -> Vec<CandidatePair> {
            group
                .into_iter()
                .filter(|pair| is_trusted(pair, &frequencies, config.misspell_ratio))
                .collect()
        };
        let accepted: Vec<Vec<CandidatePair>> = if config.parallel {
            groups.into_par_iter().map(trusted).collect()
        } else {
            groups.into_iter().map(trusted).collect()
        };
        stats.accepted_pairs = accepted.iter().map(Vec::len).sum();

        let patterns = if config.parallel {
            accepted
                .par_iter()
                .flatten()
                .fold(MisspellingPatternIndex::default, |partial, pair| {
                    partial.with_pair(pair)
                })
                .reduce(MisspellingPatternIndex::default, MisspellingPatternIndex::merge)
        } else {
            MisspellingPatternIndex::from_pairs(accepted.iter().flatten())
        };
        stats.patterns = patterns.len();
        debug!(
            "{} of {} candidate pairs accepted, {} misspelling patterns",
            stats.accepted_pairs,
            stats.candidate_pairs,
            patterns.len()
        );

        let mut corrections = AHashMap::with_capacity(accepted.len());
        for group in accepted.iter().filter(|group| !group.is_empty()) {
            let candidates: Vec<&CandidatePair> = group.iter().collect();
            let chosen = select_correction(&candidates, &patterns, &frequencies)?;
            corrections.insert(chosen.word.clone(), chosen.dictionary_word.clone());
        }
        stats.corrections = corrections.len();
        info!(
            "learned {} corrections for {} unknown words",
            stats.corrections, stats.unknown_words
        );

        Ok(FuzzyCorrector {
            config,
            index,
            frequencies,
            patterns,
            corrections: FuzzyCorrectionMap { corrections },
            stats,
        })
    }

    /// The correction for `word`.
    ///
    /// Dictionary words map to themselves; learned misspellings map to their
    /// correction; anything else has no correction.
    pub fn correction_of<'a>(&'a self, word: &'a str) -> Option<&'a str> {
        if self.index.contains_word(word) {
            Some(word)
        } else {
            self.corrections.get(word)
        }
    }

    /// Check if `word` is a dictionary word.
    pub fn is_known(&self, word: &str) -> bool {
        self.index.contains_word(word)
    }

    /// Corpus word frequencies.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The learned correction map.
    pub fn corrections(&self) -> &FuzzyCorrectionMap {
        &self.corrections
    }

    /// Misspelling span counts used for disambiguation.
    pub fn patterns(&self) -> &MisspellingPatternIndex {
        &self.patterns
    }

    /// The dictionary k-gram index.
    pub fn index(&self) -> &KgramIndex {
        &self.index
    }

    /// The configuration in use.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Statistics gathered during construction.
    pub fn stats(&self) -> &CorrectorStats {
        &self.stats
    }

    /// Each correction with the misspellings mapped to it.
    ///
    /// Ordered by number of misspellings (descending), then by correction.
    /// Misspellings are sorted within each entry.
    pub fn misspellings_by_correction(&self) -> Vec<(String, Vec<String>)> {
        let mut grouped: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for (word, correction) in self.corrections.iter() {
            grouped.entry(correction).or_default().push(word.to_string());
        }

        let mut report: Vec<(String, Vec<String>)> = grouped
            .into_iter()
            .map(|(correction, mut words)| {
                words.sort_unstable();
                (correction.to_string(), words)
            })
            .collect();
        // Stable sort keeps corrections alphabetical within equal counts.
        report.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        report
    }
}

/// Dictionary words sharing a k-gram with `word` and within `max_distance` of it.
fn find_closest_words(index: &KgramIndex, word: &str, max_distance: usize) -> Vec<CandidatePair> {
    index
        .candidates_sharing_any_kgram(word)
        .into_iter()
        .map(|dictionary_word| CandidatePair::from(EditDistance::new(dictionary_word, word)))
        .filter(|pair| pair.distance <= max_distance)
        .collect()
}

/// Whether a candidate is frequent enough to be trusted as a correction.
fn is_trusted(pair: &CandidatePair, frequencies: &FrequencyTable, ratio: usize) -> bool {
    if pair.dictionary_word == pair.word {
        return true;
    }
    match (
        frequencies.get(&pair.word),
        frequencies.get(&pair.dictionary_word),
    ) {
        (Some(word_freq), Some(candidate_freq)) => {
            word_freq.saturating_mul(ratio) <= candidate_freq
        }
        _ => false,
    }
}
