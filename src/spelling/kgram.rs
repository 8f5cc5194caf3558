//! K-gram inverted index over dictionary words.
//!
//! Each dictionary word is indexed under every contiguous substring of length
//! `k` plus one boundary k-gram: the marker followed by the word's first `k - 1`
//! characters. Words shorter than `k` produce no k-grams at all, so they can only
//! be found by [`KgramIndex::contains_word`], never by candidate retrieval.

use std::collections::BTreeSet;

use ahash::{AHashMap, AHashSet};

/// Default k-gram length.
pub const DEFAULT_KGRAM_SIZE: usize = 3;

/// Default marker character of the boundary k-gram.
pub const DEFAULT_BOUNDARY_MARKER: char = '$';

/// Extract the k-gram set of a word.
///
/// ```
/// use fuzzfix::spelling::kgram::extract_kgrams;
///
/// let kgrams: Vec<String> = extract_kgrams("word", 3, '$').into_iter().collect();
/// assert_eq!(kgrams, vec!["$wo", "ord", "wor"]);
/// assert!(extract_kgrams("ab", 3, '$').is_empty());
/// ```
pub fn extract_kgrams(word: &str, k: usize, marker: char) -> BTreeSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut kgrams = BTreeSet::new();

    if k == 0 || k > chars.len() {
        return kgrams;
    }

    for window in chars.windows(k) {
        kgrams.insert(window.iter().collect());
    }

    let mut boundary = String::with_capacity(k * 4);
    boundary.push(marker);
    boundary.extend(&chars[..k - 1]);
    kgrams.insert(boundary);

    kgrams
}

/// Inverted index from k-grams to dictionary word positions.
#[derive(Debug, Clone)]
pub struct KgramIndex {
    /// Dictionary words in input order, duplicates kept
    words: Vec<String>,
    /// Exact-match lookup over `words`
    word_set: AHashSet<String>,
    /// k-gram -> ascending word positions
    kgrams: AHashMap<String, Vec<usize>>,
    k: usize,
    marker: char,
}

impl KgramIndex {
    /// Build a trigram index with the default boundary marker.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_params(words, DEFAULT_KGRAM_SIZE, DEFAULT_BOUNDARY_MARKER)
    }

    /// Build an index with a custom k-gram length and boundary marker.
    pub fn with_params<I, S>(words: I, k: usize, marker: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let word_set: AHashSet<String> = words.iter().cloned().collect();
        let mut kgrams: AHashMap<String, Vec<usize>> = AHashMap::new();

        for (position, word) in words.iter().enumerate() {
            for kgram in extract_kgrams(word, k, marker) {
                kgrams.entry(kgram).or_default().push(position);
            }
        }

        KgramIndex {
            words,
            word_set,
            kgrams,
            k,
            marker,
        }
    }

    /// The k-gram length.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The boundary marker.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// The dictionary words in input order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of dictionary entries, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the index has no dictionary entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct k-grams in the index.
    pub fn kgram_count(&self) -> usize {
        self.kgrams.len()
    }

    /// Word positions recorded under `kgram`.
    pub fn bucket(&self, kgram: &str) -> &[usize] {
        self.kgrams.get(kgram).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The k-gram set of `word` under this index's parameters.
    pub fn kgrams(&self, word: &str) -> BTreeSet<String> {
        extract_kgrams(word, self.k, self.marker)
    }

    /// Exact membership test against the dictionary words.
    pub fn contains_word(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// Distinct dictionary words sharing at least one k-gram with `word`.
    ///
    /// Words come back in order of their first dictionary position.
    pub fn candidates_sharing_any_kgram(&self, word: &str) -> Vec<&str> {
        let positions: BTreeSet<usize> = self
            .kgrams(word)
            .iter()
            .filter_map(|kgram| self.kgrams.get(kgram))
            .flatten()
            .copied()
            .collect();

        let mut seen = AHashSet::with_capacity(positions.len());
        positions
            .into_iter()
            .map(|position| self.words[position].as_str())
            .filter(|candidate| seen.insert(*candidate))
            .collect()
    }
}
