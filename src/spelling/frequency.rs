//! Corpus word frequencies.

use ahash::AHashMap;

/// Occurrence counts of every word observed in a corpus.
///
/// Built once from the corpus and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: AHashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Count every word of the corpus.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: AHashMap<String, usize> = AHashMap::new();
        let mut total = 0;

        for word in words {
            let word = word.as_ref();
            match counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(word.to_string(), 1);
                }
            }
            total += 1;
        }

        FrequencyTable { counts, total }
    }

    /// Occurrence count of `word`, if it was observed.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Occurrence count of `word`, 0 if it was never observed.
    pub fn frequency(&self, word: &str) -> usize {
        self.get(word).unwrap_or(0)
    }

    /// Check if `word` was observed.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no words were observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterate over (word, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Distinct words in arbitrary order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// The most frequent words, ties broken alphabetically.
    pub fn most_frequent(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut word_freq: Vec<(&str, usize)> = self.iter().collect();
        word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        word_freq.truncate(limit);
        word_freq
    }
}
