//! Global misspelling pattern statistics and candidate disambiguation.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{FuzzfixError, Result};
use crate::spelling::frequency::FrequencyTable;
use crate::spelling::levenshtein::{EditDistance, MisspellingSpan, local_misspelling};
use crate::util::select::element_at_max;

/// A dictionary word retrieved for an observed word, with their distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePair {
    /// The dictionary-side word.
    pub dictionary_word: String,
    /// The observed (unknown) word.
    pub word: String,
    /// Restricted edit distance between the two.
    pub distance: usize,
}

impl CandidatePair {
    /// Create a new candidate pair.
    pub fn new<D: Into<String>, W: Into<String>>(
        dictionary_word: D,
        word: W,
        distance: usize,
    ) -> Self {
        CandidatePair {
            dictionary_word: dictionary_word.into(),
            word: word.into(),
            distance,
        }
    }

    /// The local misspelling between the two words.
    pub fn misspelling(&self) -> MisspellingSpan {
        local_misspelling(&self.dictionary_word, &self.word)
    }
}

impl From<EditDistance> for CandidatePair {
    fn from(info: EditDistance) -> Self {
        let distance = info.distance();
        CandidatePair::new(info.dictionary_word(), info.word(), distance)
    }
}

/// How often each misspelling span occurs among accepted distance-1 pairs.
#[derive(Debug, Clone, Default)]
pub struct MisspellingPatternIndex {
    counts: AHashMap<MisspellingSpan, usize>,
}

impl MisspellingPatternIndex {
    /// Count the spans of every distance-1 pair; other pairs are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = &'a CandidatePair>,
    {
        pairs
            .into_iter()
            .fold(MisspellingPatternIndex::default(), |index, pair| {
                index.with_pair(pair)
            })
    }

    /// Add one pair to a partially built index. Pairs not at distance 1 are ignored.
    pub fn with_pair(mut self, pair: &CandidatePair) -> Self {
        if pair.distance == 1 {
            *self.counts.entry(pair.misspelling()).or_insert(0) += 1;
        }
        self
    }

    /// Combine two partial indexes built from disjoint pair sets.
    pub fn merge(mut self, other: MisspellingPatternIndex) -> Self {
        for (span, count) in other.counts {
            *self.counts.entry(span).or_insert(0) += count;
        }
        self
    }

    /// Recorded count of `span`, 0 if it was never seen.
    pub fn count(&self, span: &MisspellingSpan) -> usize {
        self.counts.get(span).copied().unwrap_or(0)
    }

    /// Number of distinct spans.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no spans were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Spans by descending count, ties in span order.
    pub fn ranked(&self) -> Vec<(&MisspellingSpan, usize)> {
        let mut ranked: Vec<(&MisspellingSpan, usize)> =
            self.counts.iter().map(|(span, count)| (span, *count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

impl FromIterator<(MisspellingSpan, usize)> for MisspellingPatternIndex {
    fn from_iter<I: IntoIterator<Item = (MisspellingSpan, usize)>>(iter: I) -> Self {
        let mut counts: AHashMap<MisspellingSpan, usize> = AHashMap::new();
        for (span, count) in iter {
            *counts.entry(span).or_insert(0) += count;
        }
        MisspellingPatternIndex { counts }
    }
}

/// Pick the correction for one observed word among its surviving candidates.
///
/// Candidates are ordered by ascending corpus frequency (stable), then the first
/// one whose misspelling span has the highest pattern count wins.
pub fn select_correction<'a>(
    candidates: &[&'a CandidatePair],
    patterns: &MisspellingPatternIndex,
    frequencies: &FrequencyTable,
) -> Result<&'a CandidatePair> {
    let mut ordered = candidates.to_vec();
    ordered.sort_by_key(|pair| frequencies.frequency(&pair.dictionary_word));

    element_at_max(ordered, |pair| patterns.count(&pair.misspelling())).ok_or_else(|| {
        FuzzfixError::empty_collection("cannot select a correction without candidates")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(dictionary: &str, word: &str) -> MisspellingSpan {
        MisspellingSpan::new(dictionary, word)
    }

    #[test]
    fn test_only_distance_one_counts() {
        let pairs = vec![
            CandidatePair::new("correct", "korrect", 1),
            CandidatePair::new("collect", "kollect", 1),
            CandidatePair::new("correct", "kurrect", 2),
        ];
        let index = MisspellingPatternIndex::from_pairs(&pairs);

        assert_eq!(index.count(&span("c", "k")), 2);
        assert_eq!(index.len(), 1);
        assert_eq!(index.count(&span("x", "y")), 0);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let pairs = vec![
            CandidatePair::new("bands", "bends", 1),
            CandidatePair::new("table", "teble", 1),
            CandidatePair::new("forty", "ferty", 1),
        ];
        let whole = MisspellingPatternIndex::from_pairs(&pairs);
        let merged = MisspellingPatternIndex::from_pairs(&pairs[..1])
            .merge(MisspellingPatternIndex::from_pairs(&pairs[1..]));

        assert_eq!(whole.ranked(), merged.ranked());
        assert_eq!(
            merged.ranked(),
            vec![(&span("a", "e"), 2), (&span("o", "e"), 1)]
        );
    }

    #[test]
    fn test_select_highest_pattern_count() {
        let patterns: MisspellingPatternIndex =
            [(span("a", "e"), 5), (span("o", "e"), 3)].into_iter().collect();
        let frequencies = FrequencyTable::from_words(
            std::iter::repeat_n("bonds", 40).chain(std::iter::repeat_n("bands", 50)),
        );

        let bonds = CandidatePair::new("bonds", "bends", 1);
        let bands = CandidatePair::new("bands", "bends", 1);
        let chosen = select_correction(&[&bonds, &bands], &patterns, &frequencies).unwrap();

        assert_eq!(chosen.dictionary_word, "bands");
    }

    #[test]
    fn test_ties_prefer_lower_frequency() {
        let patterns: MisspellingPatternIndex =
            [(span("a", "e"), 2), (span("o", "e"), 2)].into_iter().collect();
        let frequencies = FrequencyTable::from_words(
            std::iter::repeat_n("bands", 200).chain(std::iter::repeat_n("bonds", 100)),
        );

        let bands = CandidatePair::new("bands", "bends", 1);
        let bonds = CandidatePair::new("bonds", "bends", 1);
        let chosen = select_correction(&[&bands, &bonds], &patterns, &frequencies).unwrap();

        assert_eq!(chosen.dictionary_word, "bonds");
    }

    #[test]
    fn test_ties_on_frequency_keep_input_order() {
        let patterns = MisspellingPatternIndex::default();
        let frequencies = FrequencyTable::from_words(["bands", "bonds"]);

        let bands = CandidatePair::new("bands", "bends", 1);
        let bonds = CandidatePair::new("bonds", "bends", 1);

        let chosen = select_correction(&[&bonds, &bands], &patterns, &frequencies).unwrap();
        assert_eq!(chosen.dictionary_word, "bonds");
    }

    #[test]
    fn test_select_from_empty_group() {
        let result = select_correction(
            &[],
            &MisspellingPatternIndex::default(),
            &FrequencyTable::default(),
        );
        assert!(matches!(result, Err(FuzzfixError::EmptyCollection(_))));
    }

    #[test]
    fn test_from_edit_distance() {
        let pair = CandidatePair::from(EditDistance::new("correct", "correkt"));
        assert_eq!(pair, CandidatePair::new("correct", "correkt", 1));
        assert_eq!(pair.misspelling(), span("c", "k"));
    }
}
