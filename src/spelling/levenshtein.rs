//! Restricted edit distance and local misspelling extraction.
//!
//! The distance is the optimal string alignment variant of Damerau-Levenshtein:
//! insertions, deletions, substitutions and transpositions of the immediately
//! preceding character pair each cost 1. A substring is never edited twice, so
//! the triangle inequality does not hold for every input (see the tests).

use std::cmp::min;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzfixError, Result};

/// The localized difference between a dictionary word and an observed word.
///
/// Both sides hold at most two characters. Equality and hashing are structural,
/// so spans can key the global pattern index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MisspellingSpan {
    /// Characters as they appear in the dictionary word.
    pub dictionary: String,
    /// Characters as they appear in the observed word.
    pub word: String,
}

impl MisspellingSpan {
    /// Create a new span.
    pub fn new<D: Into<String>, W: Into<String>>(dictionary: D, word: W) -> Self {
        MisspellingSpan {
            dictionary: dictionary.into(),
            word: word.into(),
        }
    }

    /// Check whether both sides are empty (the words are equal).
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty() && self.word.is_empty()
    }
}

impl fmt::Display for MisspellingSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.dictionary, self.word)
    }
}

/// Edit distance between a dictionary word and an observed word, with the full DP matrix.
///
/// Rows follow the observed word and columns the dictionary word, so
/// `matrix()[word_len][dictionary_len]` is the distance.
#[derive(Debug, Clone)]
pub struct EditDistance {
    dictionary_word: String,
    word: String,
    matrix: Vec<Vec<usize>>,
}

impl EditDistance {
    /// Compute the distance between `dictionary_word` and `word`.
    pub fn new(dictionary_word: &str, word: &str) -> Self {
        let word_chars: Vec<char> = word.chars().collect();
        let dictionary_chars: Vec<char> = dictionary_word.chars().collect();

        EditDistance {
            dictionary_word: dictionary_word.to_string(),
            word: word.to_string(),
            matrix: restricted_matrix(&word_chars, &dictionary_chars),
        }
    }

    /// Compute the distance for inputs that may be absent.
    ///
    /// An absent side is an [`FuzzfixError::InvalidArgument`]; an empty string is
    /// a valid zero-length word.
    pub fn try_new(dictionary_word: Option<&str>, word: Option<&str>) -> Result<Self> {
        let dictionary_word = dictionary_word
            .ok_or_else(|| FuzzfixError::invalid_argument("dictionary word is absent"))?;
        let word = word.ok_or_else(|| FuzzfixError::invalid_argument("word is absent"))?;
        Ok(Self::new(dictionary_word, word))
    }

    /// The dictionary-side word.
    pub fn dictionary_word(&self) -> &str {
        &self.dictionary_word
    }

    /// The observed word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The (|word|+1) x (|dictionary_word|+1) DP matrix.
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// The restricted edit distance.
    pub fn distance(&self) -> usize {
        // The matrix always has at least one row and one column.
        self.matrix
            .last()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(0)
    }

    /// The local misspelling between the two words.
    pub fn misspelling(&self) -> MisspellingSpan {
        local_misspelling(&self.dictionary_word, &self.word)
    }
}

/// Restricted (optimal string alignment) edit distance between two words.
pub fn restricted_distance(a: &str, b: &str) -> usize {
    EditDistance::new(b, a).distance()
}

#[allow(clippy::needless_range_loop)]
fn restricted_matrix(s1: &[char], s2: &[char]) -> Vec<Vec<usize>> {
    let len1 = s1.len();
    let len2 = s2.len();

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    // Initialize first row and column
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1[i - 1] == s2[j - 1] { 0 } else { 1 };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );

            if i > 1 && j > 1 && s1[i - 1] == s2[j - 2] && s1[i - 2] == s2[j - 1] {
                matrix[i][j] = min(
                    matrix[i][j],
                    matrix[i - 2][j - 2] + cost, // transposition
                );
            }
        }
    }

    matrix
}

/// Find the misspelling at the first point where `word` diverges from `dictionary_word`.
///
/// Only one character of lookahead is used, so the result describes a single
/// localized edit. For differences of two or more edits that are not an
/// adjacent swap, it falls through to a one-character substitution at the
/// divergence point.
pub fn local_misspelling(dictionary_word: &str, word: &str) -> MisspellingSpan {
    let dict: Vec<char> = dictionary_word.chars().collect();
    let word: Vec<char> = word.chars().collect();

    let min_len = dict.len().min(word.len());
    let i = dict
        .iter()
        .zip(&word)
        .take_while(|(d, w)| d == w)
        .count();

    if i == min_len {
        return if dict.len() > word.len() {
            MisspellingSpan::new(dict[i].to_string(), "")
        } else if dict.len() < word.len() {
            MisspellingSpan::new("", word[i].to_string())
        } else {
            MisspellingSpan::default()
        };
    }

    let dict_next_matches = dict.get(i + 1) == Some(&word[i]);
    let word_next_matches = word.get(i + 1) == Some(&dict[i]);

    match (dict_next_matches, word_next_matches) {
        (true, true) => MisspellingSpan::new(
            [dict[i], dict[i + 1]].iter().collect::<String>(),
            [word[i], word[i + 1]].iter().collect::<String>(),
        ),
        (true, false) => MisspellingSpan::new(dict[i].to_string(), ""),
        (false, true) => MisspellingSpan::new("", word[i].to_string()),
        (false, false) => MisspellingSpan::new(dict[i].to_string(), word[i].to_string()),
    }
}
