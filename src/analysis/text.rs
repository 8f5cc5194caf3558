//! Plain-text helpers that turn raw records into word tokens.
//!
//! The corrector itself never normalizes input; callers run these first.
//!
//! # Examples
//!
//! ```
//! use fuzzfix::analysis::text::{strip_html, tokenize};
//!
//! let text = strip_html("<p>Hello, <b>world</b>!</p>");
//! assert_eq!(tokenize(&text), vec!["Hello", "world"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<[^>]*?>").expect("HTML tag pattern should be valid"));

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("Non-word pattern should be valid"));

/// Remove every `<...>` tag from `text`.
pub fn strip_html(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Split `text` on runs of non-word characters, dropping empty pieces.
pub fn tokenize(text: &str) -> Vec<&str> {
    NON_WORD
        .split(text)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Split `text` on Unicode word boundaries (UAX #29), keeping only words.
pub fn words(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Split `text` wherever a letter/digit run meets a non-letter/digit run.
///
/// Punctuation and whitespace runs are kept as their own tokens, so joining
/// the result gives back the input.
pub fn tokenize_with_punctuation(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    if chars.len() <= 1 {
        return vec![text];
    }

    let mut tokens = Vec::new();
    let mut start = 0;
    for pair in chars.windows(2) {
        let (_, prev) = pair[0];
        let (offset, next) = pair[1];
        if is_word_boundary(prev, next) {
            tokens.push(&text[start..offset]);
            start = offset;
        }
    }
    tokens.push(&text[start..]);

    tokens
}

fn is_word_boundary(prev: char, next: char) -> bool {
    prev.is_alphanumeric() != next.is_alphanumeric()
}
