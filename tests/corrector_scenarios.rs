//! End-to-end scenarios for the fuzzy corrector.

use fuzzfix::error::Result;
use fuzzfix::spelling::{
    FuzzyCorrector, KgramIndex, MisspellingSpan, local_misspelling, restricted_distance,
};

fn corpus(parts: &[(&str, usize)]) -> Vec<String> {
    parts
        .iter()
        .flat_map(|(word, count)| std::iter::repeat_n(word.to_string(), *count))
        .collect()
}

#[test]
fn test_distance_properties() {
    assert_eq!(restricted_distance("why", "wyh"), 1);
    assert_eq!(restricted_distance("why", "hwy"), 1);
    assert_eq!(restricted_distance("why", "what"), 2);
    assert_eq!(restricted_distance("what", "why"), 2);
}

#[test]
fn test_local_misspelling_examples() {
    assert_eq!(
        local_misspelling("correct", "korrect"),
        MisspellingSpan::new("c", "k")
    );
    assert_eq!(local_misspelling("what", "hat"), MisspellingSpan::new("w", ""));
}

#[test]
fn test_short_words_only_match_exactly() {
    let index = KgramIndex::new(["ox", "oxen"]);

    assert!(index.candidates_sharing_any_kgram("ox").is_empty());
    assert!(index.contains_word("ox"));
}

#[test]
fn test_correction_learned_from_frequent_word() -> Result<()> {
    let corrector = FuzzyCorrector::new(corpus(&[("correct", 100), ("correkt", 2)]), ["correct"])?;

    assert_eq!(corrector.correction_of("correct"), Some("correct"));
    assert_eq!(corrector.correction_of("correkt"), Some("correct"));
    assert_eq!(corrector.frequencies().frequency("correkt"), 2);
    assert_eq!(corrector.corrections().len(), 1);
    Ok(())
}

#[test]
fn test_comparably_frequent_words_stay_apart() -> Result<()> {
    let corrector = FuzzyCorrector::new(corpus(&[("correct", 10), ("correkt", 9)]), ["correct"])?;

    assert_eq!(corrector.correction_of("correkt"), None);
    Ok(())
}

/// Dictionary and corpus where "bends" is one edit away from both "bonds" and
/// "bands". Other misspellings establish that a -> e happens five times and
/// o -> e three times.
fn ambiguous_corrector() -> Result<FuzzyCorrector> {
    let dictionary = [
        "bonds", "bands", "table", "camel", "paste", "mango", "forty", "stone",
    ];
    let mut words = corpus(&dictionary.map(|word| (word, 100)));
    words.extend(corpus(&[
        ("bends", 1),
        ("teble", 1),
        ("cemel", 1),
        ("peste", 1),
        ("mengo", 1),
        ("ferty", 1),
        ("stene", 1),
    ]));

    FuzzyCorrector::new(words, dictionary)
}

#[test]
fn test_ambiguity_resolved_by_pattern_counts() -> Result<()> {
    let corrector = ambiguous_corrector()?;

    let patterns = corrector.patterns();
    assert_eq!(patterns.count(&MisspellingSpan::new("a", "e")), 5);
    assert_eq!(patterns.count(&MisspellingSpan::new("o", "e")), 3);

    assert_eq!(corrector.correction_of("bends"), Some("bands"));
    assert_eq!(corrector.correction_of("ferty"), Some("forty"));
    assert_eq!(corrector.correction_of("stene"), Some("stone"));
    assert_eq!(corrector.corrections().len(), 7);
    Ok(())
}

#[test]
fn test_construction_is_deterministic() -> Result<()> {
    let first = ambiguous_corrector()?;
    let second = ambiguous_corrector()?;

    assert_eq!(first.corrections(), second.corrections());
    assert_eq!(first.stats(), second.stats());
    Ok(())
}

#[test]
fn test_map_keys_unknown_values_known() -> Result<()> {
    let corrector = ambiguous_corrector()?;

    for (word, correction) in corrector.corrections().iter() {
        assert!(!corrector.is_known(word));
        assert!(corrector.is_known(correction));
    }
    Ok(())
}

#[test]
fn test_stats() -> Result<()> {
    let corrector = ambiguous_corrector()?;
    let stats = corrector.stats();

    assert_eq!(stats.dictionary_words, 8);
    assert_eq!(stats.distinct_words, 15);
    assert_eq!(stats.corpus_tokens, 807);
    assert_eq!(stats.unknown_words, 7);
    assert_eq!(stats.candidate_pairs, 8);
    assert_eq!(stats.accepted_pairs, 8);
    assert_eq!(stats.patterns, 2);
    assert_eq!(stats.corrections, 7);
    assert_eq!(stats.distance_histogram, vec![0, 8]);
    assert!((stats.distance_share(1) - 1.0).abs() < 1e-9);
    Ok(())
}
