//! Selection helpers over scored collections.

/// Return the first element with the highest score, or `None` for empty input.
///
/// Later elements only replace the current best when their score is strictly
/// greater, so the earliest element wins ties.
///
/// ```
/// use fuzzfix::util::select::element_at_max;
///
/// let words = ["aa", "b", "cc", "d"];
/// assert_eq!(element_at_max(words, |w| w.len()), Some("aa"));
/// assert_eq!(element_at_max(Vec::<&str>::new(), |w| w.len()), None);
/// ```
pub fn element_at_max<I, T, K, F>(items: I, mut score: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    items
        .into_iter()
        .fold(None, |best: Option<(T, K)>, item| {
            let value = score(&item);
            match best {
                Some((best_item, best_value)) if best_value >= value => {
                    Some((best_item, best_value))
                }
                _ => Some((item, value)),
            }
        })
        .map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_maximum_wins() {
        let scored = [("a", 1), ("b", 3), ("c", 3), ("d", 2)];
        assert_eq!(element_at_max(scored, |(_, s)| *s), Some(("b", 3)));
    }

    #[test]
    fn test_all_equal() {
        let scored = [("x", 0), ("y", 0)];
        assert_eq!(element_at_max(scored, |(_, s)| *s), Some(("x", 0)));
    }

    #[test]
    fn test_empty() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(element_at_max(empty, |v| *v), None);
    }
}
