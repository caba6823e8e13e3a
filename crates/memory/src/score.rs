//! Keyword relevance scoring shared by the non-vector store backends.

/// Compute a keyword distance between a query and a stored text.
///
/// Distance = 1 − (fraction of query words present in the text), so lower
/// is closer, matching the convention of `MemoryResult::distance`. Returns
/// `None` when nothing matches at all, so callers can skip the record.
pub(crate) fn keyword_distance(query: &str, text: &str) -> Option<f32> {
    let text_lower = text.to_lowercase();
    let words: Vec<&str> = query
        .split_whitespace()
        .collect();
    if words.is_empty() {
        return None;
    }

    let matched = words
        .iter()
        .filter(|w| text_lower.contains(&w.to_lowercase()))
        .count();
    if matched == 0 {
        return None;
    }

    Some(1.0 - matched as f32 / words.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_text_has_zero_distance() {
        let text = "The user prefers dark mode";
        assert_eq!(keyword_distance(text, text), Some(0.0));
    }

    #[test]
    fn partial_match_is_farther() {
        let text = "The user prefers dark mode";
        let partial = keyword_distance("dark mode enabled everywhere", text).unwrap();
        assert!(partial > 0.0 && partial < 1.0);
    }

    #[test]
    fn no_overlap_is_none() {
        assert_eq!(keyword_distance("quantum physics", "grocery list"), None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(keyword_distance("DARK MODE", "dark mode"), Some(0.0));
    }
}
