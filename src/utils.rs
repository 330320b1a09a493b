//! String helpers for marker matching.

/// Normalize text for case-insensitive marker matching.
///
/// Lowercasing is the only normalization applied: marker terms are stored
/// lowercase, and whitespace is significant because multi-word phrases like
/// "us versus them" must match verbatim.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Count non-overlapping occurrences of `term` within `text`.
///
/// This is substring containment, not word-boundary matching: "possible"
/// matches inside "impossible". Callers are expected to pass already
/// normalized (lowercased) text and terms.
pub fn count_occurrences(text: &str, term: &str) -> u32 {
    if term.is_empty() {
        return 0;
    }
    text.matches(term).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("LoVe FEAR"), "love fear");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn counts_non_overlapping_occurrences() {
        assert_eq!(count_occurrences("love love love", "love"), 3);
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("love", "fear"), 0);
    }

    #[test]
    fn counts_substring_containment() {
        // "possible" inside "impossible" counts; this is the documented rule.
        assert_eq!(count_occurrences("impossible", "possible"), 1);
        assert_eq!(count_occurrences("hateful", "hate"), 1);
    }

    #[test]
    fn empty_term_never_matches() {
        assert_eq!(count_occurrences("anything", ""), 0);
    }

    #[test]
    fn multi_word_phrase_matches() {
        assert_eq!(count_occurrences("it is us versus them again", "us versus them"), 1);
    }
}
