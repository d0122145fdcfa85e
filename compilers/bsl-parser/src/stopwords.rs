use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Function words BSL does not sign as discrete units.
pub const STOP_WORDS: &[&str] = &[
    // Articles
    "a", "an", "the",
    // Copula
    "is", "are", "am", "was", "were", "be", "been", "being",
    // Auxiliaries
    "do", "does", "did",
    "have", "has", "had",
    "will", "would", "shall", "should",
    "can", "could", "may", "might", "must",
    // Other function words
    "to", "of",
];

static STOP_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.iter().copied().collect());

pub fn is_stop_word(token: &str) -> bool {
    STOP_SET.contains(token)
}

/// Drops stop words, keeping every other token in its original order.
pub fn remove_stop_words<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_articles_and_copula() {
        let out = remove_stop_words(&["the", "cat", "is", "sleeping"]);
        assert_eq!(out, vec!["cat", "sleeping"]);
    }

    #[test]
    fn test_keeps_pronouns_and_content() {
        let out = remove_stop_words(&["do", "you", "want", "a", "cup", "of", "coffee"]);
        assert_eq!(out, vec!["you", "want", "cup", "coffee"]);
    }

    #[test]
    fn test_every_listed_word_is_removed() {
        assert!(remove_stop_words(STOP_WORDS).is_empty());
    }

    #[test]
    fn test_matching_is_exact() {
        // Only normalized tokens are filtered
        let out = remove_stop_words(&["The", "theory", "isn't"]);
        assert_eq!(out, vec!["The", "theory", "isn't"]);
    }
}
