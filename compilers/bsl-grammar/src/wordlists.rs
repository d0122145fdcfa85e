use bsl_parser::is_wh_word;
use bsl_protocol::{WordClass, WordRole};
use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const TIME_WORDS: &[&str] = &[
    "yesterday", "today", "tomorrow", "now", "later", "soon", "always", "never",
    "sometimes", "often", "usually", "morning", "afternoon", "evening", "night",
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    "week", "month", "year", "before", "after", "already", "still", "yet",
    "last", "next", "ago", "past", "future", "recently", "early", "late",
];

pub const PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them"];

pub const VERBS: &[&str] = &[
    "want", "need", "like", "love", "hate", "have", "go", "come", "see", "know",
    "think", "feel", "make", "take", "give", "get", "find", "tell", "ask", "work",
    "try", "leave", "call", "keep", "let", "begin", "seem", "help", "show", "hear",
    "play", "run", "move", "live", "believe", "bring", "write", "sit", "stand",
    "lose", "pay", "meet", "learn", "change", "lead", "understand", "watch", "follow",
    "stop", "create", "speak", "read", "spend", "grow", "open", "walk", "win",
    "offer", "remember", "consider", "appear", "buy", "wait", "serve", "die", "send",
    "expect", "build", "stay", "fall", "cut", "reach", "kill", "remain", "eat",
    "drink", "sleep", "wake", "look", "say", "talk", "finish", "start", "use",
];

static TIME_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| TIME_WORDS.iter().copied().collect());
static PRONOUN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| PRONOUNS.iter().copied().collect());
static VERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| VERBS.iter().copied().collect());

/// Every closed set the word belongs to. Case-insensitive.
pub fn classify(word: &str) -> WordClass {
    let lower = word.to_lowercase();
    let word = lower.as_str();
    let mut class = WordClass::empty();

    class.set(WordClass::TIME, TIME_SET.contains(word));
    class.set(WordClass::WH, is_wh_word(word));
    class.set(WordClass::PRONOUN, PRONOUN_SET.contains(word));
    class.set(WordClass::VERB, VERB_SET.contains(word));

    class
}

pub fn role_of(word: &str) -> WordRole {
    classify(word).role()
}

pub fn is_time_word(word: &str) -> bool {
    classify(word).contains(WordClass::TIME)
}

pub fn is_pronoun(word: &str) -> bool {
    classify(word).contains(WordClass::PRONOUN)
}

pub fn is_verb(word: &str) -> bool {
    classify(word).contains(WordClass::VERB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles() {
        assert_eq!(role_of("yesterday"), WordRole::Time);
        assert_eq!(role_of("WHAT"), WordRole::WhWord);
        assert_eq!(role_of("You"), WordRole::Subject);
        assert_eq!(role_of("want"), WordRole::Verb);
        assert_eq!(role_of("coffee"), WordRole::Object);
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(TIME_WORDS.len(), 38);
        assert_eq!(PRONOUNS.len(), 12);
        assert_eq!(VERBS.len(), 84);
    }

    #[test]
    fn test_lists_do_not_overlap() {
        for word in TIME_WORDS.iter().chain(PRONOUNS).chain(VERBS) {
            assert!(!classify(word).is_ambiguous(), "{word} sits in two lists");
        }
    }
}
