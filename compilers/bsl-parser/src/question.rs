use bsl_protocol::QuestionType;
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::tokenize;

pub const WH_WORDS: &[&str] = &["what", "where", "when", "why", "who", "whom", "whose", "which", "how"];

static WH_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| WH_WORDS.iter().copied().collect());

pub fn is_wh_word(word: &str) -> bool {
    WH_SET.contains(word)
}

/// A sentence is a question when its trimmed form ends with "?".
pub fn is_question(sentence: &str) -> bool {
    sentence.trim().ends_with('?')
}

/// Classifies the raw sentence; WH-words anywhere in a question make it a WH-question.
pub fn detect_question_type(sentence: &str) -> QuestionType {
    if !is_question(sentence) {
        return QuestionType::None;
    }

    if tokenize(sentence).iter().any(|t| is_wh_word(t)) {
        QuestionType::Wh
    } else {
        QuestionType::YesNo
    }
}

/// First WH-word among already normalized tokens.
pub fn extract_wh_word<S: AsRef<str>>(tokens: &[S]) -> Option<&str> {
    tokens.iter().map(AsRef::as_ref).find(|t| is_wh_word(t))
}
