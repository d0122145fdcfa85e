pub mod parser;
pub mod question;
pub mod stopwords;
pub mod token;

pub use parser::Tokens;
pub use question::{detect_question_type, extract_wh_word, is_question, is_wh_word, WH_WORDS};
pub use stopwords::{is_stop_word, remove_stop_words, STOP_WORDS};
pub use token::{Span, Token};

/// Primary entry point: Text -> normalized word tokens.
///
/// Lowercases, treats everything except letters, digits, `_` and `'` as a
/// separator, and never yields an empty token.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let tokens: Vec<String> = Tokens::new(sentence).map(|t| t.normalized()).collect();
    log::trace!("tokenize {:?} -> {:?}", sentence, tokens);
    tokens
}
