use nom::{
    bytes::complete::{take_while, take_while1},
    IResult,
};
use crate::token::{Span, Token};

/// Letters, digits, underscore, and the apostrophe kept inside contractions.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

fn separator(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| !is_word_char(c))(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

/// Lazy scan over the words of a sentence. Punctuation and whitespace both
/// act as separators and are never yielded.
pub struct Tokens<'a> {
    origin: &'a str,
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { origin: input, rest: input }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            // 1. Skip separators
            let input = match separator(self.rest) {
                Ok((next, _)) => next,
                Err(_) => return None,
            };
            self.rest = input;

            if input.is_empty() {
                return None;
            }

            // 2. Take the word
            match word(input) {
                Ok((next, text)) => {
                    let start = input.as_ptr() as usize - self.origin.as_ptr() as usize;
                    self.rest = next;
                    return Some(Token {
                        span: Span::new(start, start + text.len()),
                        text,
                    });
                }
                Err(_) => {
                    // Skip one char to recover (resilient parsing)
                    let c = input.chars().next()?;
                    self.rest = &input[c.len_utf8()..];
                }
            }
        }
    }
}
