use alloc::string::String;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Question classification, derived from surface punctuation and WH-words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum QuestionType {
    #[default]
    None = 0,
    YesNo = 1,
    Wh = 2,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::None => "none",
            QuestionType::YesNo => "yes-no",
            QuestionType::Wh => "wh",
        }
    }
}

impl core::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single role a lemma plays when the gloss order is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum WordRole {
    Time = 0,
    WhWord = 1,
    Subject = 2,
    Verb = 3,
    /// Nouns, adjectives and anything else not on a closed list.
    Object = 4,
}

bitflags! {
    /// Every closed word set a lemma belongs to.
    ///
    /// A word can sit in more than one set; `role()` resolves the overlap.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct WordClass: u8 {
        const TIME = 1;
        const WH = 2;
        const PRONOUN = 4;
        const VERB = 8;
    }
}

impl WordClass {
    /// Collapse membership to a role: Time > WhWord > Subject > Verb > Object.
    pub fn role(self) -> WordRole {
        if self.contains(WordClass::TIME) {
            WordRole::Time
        } else if self.contains(WordClass::WH) {
            WordRole::WhWord
        } else if self.contains(WordClass::PRONOUN) {
            WordRole::Subject
        } else if self.contains(WordClass::VERB) {
            WordRole::Verb
        } else {
            WordRole::Object
        }
    }

    /// True when more than one closed set claims the word.
    pub fn is_ambiguous(self) -> bool {
        self.bits().count_ones() > 1
    }
}

/// What the grammar engine needs to know about the sentence being reordered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GrammarContext {
    pub is_question: bool,
    pub question_type: QuestionType,
    pub original_sentence: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_priority() {
        assert_eq!(WordClass::empty().role(), WordRole::Object);
        assert_eq!(WordClass::VERB.role(), WordRole::Verb);
        assert_eq!((WordClass::PRONOUN | WordClass::VERB).role(), WordRole::Subject);
        assert_eq!((WordClass::WH | WordClass::PRONOUN).role(), WordRole::WhWord);
        assert_eq!((WordClass::TIME | WordClass::WH).role(), WordRole::Time);
    }

    #[test]
    fn test_ambiguity() {
        assert!(!WordClass::TIME.is_ambiguous());
        assert!((WordClass::TIME | WordClass::VERB).is_ambiguous());
    }

    #[test]
    fn test_question_type_labels() {
        assert_eq!(QuestionType::default(), QuestionType::None);
        assert_eq!(QuestionType::YesNo.as_str(), "yes-no");
        assert_eq!(QuestionType::Wh.as_str(), "wh");
    }
}
