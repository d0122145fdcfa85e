use crate::grammar::QuestionType;
use alloc::string::String;
use alloc::vec::Vec;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// An uppercase, non-empty label naming one discrete sign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Gloss(String);

impl Gloss {
    /// Uppercases `text`. Returns `None` for empty or whitespace-only input.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Gloss {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Gloss {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dictionary metadata for a sign. Owned by the dictionary, copied into results.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[archive(check_bytes)]
pub struct SignEntry {
    pub gloss: String,
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub video_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub signbsl_url: Option<String>,
    /// Lowercase English lemmas that should resolve to this gloss.
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
}

/// The serialised gloss dictionary (JSON source, rkyv binary).
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct SignAtlas {
    pub version: u32,
    pub entries: Vec<SignEntry>,
}

/// One resolved gloss in the final sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GlossResult {
    pub gloss: Gloss,
    pub original_word: String,
    pub is_unknown: bool,
    pub search_url: String,
    pub sign_entry: Option<SignEntry>,
}

/// The complete output of one translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TranslationResult {
    pub original_sentence: String,
    pub gloss_sequence: Vec<GlossResult>,
    pub gloss_string: String,
    pub question_type: QuestionType,
    pub is_question: bool,
    pub explanation: String,
}

impl TranslationResult {
    pub fn stats(&self) -> TranslationStats {
        TranslationStats::from_sequence(&self.gloss_sequence)
    }

    pub fn is_empty(&self) -> bool {
        self.gloss_sequence.is_empty()
    }
}

/// Coverage figures derived from a gloss sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TranslationStats {
    pub total_glosses: usize,
    pub known_glosses: usize,
    pub unknown_glosses: usize,
    pub coverage_percent: u32,
}

impl TranslationStats {
    pub fn from_sequence(sequence: &[GlossResult]) -> Self {
        let total = sequence.len();
        let known = sequence.iter().filter(|g| !g.is_unknown).count();

        Self {
            total_glosses: total,
            known_glosses: known,
            unknown_glosses: total - known,
            coverage_percent: coverage_percent(known, total),
        }
    }
}

/// round(known / total * 100), with an empty sequence counting as full coverage.
fn coverage_percent(known: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    // Integer round-half-up, matching Math.round for non-negative ratios.
    ((known * 200 + total) / (total * 2)) as u32
}
