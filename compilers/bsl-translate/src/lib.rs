//! English sentence -> BSL gloss sequence.
//!
//! tokenize -> question detection -> stop words -> lemmas -> glosses ->
//! BSL word order -> dictionary resolution.

pub mod config;
pub mod resolver;
pub mod translator;

pub use bsl_protocol::{GlossResult, QuestionType, TranslationResult, TranslationStats};
pub use config::TranslatorConfig;
pub use resolver::resolve_gloss;
pub use translator::{translation_stats, Translator};

/// Serializes a result in the camelCase shape front ends consume.
pub fn to_json(result: &TranslationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
