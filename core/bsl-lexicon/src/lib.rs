//! The gloss dictionary seen by the translator.
//!
//! Translation only needs `lookup` and `word_to_gloss`; the enumeration
//! helpers exist for front ends that browse or sample the atlas.

pub mod archive;
pub mod error;
pub mod memory;

pub use archive::{compile_atlas, ArchivedLexicon};
pub use error::LexiconError;
pub use memory::Lexicon;

use bsl_protocol::SignEntry;
use rand::RngCore;
use std::collections::BTreeMap;

pub const DEFAULT_SEARCH_BASE: &str = "https://www.signbsl.com/sign/";

/// Read-only gloss dictionary.
///
/// Implementations must be pure in-memory reads: a missing entry is `None`,
/// never an error.
pub trait SignDictionary {
    /// Entry for an uppercase gloss.
    fn lookup(&self, gloss: &str) -> Option<SignEntry>;

    /// Dictionary gloss for a lemma: exact gloss match first, then aliases.
    fn word_to_gloss(&self, lemma: &str) -> Option<String>;

    /// Deterministic external search link for a lowercase word.
    fn search_url_for(&self, word: &str) -> String {
        search_url(DEFAULT_SEARCH_BASE, word)
    }

    /// Glosses grouped by category, both levels sorted.
    fn glosses_by_category(&self) -> BTreeMap<String, Vec<String>>;

    fn count(&self) -> usize;

    /// Up to `n` distinct glosses chosen with `rng`.
    fn random_sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<String>;
}

impl<D: SignDictionary + ?Sized> SignDictionary for &D {
    fn lookup(&self, gloss: &str) -> Option<SignEntry> {
        (**self).lookup(gloss)
    }

    fn word_to_gloss(&self, lemma: &str) -> Option<String> {
        (**self).word_to_gloss(lemma)
    }

    fn search_url_for(&self, word: &str) -> String {
        (**self).search_url_for(word)
    }

    fn glosses_by_category(&self) -> BTreeMap<String, Vec<String>> {
        (**self).glosses_by_category()
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn random_sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<String> {
        (**self).random_sample(n, rng)
    }
}

impl<D: SignDictionary + ?Sized> SignDictionary for Box<D> {
    fn lookup(&self, gloss: &str) -> Option<SignEntry> {
        (**self).lookup(gloss)
    }

    fn word_to_gloss(&self, lemma: &str) -> Option<String> {
        (**self).word_to_gloss(lemma)
    }

    fn search_url_for(&self, word: &str) -> String {
        (**self).search_url_for(word)
    }

    fn glosses_by_category(&self) -> BTreeMap<String, Vec<String>> {
        (**self).glosses_by_category()
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn random_sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<String> {
        (**self).random_sample(n, rng)
    }
}

/// Joins a search base and a word, lowercasing the word.
pub fn search_url(base: &str, word: &str) -> String {
    format!("{}{}", base, word.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_is_deterministic() {
        assert_eq!(search_url(DEFAULT_SEARCH_BASE, "coffee"), "https://www.signbsl.com/sign/coffee");
        assert_eq!(search_url("https://example.org/?q=", "Tea"), "https://example.org/?q=tea");
    }
}
