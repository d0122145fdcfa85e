use bsl_lexicon::SignDictionary;
use bsl_protocol::{Gloss, GlossResult};

/// Attaches dictionary metadata to a final gloss.
///
/// A missing entry is a normal outcome: the result is flagged unknown and
/// still carries a search link built from the gloss text.
pub fn resolve_gloss<D: SignDictionary + ?Sized>(dictionary: &D, gloss: &Gloss, original_word: &str) -> GlossResult {
    let sign_entry = dictionary.lookup(gloss.as_str());
    let search_url = dictionary.search_url_for(&gloss.as_str().to_lowercase());

    GlossResult {
        gloss: gloss.clone(),
        original_word: original_word.to_string(),
        is_unknown: sign_entry.is_none(),
        search_url,
        sign_entry,
    }
}
