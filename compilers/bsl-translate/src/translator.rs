use bsl_grammar::{apply_bsl_word_order, explain_bsl_order, reorder_topic_comment};
use bsl_lexicon::{Lexicon, LexiconError, SignDictionary};
use bsl_morph::lemmatize;
use bsl_parser::{detect_question_type, is_question, remove_stop_words, tokenize};
use bsl_protocol::{Gloss, GlossResult, GrammarContext, TranslationResult, TranslationStats};
use log::debug;

use crate::config::TranslatorConfig;
use crate::resolver::resolve_gloss;

/// A content word and the gloss it resolved to before reordering.
#[derive(Debug, Clone)]
struct WordGloss {
    word: String,
    gloss: String,
}

/// English -> BSL gloss pipeline over a read-only dictionary.
///
/// Holds no mutable state; one translator can serve any number of callers.
#[derive(Debug, Clone)]
pub struct Translator<D> {
    dictionary: D,
    config: TranslatorConfig,
}

impl Translator<Lexicon> {
    /// Translator over the bundled atlas with default settings.
    pub fn bundled() -> Result<Self, LexiconError> {
        Ok(Self::new(Lexicon::bundled()?))
    }
}

impl<D: SignDictionary> Translator<D> {
    pub fn new(dictionary: D) -> Self {
        Self::with_config(dictionary, TranslatorConfig::default())
    }

    pub fn with_config(dictionary: D, config: TranslatorConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Runs the whole pipeline. Total over its input: empty or blank text
    /// yields an empty gloss sequence.
    pub fn translate(&self, sentence: &str) -> TranslationResult {
        // 1. Normalize and split
        let tokens = tokenize(sentence);

        // 2. Question shape comes from the raw sentence, not the filtered tokens
        let context = GrammarContext {
            is_question: is_question(sentence),
            question_type: detect_question_type(sentence),
            original_sentence: sentence.to_string(),
        };

        // 3. Drop function words
        let content = remove_stop_words(&tokens);
        debug!("content words: {:?}", content);

        // 4-5. Lemmatize and map each lemma to a gloss
        let pairs: Vec<WordGloss> = content
            .into_iter()
            .map(|word| {
                let lemma = lemmatize(&word);
                let gloss = self
                    .dictionary
                    .word_to_gloss(&lemma)
                    .unwrap_or_else(|| lemma.to_uppercase());
                WordGloss { word, gloss }
            })
            .collect();

        // 6. BSL word order
        let glosses: Vec<&str> = pairs.iter().map(|p| p.gloss.as_str()).collect();
        let ordered = if self.config.topic_fronting {
            apply_bsl_word_order(&reorder_topic_comment(&glosses), &context)
        } else {
            apply_bsl_word_order(&glosses, &context)
        };

        // 7. Attach dictionary entries
        let gloss_sequence: Vec<GlossResult> = ordered
            .iter()
            .map(|gloss| resolve_gloss(&self.dictionary, gloss, &original_word(&pairs, gloss)))
            .collect();

        let gloss_string = ordered.iter().map(Gloss::as_str).collect::<Vec<_>>().join(" ");
        debug!("{:?} -> {} ({})", sentence, gloss_string, context.question_type);

        TranslationResult {
            original_sentence: sentence.to_string(),
            gloss_sequence,
            gloss_string,
            question_type: context.question_type,
            is_question: context.is_question,
            explanation: explain_bsl_order(&context).to_string(),
        }
    }

    /// Just the space-joined gloss string.
    pub fn quick_translate(&self, sentence: &str) -> String {
        self.translate(sentence).gloss_string
    }
}

/// First content word whose gloss matches; the lowercased gloss otherwise.
fn original_word(pairs: &[WordGloss], gloss: &Gloss) -> String {
    pairs
        .iter()
        .find(|p| p.gloss.to_uppercase() == gloss.as_str())
        .map(|p| p.word.clone())
        .unwrap_or_else(|| gloss.as_str().to_lowercase())
}

/// Coverage figures for a finished translation.
pub fn translation_stats(result: &TranslationResult) -> TranslationStats {
    result.stats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsl_lexicon::Lexicon;
    use bsl_protocol::QuestionType;

    fn translator() -> Translator<Lexicon> {
        Translator::bundled().expect("bundled atlas")
    }

    fn glosses(result: &TranslationResult) -> Vec<&str> {
        result.gloss_sequence.iter().map(|g| g.gloss.as_str()).collect()
    }

    #[test]
    fn test_yes_no_question() {
        let result = translator().translate("Do you want a cup of coffee?");

        assert_eq!(glosses(&result), vec!["CUP", "COFFEE", "YOU", "WANT"]);
        assert_eq!(result.question_type, QuestionType::YesNo);
        assert!(result.is_question);
        assert!(result.explanation.contains("raised eyebrows"));
    }

    #[test]
    fn test_wh_question() {
        let result = translator().translate("What is your name?");

        assert_eq!(result.gloss_string, "YOUR NAME WHAT");
        assert_eq!(result.question_type, QuestionType::Wh);
    }

    #[test]
    fn test_time_fronting() {
        let result = translator().translate("Yesterday I went to the shop");

        assert_eq!(result.gloss_string, "YESTERDAY SHOP I GO");
        assert_eq!(result.gloss_sequence[3].original_word, "went");
        assert_eq!(result.question_type, QuestionType::None);
    }

    #[test]
    fn test_alias_resolution_reports_source_word() {
        let result = translator().translate("My mum likes tea");

        assert_eq!(result.gloss_string, "MY MOTHER TEA LIKE");
        let mother = &result.gloss_sequence[1];
        assert_eq!(mother.original_word, "mum");
        assert!(!mother.is_unknown);
    }

    #[test]
    fn test_unknown_word_falls_back_to_lemma() {
        let result = translator().translate("I like zeppelins");

        let zeppelin = &result.gloss_sequence[0];
        assert_eq!(zeppelin.gloss.as_str(), "ZEPPELIN");
        assert!(zeppelin.is_unknown);
        assert_eq!(zeppelin.original_word, "zeppelins");
        assert_eq!(zeppelin.search_url, "https://www.signbsl.com/sign/zeppelin");

        let stats = translation_stats(&result);
        assert_eq!(stats.total_glosses, 3);
        assert_eq!(stats.unknown_glosses, 1);
        assert_eq!(stats.coverage_percent, 67);
    }

    #[test]
    fn test_empty_input() {
        for input in ["", "   ", "?!", "the a an"] {
            let result = translator().translate(input);
            assert!(result.gloss_sequence.is_empty(), "{input:?}");
            assert_eq!(result.gloss_string, "");
            assert_eq!(translation_stats(&result).coverage_percent, 100);
        }
        assert_eq!(translator().translate("").question_type, QuestionType::None);
    }

    #[test]
    fn test_topic_fronting_is_opt_in() {
        let plain = translator();
        let fronted = Translator::with_config(
            Lexicon::bundled().unwrap(),
            TranslatorConfig::default().with_topic_fronting(true),
        );

        // Word ordering already fronts objects, so both agree here
        assert_eq!(plain.quick_translate("I want coffee"), "COFFEE I WANT");
        assert_eq!(fronted.quick_translate("I want coffee"), "COFFEE I WANT");

        // The trailing topic overtakes the earlier object inside the object bucket
        assert_eq!(plain.quick_translate("Milk I want tea"), "MILK TEA I WANT");
        assert_eq!(fronted.quick_translate("Milk I want tea"), "TEA MILK I WANT");
    }

    #[test]
    fn test_negation_contraction() {
        let result = translator().translate("I don't like cats.");
        assert_eq!(result.gloss_string, "NOT CAT I LIKE");
    }
}
