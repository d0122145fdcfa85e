use bsl_lexicon::{ArchivedLexicon, Lexicon, SignDictionary};
use bsl_protocol::TranslationStats;
use bsl_translate::{translation_stats, Translator, TranslatorConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Translation plus coverage, as handed to JavaScript.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationReport {
    #[serde(flatten)]
    pub result: bsl_protocol::TranslationResult,
    pub stats: TranslationStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryReport {
    pub count: usize,
    pub categories: BTreeMap<String, Vec<String>>,
}

/// The translator instance running in the browser.
#[wasm_bindgen]
pub struct BslEngine {
    translator: Translator<Box<dyn SignDictionary>>,
}

#[wasm_bindgen]
impl BslEngine {
    /// Loads an rkyv atlas fetched by JavaScript.
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>, topic_fronting: bool) -> Result<BslEngine, JsValue> {
        let lexicon = ArchivedLexicon::from_bytes(&data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_dictionary(Box::new(lexicon), topic_fronting))
    }

    /// Engine over the atlas compiled into the module.
    pub fn bundled(topic_fronting: bool) -> Result<BslEngine, JsValue> {
        let lexicon = Lexicon::bundled().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_dictionary(Box::new(lexicon), topic_fronting))
    }

    /// Text -> glosses -> JSON
    pub fn translate(&self, input: &str) -> Result<JsValue, JsValue> {
        let result = self.translator.translate(input);
        let report = TranslationReport {
            stats: translation_stats(&result),
            result,
        };
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    pub fn glossary(&self) -> Result<JsValue, JsValue> {
        let dictionary = self.translator.dictionary();
        let report = GlossaryReport {
            count: dictionary.count(),
            categories: dictionary.glosses_by_category(),
        };
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    /// `n` random glosses; the same seed gives the same sample.
    pub fn sample(&self, n: usize, seed: u64) -> Vec<JsValue> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.translator
            .dictionary()
            .random_sample(n, &mut rng)
            .into_iter()
            .map(|g| JsValue::from_str(&g))
            .collect()
    }
}

impl BslEngine {
    fn with_dictionary(dictionary: Box<dyn SignDictionary>, topic_fronting: bool) -> Self {
        let config = TranslatorConfig::default().with_topic_fronting(topic_fronting);
        Self {
            translator: Translator::with_config(dictionary, config),
        }
    }

    /// Report without crossing the JS boundary.
    pub fn report(&self, input: &str) -> TranslationReport {
        let result = self.translator.translate(input);
        TranslationReport {
            stats: translation_stats(&result),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_flattens_result() {
        let engine = BslEngine::bundled(false).unwrap_or_else(|_| panic!("bundled atlas"));
        let report = engine.report("What is your name?");
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["glossString"], "YOUR NAME WHAT");
        assert_eq!(value["questionType"], "wh");
        assert_eq!(value["stats"]["totalGlosses"], 3);
        assert_eq!(value["stats"]["coveragePercent"], 100);
    }

    #[test]
    fn test_sample_is_seeded() {
        let engine = BslEngine::bundled(false).unwrap_or_else(|_| panic!("bundled atlas"));
        let dictionary = engine.translator.dictionary();
        let a = dictionary.random_sample(5, &mut ChaCha8Rng::seed_from_u64(9));
        let b = dictionary.random_sample(5, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
