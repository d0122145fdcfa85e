use serde::{Deserialize, Serialize};

/// Knobs for the translation pipeline. Every field has a default, so a
/// partial (or empty) JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslatorConfig {
    /// Run the PRONOUN-VERB-NOUN topic fronting pass before word ordering.
    pub topic_fronting: bool,
}

impl TranslatorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_topic_fronting(mut self, enabled: bool) -> Self {
        self.topic_fronting = enabled;
        self
    }
}
