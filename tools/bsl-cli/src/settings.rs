use anyhow::{Context, Result};
use bsl_translate::TranslatorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional JSON settings file. Command-line flags win over anything here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    #[serde(flatten)]
    pub translator: TranslatorConfig,

    /// Base for "search for this sign" links.
    pub search_base: Option<String>,

    /// JSON or rkyv atlas to use instead of the bundled one.
    pub atlas: Option<PathBuf>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading settings {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing settings {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "topicFronting": true, "searchBase": "https://example.org/" }}"#).unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert!(settings.translator.topic_fronting);
        assert_eq!(settings.search_base.as_deref(), Some("https://example.org/"));
        assert!(settings.atlas.is_none());
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = Settings::load(Path::new("/nope/settings.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nope/settings.json"));
    }
}
