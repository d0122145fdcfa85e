use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use bsl_protocol::{SignAtlas, SignEntry, SignId};
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::RngCore;

use crate::{search_url, LexiconError, SignDictionary, DEFAULT_SEARCH_BASE};

/// Atlas compiled into the binary.
const BUNDLED_ATLAS: &str = include_str!("../data/signs.json");

/// Gloss and alias lookup tables over a list of entries.
#[derive(Debug, Default)]
pub(crate) struct GlossIndex {
    by_gloss: HashMap<String, SignId>,
    by_alias: HashMap<String, SignId>,
}

impl GlossIndex {
    /// First occurrence wins for both duplicate glosses and duplicate aliases.
    pub(crate) fn insert<'a>(&mut self, id: SignId, gloss: &str, aliases: impl Iterator<Item = &'a str>) {
        let key = gloss.trim().to_uppercase();
        if key.is_empty() {
            warn!("sign #{} has an empty gloss, skipped", id.0);
            return;
        }
        if self.by_gloss.contains_key(&key) {
            warn!("duplicate gloss {key} at sign #{}, keeping the first", id.0);
            return;
        }
        self.by_gloss.insert(key, id);

        for alias in aliases {
            self.by_alias.entry(alias.trim().to_lowercase()).or_insert(id);
        }
    }

    pub(crate) fn gloss(&self, gloss: &str) -> Option<SignId> {
        self.by_gloss.get(gloss).copied()
    }

    pub(crate) fn resolve(&self, lemma: &str) -> Option<SignId> {
        self.by_gloss
            .get(&lemma.to_uppercase())
            .or_else(|| self.by_alias.get(&lemma.to_lowercase()))
            .copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_gloss.len()
    }

    pub(crate) fn ids(&self) -> Vec<SignId> {
        let mut ids: Vec<SignId> = self.by_gloss.values().copied().collect();
        ids.sort();
        ids
    }
}

/// In-memory dictionary built from a deserialized `SignAtlas`.
#[derive(Debug)]
pub struct Lexicon {
    version: u32,
    entries: Vec<SignEntry>,
    index: GlossIndex,
    search_base: String,
}

impl Lexicon {
    pub fn new(atlas: SignAtlas) -> Self {
        let mut entries = atlas.entries;
        let mut index = GlossIndex::default();

        for (i, entry) in entries.iter_mut().enumerate() {
            entry.gloss = entry.gloss.trim().to_uppercase();
            index.insert(SignId::new(i as u32), &entry.gloss, entry.aliases.iter().map(String::as_str));
        }

        debug!("lexicon v{} loaded: {} signs", atlas.version, index.len());

        Self {
            version: atlas.version,
            entries,
            index,
            search_base: DEFAULT_SEARCH_BASE.to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let atlas: SignAtlas = serde_json::from_str(json)?;
        Ok(Self::new(atlas))
    }

    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The atlas shipped with the crate.
    pub fn bundled() -> Result<Self, LexiconError> {
        Self::from_json(BUNDLED_ATLAS)
    }

    pub fn with_search_base(mut self, base: impl Into<String>) -> Self {
        self.search_base = base.into();
        self
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// The atlas this lexicon was built from, glosses normalized.
    pub fn to_atlas(&self) -> SignAtlas {
        SignAtlas {
            version: self.version,
            entries: self.entries.clone(),
        }
    }

    fn entry(&self, id: SignId) -> Option<&SignEntry> {
        self.entries.get(id.index())
    }
}

impl SignDictionary for Lexicon {
    fn lookup(&self, gloss: &str) -> Option<SignEntry> {
        self.index.gloss(gloss).and_then(|id| self.entry(id)).cloned()
    }

    fn word_to_gloss(&self, lemma: &str) -> Option<String> {
        self.index
            .resolve(lemma)
            .and_then(|id| self.entry(id))
            .map(|e| e.gloss.clone())
    }

    fn search_url_for(&self, word: &str) -> String {
        search_url(&self.search_base, word)
    }

    fn glosses_by_category(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for id in self.index.ids() {
            if let Some(entry) = self.entry(id) {
                groups.entry(entry.category.clone()).or_default().push(entry.gloss.clone());
            }
        }
        for glosses in groups.values_mut() {
            glosses.sort();
        }
        groups
    }

    fn count(&self) -> usize {
        self.index.len()
    }

    fn random_sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<String> {
        self.index
            .ids()
            .choose_multiple(rng, n)
            .filter_map(|id| self.entry(*id))
            .map(|e| e.gloss.clone())
            .collect()
    }
}
