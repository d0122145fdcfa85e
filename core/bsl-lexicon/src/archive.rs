use std::collections::BTreeMap;
use std::path::Path;

use bsl_protocol::{ArchivedSignAtlas, ArchivedSignEntry, SignAtlas, SignEntry, SignId};
use log::debug;
use rand::seq::SliceRandom;
use rand::RngCore;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::{AlignedVec, Deserialize, Infallible};

use crate::memory::GlossIndex;
use crate::{search_url, LexiconError, SignDictionary, DEFAULT_SEARCH_BASE};

/// Serializes an atlas into the rkyv binary format read by `ArchivedLexicon`.
pub fn compile_atlas(atlas: &SignAtlas) -> Result<AlignedVec, LexiconError> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(atlas)
        .map_err(|e| LexiconError::Serialize(format!("{e:?}")))?;
    Ok(serializer.into_serializer().into_inner())
}

/// Dictionary answering lookups straight from an rkyv archive.
///
/// The archive is validated once on load; entries are only deserialized when
/// a lookup hits them.
pub struct ArchivedLexicon {
    bytes: AlignedVec,
    index: GlossIndex,
    search_base: String,
}

impl ArchivedLexicon {
    pub fn from_bytes(data: &[u8]) -> Result<Self, LexiconError> {
        let mut bytes = AlignedVec::with_capacity(data.len());
        bytes.extend_from_slice(data);

        let index = {
            let atlas = rkyv::check_archived_root::<SignAtlas>(&bytes)
                .map_err(|e| LexiconError::InvalidArchive(format!("{e:?}")))?;

            let mut index = GlossIndex::default();
            for (i, entry) in atlas.entries.iter().enumerate() {
                index.insert(
                    SignId::new(i as u32),
                    entry.gloss.as_str(),
                    entry.aliases.iter().map(|a| a.as_str()),
                );
            }
            debug!("archived lexicon v{} loaded: {} signs", atlas.version, index.len());
            index
        };

        Ok(Self {
            bytes,
            index,
            search_base: DEFAULT_SEARCH_BASE.to_string(),
        })
    }

    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let data = std::fs::read(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&data)
    }

    pub fn with_search_base(mut self, base: impl Into<String>) -> Self {
        self.search_base = base.into();
        self
    }

    fn atlas(&self) -> &ArchivedSignAtlas {
        // SAFETY: the bytes were validated by check_archived_root in from_bytes
        // and are never mutated afterwards.
        unsafe { rkyv::archived_root::<SignAtlas>(&self.bytes) }
    }

    fn entry(&self, id: SignId) -> Option<&ArchivedSignEntry> {
        self.atlas().entries.get(id.index())
    }

    /// Archived glosses are stored as written; normalize like `Lexicon` does.
    fn gloss_of(entry: &ArchivedSignEntry) -> String {
        entry.gloss.as_str().trim().to_uppercase()
    }
}

impl SignDictionary for ArchivedLexicon {
    fn lookup(&self, gloss: &str) -> Option<SignEntry> {
        let archived = self.index.gloss(gloss).and_then(|id| self.entry(id))?;
        let mut entry: SignEntry = archived.deserialize(&mut Infallible).ok()?;
        entry.gloss = Self::gloss_of(archived);
        Some(entry)
    }

    fn word_to_gloss(&self, lemma: &str) -> Option<String> {
        self.index
            .resolve(lemma)
            .and_then(|id| self.entry(id))
            .map(Self::gloss_of)
    }

    fn search_url_for(&self, word: &str) -> String {
        search_url(&self.search_base, word)
    }

    fn glosses_by_category(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for id in self.index.ids() {
            if let Some(entry) = self.entry(id) {
                groups
                    .entry(entry.category.as_str().to_string())
                    .or_default()
                    .push(Self::gloss_of(entry));
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
            .map(Self::gloss_of)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lexicon;
    use std::io::Write;

    fn bundled_bytes() -> AlignedVec {
        let lex = Lexicon::bundled().expect("bundled atlas");
        compile_atlas(&lex.to_atlas()).expect("compile")
    }

    #[test]
    fn test_archive_matches_memory_lexicon() {
        let memory = Lexicon::bundled().unwrap();
        let archived = ArchivedLexicon::from_bytes(&bundled_bytes()).unwrap();

        assert_eq!(archived.count(), memory.count());
        assert_eq!(archived.lookup("COFFEE"), memory.lookup("COFFEE"));
        assert_eq!(archived.word_to_gloss("mum"), memory.word_to_gloss("mum"));
        assert_eq!(archived.glosses_by_category(), memory.glosses_by_category());
        assert!(archived.lookup("GIRAFFE").is_none());
    }

    #[test]
    fn test_open_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bundled_bytes()).unwrap();

        let archived = ArchivedLexicon::open(file.path()).unwrap();
        assert_eq!(archived.word_to_gloss("friend").as_deref(), Some("FRIEND"));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = ArchivedLexicon::from_bytes(&[0xff; 7]).err().expect("garbage must not validate");
        assert!(matches!(err, LexiconError::InvalidArchive(_)));
    }
}
