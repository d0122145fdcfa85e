use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or compiling a sign atlas.
///
/// These surface before any translation runs; lookups themselves never fail.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("invalid atlas JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid atlas archive: {0}")]
    InvalidArchive(String),

    #[error("failed to serialize atlas: {0}")]
    Serialize(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
