use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid catalog {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// O mesmo key aponta para textos fonte diferentes em idiomas diferentes.
    /// O texto fonte não varia por idioma, então isso é catálogo corrompido.
    #[error(
        "key [{key}] has conflicting source messages: {lang_a}: {message_a:?} vs {lang_b}: {message_b:?}"
    )]
    MessageConflict {
        key: String,
        lang_a: String,
        message_a: String,
        lang_b: String,
        message_b: String,
    },

    #[error("extraction failed for project {project}: {reason}")]
    Extract { project: String, reason: String },
}
