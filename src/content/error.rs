//! Errors raised while loading content

use std::path::PathBuf;
use thiserror::Error;

/// Load-time content errors. Once a [`ContentStore`](super::ContentStore)
/// exists, nothing that reads it can fail.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("failed to serialize content: {0}")]
    Serialize(String),

    #[error("unsupported content format {0:?} (expected .yml, .yaml, .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("duplicate post id: {0}")]
    DuplicateId(String),

    #[error("post {title:?} has an empty id")]
    EmptyId { title: String },

    #[error("invalid date {date:?} for post {id}: expected YYYY-MM-DD")]
    InvalidDate { id: String, date: String },
}
