//! Rank store error type.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The record file at the domain's shard path belongs to another domain
    /// (digest collision or a hand-edited file). Never overwritten.
    #[error("record {path} holds {found:?}, expected {expected:?}")]
    DomainMismatch {
        expected: String,
        found: String,
        path: PathBuf,
    },
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid record json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &std::path::Path, source: serde_json::Error) -> Self {
        StoreError::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}
