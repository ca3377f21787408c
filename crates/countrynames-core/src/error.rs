// crates/countrynames-core/src/error.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading reference datasets or persisting records.
///
/// A missing country record is *not* an error: [`crate::store::RecordStore`]
/// turns it into an empty record. Everything that ends up here aborts a run.
#[derive(Debug, Error)]
pub enum NamesError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[cfg(feature = "builder")]
    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl NamesError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        NamesError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        NamesError::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NamesError>;
