#![deny(unsafe_code)]

use std::path::PathBuf;

use plate_model::ModelError;
use serde_json::error::Category;

/// Fatal ingestion failures. Nothing is augmented once one of these occurs.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid structured data in {path}: {message}")]
    Syntax { path: PathBuf, message: String },

    #[error("schema violation in {path}: {message}")]
    Schema { path: PathBuf, message: String },

    #[error("unsupported synonym file {path}: expected a .toml or .json extension")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid synonym table in {path}: {source}")]
    Synonyms {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Splits a JSON failure into malformed input and well-formed input with the wrong shape.
    pub(crate) fn from_json(path: impl Into<PathBuf>, error: &serde_json::Error) -> Self {
        let path = path.into();
        let message = error.to_string();
        match error.classify() {
            Category::Data => Self::Schema { path, message },
            Category::Io | Category::Syntax | Category::Eof => Self::Syntax { path, message },
        }
    }

    /// True when the source parsed but a record or entry had the wrong shape.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. } | Self::Synonyms { .. })
    }
}
