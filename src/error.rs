//! Crate-level error type
//!
//! Loading is deterministic and idempotent, so every variant is fatal to the
//! caller; there are no retry semantics.

use std::path::PathBuf;

use crate::config::{ConfigError, ValidationReport};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single fault from the serde layer, classified into the taxonomy
    #[error(transparent)]
    Parse(#[from] ConfigError),

    /// Aggregated semantic violations
    #[error(transparent)]
    Invalid(#[from] ValidationReport),

    #[error("invalid override '{spec}': {reason}")]
    Override { spec: String, reason: String },

    #[error("failed to serialize configuration: {0}")]
    Serialize(String),
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
