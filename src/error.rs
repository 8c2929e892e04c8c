//! Errors raised at the edges of the simulation
//!
//! The physics itself is total; only file I/O, parsing and caller-supplied
//! population counts can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("population count must be non-negative, got {0}")]
    NegativePopulation(i64),

    #[error("unknown config field `{0}`")]
    UnknownField(String),

    #[error("expected FIELD=VALUE, got `{0}`")]
    InvalidOverride(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
