// crates/markets-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the library outside of per-record validation.
///
/// Validation problems found while building are not errors in this sense:
/// they are collected into a [`crate::report::BuildReport`] so a single bad
/// record never stops the build.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

impl MarketError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MarketError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MarketError>;
