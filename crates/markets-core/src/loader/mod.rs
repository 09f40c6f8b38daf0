// crates/markets-core/src/loader/mod.rs

//! # Data Loader
//!
//! Reads the consolidated artifact back into a [`MarketDataset`], and (with the
//! `builder` feature) produces that artifact from the per-region sources.

use crate::dataset::MarketDataset;
use crate::error::Result;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod common_io;

#[cfg(feature = "builder")]
pub mod builder;

/// Artifact location used when the caller does not name one.
pub const DEFAULT_DATASET_PATH: &str = "src/lib/markets.json";

impl MarketDataset {
    pub fn default_dataset_path() -> PathBuf {
        PathBuf::from(DEFAULT_DATASET_PATH)
    }

    /// **Standard Loader:** reads an artifact written by the builder.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let db = Self::from_reader(reader)?;
        debug!(path = %path.display(), markets = db.len(), "loaded market dataset");
        Ok(db)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parses an artifact already held in memory (the WASM side gets it as text).
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;

    #[test]
    fn reads_compact_records() {
        let json = r#"[{"_":"id1","t":"A","c":[1.5,2.5],"a":"addr","p":12200,"ci":"Rodez","h":{"lundi":"8h"}}]"#;
        let db = MarketDataset::from_json_str(json).unwrap();
        assert_eq!(db.len(), 1);
        let m = &db.as_slice()[0];
        assert_eq!(m.id, "id1");
        assert_eq!(m.coordinates.lng(), 2.5);
        assert_eq!(m.hours["lundi"], "8h");
    }

    #[test]
    fn missing_artifact_is_not_found() {
        let err = MarketDataset::load_from_path("does/not/exist.json").unwrap_err();
        assert!(matches!(err, MarketError::NotFound(_)));
    }

    #[test]
    fn malformed_artifact_is_a_json_error() {
        let err = MarketDataset::from_json_str(r#"{"not":"an array"}"#).unwrap_err();
        assert!(matches!(err, MarketError::Json(_)));
    }
}
