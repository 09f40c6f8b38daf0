// crates/markets-core/src/lib.rs

//! # markets-core
//!
//! Builds and queries the open-air markets dataset.
//!
//! - [`loader::builder`] (feature `builder`) merges the per-region source
//!   files under `data/markets/` into one compact JSON artifact, collecting
//!   every validation failure into a [`BuildReport`].
//! - [`MarketDataset`] loads that artifact and answers bounding-box queries
//!   through the [`MarketSearch`] trait.
//!
//! ```rust
//! use markets_core::prelude::*;
//! use std::collections::HashSet;
//!
//! let db = MarketDataset::from_json_str(
//!     r#"[{"_":"k1","t":"Halles","c":[5.0,5.0],"a":"Rue","p":12000,"ci":"Rodez","h":{}}]"#,
//! )
//! .unwrap();
//! let found = db.query(&Bounds::new([0.0, 0.0], [10.0, 10.0]), &HashSet::new(), None);
//! assert_eq!(found[0].title, "Halles");
//! ```

pub mod dataset;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod report;
pub mod search;
pub mod text;
pub mod traits;
pub mod validate;

// Re-exports
pub use crate::dataset::MarketDataset;
pub use crate::error::{MarketError, Result};
pub use crate::model::{Bounds, CompactMarket, DatasetStats, Hours, LatLng, Market, SourceMarket};
pub use crate::report::{BuildFailure, BuildReport};
pub use crate::search::{DEFAULT_LIMIT, SAMPLE_THRESHOLD};
pub use crate::traits::MarketSearch;
#[cfg(feature = "builder")]
pub use crate::loader::builder::{build_dataset, check_dataset, BuildConfig};
