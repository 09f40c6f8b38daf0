// crates/markets-core/src/prelude.rs
pub use crate::dataset::MarketDataset;
pub use crate::error::{MarketError, Result};
pub use crate::model::{Bounds, CompactMarket, DatasetStats, Hours, LatLng, Market};
pub use crate::traits::MarketSearch;
pub use crate::{DEFAULT_LIMIT, SAMPLE_THRESHOLD};

#[cfg(feature = "builder")]
pub use crate::loader::builder::{build_dataset, check_dataset, BuildConfig};
#[cfg(feature = "builder")]
pub use crate::report::BuildReport;
