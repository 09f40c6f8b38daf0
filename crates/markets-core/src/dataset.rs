// crates/markets-core/src/dataset.rs
use crate::model::CompactMarket;
use serde::{Deserialize, Serialize};

/// The in-memory dataset the query service runs over.
///
/// Immutable once built; every query borrows it shared, so a single instance
/// can serve any number of concurrent callers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketDataset {
    markets: Vec<CompactMarket>,
}

impl MarketDataset {
    pub fn from_markets(markets: Vec<CompactMarket>) -> Self {
        MarketDataset { markets }
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }

    pub fn as_slice(&self) -> &[CompactMarket] {
        &self.markets
    }
}

impl From<Vec<CompactMarket>> for MarketDataset {
    fn from(markets: Vec<CompactMarket>) -> Self {
        MarketDataset::from_markets(markets)
    }
}
