// crates/markets-core/src/traits.rs
use crate::model::{Bounds, CompactMarket, DatasetStats, Market};
use std::collections::HashSet;

/// Read-only operations over a loaded market dataset.
///
/// Every method takes `&self`; implementors are expected to be immutable after
/// construction so the same value can be shared across threads.
pub trait MarketSearch {
    fn stats(&self) -> DatasetStats;

    /// All records, in artifact order.
    fn markets(&self) -> &[CompactMarket];

    fn find_by_id(&self, id: &str) -> Option<&CompactMarket>;

    /// Markets whose city equals `city`, ignoring accents and case.
    ///
    /// ```rust
    /// use markets_core::prelude::*;
    ///
    /// let db = MarketDataset::from_json_str(
    ///     r#"[{"_":"1","t":"Marché","c":[44.3,2.0],"a":"Place","p":12200,"ci":"Villefranche-de-Rouergue","h":{}}]"#,
    /// ).unwrap();
    /// assert_eq!(db.find_by_city("villefranche-de-rouergue").len(), 1);
    /// ```
    fn find_by_city(&self, city: &str) -> Vec<&CompactMarket>;

    /// Markets strictly inside `bounds` and not in `excluded`.
    ///
    /// When more than [`crate::SAMPLE_THRESHOLD`] markets qualify, a random
    /// sample of `limit` (default [`crate::DEFAULT_LIMIT`]) is returned instead.
    /// At or below the threshold the whole selection comes back, whatever
    /// `limit` says.
    fn query(&self, bounds: &Bounds, excluded: &HashSet<String>, limit: Option<usize>)
        -> Vec<Market>;
}
