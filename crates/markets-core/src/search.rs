// crates/markets-core/src/search.rs
use crate::dataset::MarketDataset;
use crate::model::{Bounds, CompactMarket, DatasetStats, Market};
use crate::text::fold_key;
use crate::traits::MarketSearch;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Above this many in-bounds markets, results are sampled down to the limit.
pub const SAMPLE_THRESHOLD: usize = 100;

/// Sample size used when the caller passes no limit.
pub const DEFAULT_LIMIT: usize = 100;

impl MarketDataset {
    /// [`MarketSearch::query`] with a caller-supplied RNG, for reproducible
    /// sampling.
    pub fn query_with_rng<R: Rng + ?Sized>(
        &self,
        bounds: &Bounds,
        excluded: &HashSet<String>,
        limit: Option<usize>,
        rng: &mut R,
    ) -> Vec<Market> {
        let selected: Vec<&CompactMarket> = self
            .as_slice()
            .iter()
            .filter(|m| bounds.contains(&m.coordinates) && !excluded.contains(&m.id))
            .collect();

        // The threshold and the limit are two separate gates: `limit` only
        // matters once the threshold is crossed.
        if selected.len() > SAMPLE_THRESHOLD {
            let limit = limit.unwrap_or(DEFAULT_LIMIT);
            selected
                .choose_multiple(rng, limit)
                .map(|m| m.to_market())
                .collect()
        } else {
            selected.into_iter().map(CompactMarket::to_market).collect()
        }
    }
}

impl MarketSearch for MarketDataset {
    fn stats(&self) -> DatasetStats {
        let cities: HashSet<String> = self
            .as_slice()
            .iter()
            .map(|m| fold_key(&m.city))
            .collect();
        DatasetStats {
            markets: self.len(),
            cities: cities.len(),
        }
    }

    fn markets(&self) -> &[CompactMarket] {
        self.as_slice()
    }

    fn find_by_id(&self, id: &str) -> Option<&CompactMarket> {
        self.as_slice().iter().find(|m| m.id == id)
    }

    fn find_by_city(&self, city: &str) -> Vec<&CompactMarket> {
        let q = fold_key(city);
        if q.is_empty() {
            return Vec::new();
        }
        self.as_slice()
            .iter()
            .filter(|m| fold_key(&m.city) == q)
            .collect()
    }

    fn query(
        &self,
        bounds: &Bounds,
        excluded: &HashSet<String>,
        limit: Option<usize>,
    ) -> Vec<Market> {
        self.query_with_rng(bounds, excluded, limit, &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hours, LatLng};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn market(id: &str, lat: f64, lng: f64, city: &str) -> CompactMarket {
        CompactMarket {
            id: id.into(),
            title: format!("market {id}"),
            coordinates: LatLng(lat, lng),
            address: "Place du Marché".into(),
            postal_code: 12000,
            city: city.into(),
            hours: Hours::new(),
        }
    }

    fn three() -> MarketDataset {
        MarketDataset::from_markets(vec![
            market("a", 5.0, 5.0, "Rodez"),
            market("b", 20.0, 20.0, "Albi"),
            market("c", 1.0, 1.0, "rodez"),
        ])
    }

    fn ids(found: &[Market]) -> Vec<&str> {
        let mut ids: Vec<&str> = found.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn returns_markets_inside_bounds() {
        let db = three();
        let found = db.query(
            &Bounds::new([0.0, 0.0], [10.0, 10.0]),
            &HashSet::new(),
            Some(100),
        );
        assert_eq!(ids(&found), ["a", "c"]);
    }

    #[test]
    fn excluded_ids_are_skipped() {
        let db = three();
        let excluded: HashSet<String> = ["a".to_string()].into();
        let found = db.query(&Bounds::new([0.0, 0.0], [10.0, 10.0]), &excluded, None);
        assert_eq!(ids(&found), ["c"]);
    }

    #[test]
    fn limit_is_ignored_at_or_below_threshold() {
        let db = MarketDataset::from_markets(
            (0..SAMPLE_THRESHOLD)
                .map(|i| market(&i.to_string(), 1.0, 1.0 + i as f64 * 0.001, "x"))
                .collect(),
        );
        let found = db.query(&Bounds::new([0.0, 0.0], [2.0, 2.0]), &HashSet::new(), Some(3));
        assert_eq!(found.len(), SAMPLE_THRESHOLD);
    }

    #[test]
    fn over_threshold_samples_exactly_limit() {
        let db = MarketDataset::from_markets(
            (0..250)
                .map(|i| market(&i.to_string(), 1.0, 1.0 + i as f64 * 0.001, "x"))
                .collect(),
        );
        let mut rng = StdRng::seed_from_u64(7);
        let found = db.query_with_rng(
            &Bounds::new([0.0, 0.0], [2.0, 2.0]),
            &HashSet::new(),
            Some(10),
            &mut rng,
        );
        assert_eq!(found.len(), 10);
        let unique: HashSet<&str> = found.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn over_threshold_without_limit_uses_default() {
        let db = MarketDataset::from_markets(
            (0..150)
                .map(|i| market(&i.to_string(), 1.0, 1.0 + i as f64 * 0.001, "x"))
                .collect(),
        );
        let found = db.query(&Bounds::new([0.0, 0.0], [2.0, 2.0]), &HashSet::new(), None);
        assert_eq!(found.len(), DEFAULT_LIMIT);
    }

    #[test]
    fn city_lookup_folds_case() {
        let db = three();
        assert_eq!(db.find_by_city("RODEZ").len(), 2);
        assert!(db.find_by_city("  ").is_empty());
        assert_eq!(db.stats(), DatasetStats { markets: 3, cities: 2 });
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        let db = three();
        assert_eq!(db.find_by_id("b").map(|m| m.city.as_str()), Some("Albi"));
        assert!(db.find_by_id("zzz").is_none());
    }
}
