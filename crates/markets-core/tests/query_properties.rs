use markets_core::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn market(i: usize, lat: f64, lng: f64) -> CompactMarket {
    CompactMarket {
        id: format!("m{i}"),
        title: format!("Marché {i}"),
        coordinates: LatLng(lat, lng),
        address: "Place".into(),
        postal_code: 31000,
        city: "Toulouse".into(),
        hours: Hours::new(),
    }
}

/// Uniform scatter over `[-10,20)²`; about a ninth lands inside `[0,0]..[10,10]`.
fn scattered(n: usize, seed: u64) -> MarketDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| market(i, rng.gen_range(-10.0..20.0), rng.gen_range(-10.0..20.0)))
        .collect::<Vec<_>>()
        .into()
}

fn inside(db: &MarketDataset, bounds: &Bounds, excluded: &HashSet<String>) -> HashSet<String> {
    db.markets()
        .iter()
        .filter(|m| bounds.contains(&m.coordinates) && !excluded.contains(&m.id))
        .map(|m| m.id.clone())
        .collect()
}

#[test]
fn three_point_scenario() {
    let db = MarketDataset::from_markets(vec![
        market(0, 5.0, 5.0),
        market(1, 20.0, 20.0),
        market(2, 1.0, 1.0),
    ]);
    let found = db.query(
        &Bounds::new([0.0, 0.0], [10.0, 10.0]),
        &HashSet::new(),
        Some(100),
    );
    let coords: HashSet<(i64, i64)> = found
        .iter()
        .map(|m| (m.coordinates.lat() as i64, m.coordinates.lng() as i64))
        .collect();
    assert_eq!(coords, HashSet::from([(5, 5), (1, 1)]));
}

#[test]
fn results_respect_bounds_and_exclusions() {
    let bounds = Bounds::new([0.0, 0.0], [10.0, 10.0]);
    for seed in 0..20 {
        let db = scattered(300, seed);
        let excluded: HashSet<String> = (0..300).step_by(4).map(|i| format!("m{i}")).collect();
        let found = db.query(&bounds, &excluded, Some(25));
        for m in &found {
            assert!(bounds.contains(&m.coordinates), "{m:?} outside bounds");
            assert!(!excluded.contains(&m.id), "{} was excluded", m.id);
        }
    }
}

#[test]
fn small_selection_is_returned_whole_regardless_of_limit() {
    let bounds = Bounds::new([0.0, 0.0], [10.0, 10.0]);
    let db = scattered(120, 3);
    let expected = inside(&db, &bounds, &HashSet::new());
    assert!(expected.len() <= SAMPLE_THRESHOLD);

    let found = db.query(&bounds, &HashSet::new(), Some(1));
    let got: HashSet<String> = found.into_iter().map(|m| m.id).collect();
    assert_eq!(got, expected);
}

#[test]
fn large_selection_is_sampled_to_limit_without_duplicates() {
    let bounds = Bounds::new([0.0, 0.0], [10.0, 10.0]);
    let db = scattered(2_000, 11);
    let pool = inside(&db, &bounds, &HashSet::new());
    assert!(pool.len() > SAMPLE_THRESHOLD);

    let mut rng = StdRng::seed_from_u64(99);
    for limit in [1, 17, 100] {
        let found = db.query_with_rng(&bounds, &HashSet::new(), Some(limit), &mut rng);
        assert_eq!(found.len(), limit);
        let ids: HashSet<&str> = found.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), limit);
        assert!(ids.iter().all(|id| pool.contains(*id)));
    }
}

#[test]
fn exclusion_can_bring_selection_back_under_threshold() {
    let bounds = Bounds::new([0.0, 0.0], [10.0, 10.0]);
    let db = MarketDataset::from_markets((0..105).map(|i| market(i, 5.0, 5.0)).collect());
    let excluded: HashSet<String> = (0..5).map(|i| format!("m{i}")).collect();

    let found = db.query(&bounds, &excluded, Some(10));
    assert_eq!(found.len(), 100);
}

#[test]
fn degenerate_bounds_return_nothing() {
    let db = scattered(50, 1);
    let flat = Bounds::new([5.0, 5.0], [5.0, 5.0]);
    assert!(db.query(&flat, &HashSet::new(), None).is_empty());
    let inverted = Bounds::new([10.0, 10.0], [0.0, 0.0]);
    assert!(db.query(&inverted, &HashSet::new(), None).is_empty());
}

#[test]
fn dataset_is_shareable_across_threads() {
    let db = scattered(500, 5);
    let bounds = Bounds::new([0.0, 0.0], [10.0, 10.0]);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let found = db.query(&bounds, &HashSet::new(), Some(50));
                assert!(found.iter().all(|m| bounds.contains(&m.coordinates)));
            });
        }
    });
}
