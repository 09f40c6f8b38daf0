//! Basic usage: load the consolidated dataset and ask what is on screen.
//!
//! Run `cargo run -p markets-cli -- build` first so `src/lib/markets.json`
//! exists, then `cargo run --example basic_usage`.

use markets_core::prelude::*;
use std::collections::HashSet;

fn main() -> Result<()> {
    println!("=== markets-rs Basic Usage ===\n");

    let db = MarketDataset::load_from_path(MarketDataset::default_dataset_path())?;
    let stats = db.stats();
    println!("Loaded {} markets in {} cities\n", stats.markets, stats.cities);

    // A viewport roughly covering Occitanie.
    let viewport = Bounds::new([42.3, -0.3], [45.1, 4.9]);
    let mut shown: HashSet<String> = HashSet::new();

    println!("--- First pass over the viewport ---");
    for m in db.query(&viewport, &shown, None) {
        println!("  {} ({}, {})", m.title, m.city, m.postal_code);
        shown.insert(m.id);
    }

    // Same viewport again: everything already drawn is skipped.
    let again = db.query(&viewport, &shown, None);
    println!("\n--- Second pass: {} new markets ---", again.len());

    println!("\n--- Markets in Toulouse ---");
    for m in db.find_by_city("toulouse") {
        let days: Vec<&str> = m.hours.keys().map(String::as_str).collect();
        println!("  {} — {}", m.title, days.join(", "));
    }

    Ok(())
}
