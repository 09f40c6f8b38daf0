//! Builds the dataset from `data/markets` into a scratch file, prints the
//! validation report, then runs a bounds query over the result.

use markets_core::prelude::*;
use std::collections::HashSet;

fn main() -> Result<()> {
    let out = std::env::temp_dir().join("markets-demo.json");
    let config = BuildConfig::new("data/markets", &out);

    let report = build_dataset(&config)?;
    if report.is_success() {
        println!("✓ {report}");
    } else {
        eprint!("{report}");
    }

    let db = MarketDataset::load_from_path(&out)?;
    let rennes = Bounds::new([48.0, -1.8], [48.2, -1.5]);
    for m in db.query(&rennes, &HashSet::new(), Some(10)) {
        println!("{} @ {:?}", m.title, m.coordinates);
    }
    Ok(())
}
