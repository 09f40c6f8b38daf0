//! markets — build and query the open-air markets dataset
//!
//! Usage examples
//! --------------
//!
//! - Merge `data/markets/**/*.json` into `src/lib/markets.json`
//!   $ markets build
//!
//! - Validate the sources without touching the dataset
//!   $ markets build --check
//!
//! - Show overall stats
//!   $ markets stats
//!
//! - Markets inside a box (min lat, min lng, max lat, max lng)
//!   $ markets query 44.0 1.5 44.6 2.6 --limit 20
//!
//! - Markets in a city
//!   $ markets city "villefranche-de-rouergue"
//!
//! `build` exits with status 1 when any source file or record is rejected,
//! after writing the records that did validate. Logs go to stderr and honour
//! `RUST_LOG`; query results are printed to stdout as JSON.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use markets_core::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = CliArgs::parse();

    let dataset_path = args
        .dataset
        .unwrap_or_else(MarketDataset::default_dataset_path);

    match args.command {
        Commands::Build {
            root,
            out,
            check,
            jobs,
        } => {
            let mut config = BuildConfig::new(root, out.unwrap_or(dataset_path));
            if let Some(jobs) = jobs {
                config = config.with_workers(jobs);
            }

            let report = if check {
                check_dataset(&config)?
            } else {
                build_dataset(&config)
                    .with_context(|| format!("building {}", config.destination.display()))?
            };

            if !report.is_success() {
                eprint!("{report}");
                return Ok(ExitCode::FAILURE);
            }

            if check {
                println!("✓ {} markets valid in {} files", report.written, report.files);
            } else {
                println!("✓ {report}");
            }
        }

        Commands::Stats => {
            let db = load(&dataset_path)?;
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Markets: {}", stats.markets);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Query {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
            exclude,
            limit,
        } => {
            let db = load(&dataset_path)?;
            let bounds = Bounds::new([min_lat, min_lng], [max_lat, max_lng]);
            let excluded: HashSet<String> = exclude.into_iter().collect();
            let found = db.query(&bounds, &excluded, limit);
            println!("{}", serde_json::to_string_pretty(&found)?);
        }

        Commands::City { name } => {
            let db = load(&dataset_path)?;
            let found: Vec<Market> = db
                .find_by_city(&name)
                .into_iter()
                .map(CompactMarket::to_market)
                .collect();
            if found.is_empty() {
                eprintln!("No markets found in: {name}");
            }
            println!("{}", serde_json::to_string_pretty(&found)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load(path: &Path) -> anyhow::Result<MarketDataset> {
    MarketDataset::load_from_path(path)
        .with_context(|| format!("loading dataset {} (run `markets build` first?)", path.display()))
}
