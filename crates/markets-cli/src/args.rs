use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the markets tool
#[derive(Debug, Parser)]
#[command(
    name = "markets",
    version,
    about = "Build, validate and query the open-air markets dataset"
)]
pub struct CliArgs {
    /// Path to the consolidated dataset (default: src/lib/markets.json)
    #[arg(short = 'd', long = "dataset", global = true)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge the per-region source files into the dataset
    Build {
        /// Root of the per-region source tree
        #[arg(long, default_value = markets_core::loader::builder::DEFAULT_SOURCE_ROOT)]
        root: PathBuf,

        /// Output file; overrides --dataset
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,

        /// Validate only, do not write the dataset
        #[arg(long)]
        check: bool,

        /// Worker threads (default: available parallelism)
        #[arg(short = 'j', long)]
        jobs: Option<usize>,
    },

    /// Show a summary of the dataset contents
    Stats,

    /// List markets strictly inside a bounding box
    #[command(allow_negative_numbers = true)]
    Query {
        min_lat: f64,
        min_lng: f64,
        max_lat: f64,
        max_lng: f64,

        /// Market id to leave out (repeatable)
        #[arg(short = 'x', long = "exclude")]
        exclude: Vec<String>,

        /// Sample size once more than 100 markets match
        #[arg(short = 'l', long)]
        limit: Option<usize>,
    },

    /// List markets in a city (accent and case insensitive)
    City {
        /// City name, e.g. "Villefranche-de-Rouergue"
        name: String,
    },
}
