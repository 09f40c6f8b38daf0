// crates/markets-core/src/loader/builder.rs

//! # Dataset Builder
//!
//! Walks the per-region source tree, validates every record, mints ids and
//! writes the consolidated artifact. Files are processed in parallel but the
//! artifact always follows discovery order.

use super::common_io;
use crate::error::{MarketError, Result};
use crate::model::CompactMarket;
use crate::report::{BuildFailure, BuildReport};
use crate::validate::validate_market;

use serde_json::Value;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{debug, info, warn};
use uuid::Uuid;
use walkdir::{DirEntry, WalkDir};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

pub const DEFAULT_SOURCE_ROOT: &str = "data/markets";
pub const DEFAULT_DESTINATION: &str = "src/lib/markets.json";
pub const DEFAULT_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Root of the per-region tree; every `**/*.<extension>` below it is read.
    pub source_root: PathBuf,
    /// The artifact. Overwritten on every build.
    pub destination: PathBuf,
    pub extension: String,
    /// Upper bound on worker threads. `1` processes files inline.
    pub workers: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            extension: DEFAULT_EXTENSION.to_string(),
            workers: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

impl BuildConfig {
    pub fn new(source_root: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        BuildConfig {
            source_root: source_root.into(),
            destination: destination.into(),
            ..Default::default()
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}

/// One discovered input file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Name used in diagnostics, relative to the source root.
    pub name: String,
}

/// Everything one file contributed: its accepted records and its failures.
#[derive(Debug, Default)]
pub struct FileOutcome {
    pub markets: Vec<CompactMarket>,
    pub failures: Vec<BuildFailure>,
}

impl FileOutcome {
    fn failed(failure: BuildFailure) -> Self {
        FileOutcome {
            markets: Vec::new(),
            failures: vec![failure],
        }
    }
}

// -----------------------------------------------------------------------------
// PIPELINE
// -----------------------------------------------------------------------------

/// **Full Build:** validate every source file and write the artifact.
///
/// The artifact is written even when some records fail; the returned report
/// carries those failures and decides the exit status. Only a missing source
/// root or a failed write of the artifact itself is an `Err`.
pub fn build_dataset(config: &BuildConfig) -> Result<BuildReport> {
    let (markets, mut report) = collect_markets(config)?;

    common_io::write_json(&config.destination, &markets)?;
    report.written = markets.len();

    info!(
        files = report.files,
        written = report.written,
        failures = report.failures.len(),
        destination = %config.destination.display(),
        "market dataset written"
    );
    Ok(report)
}

/// **Dry Run:** same validation as [`build_dataset`], nothing is written.
pub fn check_dataset(config: &BuildConfig) -> Result<BuildReport> {
    let (markets, mut report) = collect_markets(config)?;
    report.written = markets.len();
    Ok(report)
}

/// Discovers, validates and encodes; returns the records in artifact order.
pub fn collect_markets(config: &BuildConfig) -> Result<(Vec<CompactMarket>, BuildReport)> {
    if !config.source_root.is_dir() {
        return Err(MarketError::NotFound(format!(
            "Source directory not found: {}",
            config.source_root.display()
        )));
    }

    let (files, mut failures) = discover_files(&config.source_root, &config.extension);
    debug!(count = files.len(), root = %config.source_root.display(), "discovered source files");

    let mut markets = Vec::new();
    for outcome in process_files(&files, config.workers) {
        markets.extend(outcome.markets);
        failures.extend(outcome.failures);
    }

    let report = BuildReport {
        files: files.len(),
        written: 0,
        failures,
    };
    Ok((markets, report))
}

/// Lists every `*.<extension>` file under `root`, sorted by path.
///
/// Symlinks are followed; hidden files and directories below the root are
/// skipped. Walk errors (unreadable sub-directories, dangling links) come back
/// as failures instead of aborting the listing.
pub fn discover_files(root: &Path, extension: &str) -> (Vec<SourceFile>, Vec<BuildFailure>) {
    let mut files = Vec::new();
    let mut failures = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                let matches = entry.file_type().is_file()
                    && path.extension().is_some_and(|e| e == extension);
                if matches {
                    files.push(SourceFile {
                        name: common_io::display_name(root, path),
                        path: entry.into_path(),
                    });
                }
            }
            Err(err) => {
                let file = err
                    .path()
                    .map(|p| common_io::display_name(root, p))
                    .unwrap_or_else(|| common_io::display_name(root, root));
                failures.push(BuildFailure::Io {
                    file,
                    source: err.into(),
                });
            }
        }
    }

    (files, failures)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|n| n.starts_with('.'))
}

/// Processes `files` on up to `workers` scoped threads.
///
/// Each thread takes a contiguous chunk, so joining the chunks in order gives
/// back one outcome per file, in input order.
pub fn process_files(files: &[SourceFile], workers: usize) -> Vec<FileOutcome> {
    if files.is_empty() {
        return Vec::new();
    }
    let workers = workers.clamp(1, files.len());
    if workers == 1 {
        return files.iter().map(process_file).collect();
    }

    let chunk_size = files.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = files
            .chunks(chunk_size)
            .map(|chunk| {
                let handle =
                    scope.spawn(move || chunk.iter().map(process_file).collect::<Vec<_>>());
                (chunk, handle)
            })
            .collect();

        let mut outcomes = Vec::with_capacity(files.len());
        for (chunk, handle) in handles {
            match handle.join() {
                Ok(done) => outcomes.extend(done),
                Err(_) => outcomes.extend(chunk.iter().map(|f| {
                    FileOutcome::failed(BuildFailure::Worker {
                        file: f.name.clone(),
                    })
                })),
            }
        }
        outcomes
    })
}

/// Reads, parses and validates one region file.
pub fn process_file(file: &SourceFile) -> FileOutcome {
    let content = match std::fs::read_to_string(&file.path) {
        Ok(c) => c,
        Err(source) => {
            warn!(file = %file.name, error = %source, "unreadable source file");
            return FileOutcome::failed(BuildFailure::Io {
                file: file.name.clone(),
                source,
            });
        }
    };

    let outcome = encode_file(&file.name, &content);
    debug!(
        file = %file.name,
        accepted = outcome.markets.len(),
        failures = outcome.failures.len(),
        "processed source file"
    );
    outcome
}

/// Validates and encodes the raw JSON text of one region file.
pub fn encode_file(name: &str, content: &str) -> FileOutcome {
    let root: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(source) => {
            return FileOutcome::failed(BuildFailure::Json {
                file: name.to_string(),
                source,
            })
        }
    };

    let Value::Array(entries) = root else {
        return FileOutcome::failed(BuildFailure::Shape {
            file: name.to_string(),
        });
    };

    let mut outcome = FileOutcome::default();
    for (index, entry) in entries.iter().enumerate() {
        match validate_market(entry) {
            Ok(src) => outcome
                .markets
                .push(CompactMarket::from_source(new_market_id(), src)),
            Err(errors) => {
                outcome
                    .failures
                    .extend(errors.into_iter().map(|error| BuildFailure::Field {
                        file: name.to_string(),
                        index,
                        error,
                    }))
            }
        }
    }
    outcome
}

/// A fresh opaque id. Not stable across builds.
pub fn new_market_id() -> String {
    Uuid::new_v4().simple().to_string()
}
