// crates/markets-core/src/loader/common_io.rs
use crate::error::{MarketError, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        MarketError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    Ok(Box::new(BufReader::new(file)))
}

/// Serializes `value` as JSON into `path`, replacing whatever was there.
///
/// Missing parent directories are created.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MarketError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| MarketError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, value)?;
    writer.flush().map_err(|e| MarketError::io(path, e))?;
    Ok(())
}

/// `./`-prefixed, `/`-separated name of `path` relative to `root`.
pub fn display_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let joined = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("./{joined}")
}
