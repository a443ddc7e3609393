//! I/O helpers for consistent file/stdout handling

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tierforge::{Catalog, GeneratedItem};

/// True when `path` is the conventional "-" placeholder for stdout
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Write bytes to a file path or stdout if path is "-"
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    if is_stdout(path) {
        return io::stdout()
            .write_all(data)
            .context("Failed to write to stdout");
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}

/// Serialize `value` as pretty JSON to a file or stdout
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    json.push('\n');
    write_output(path, json.as_bytes())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load and strictly validate a catalog
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog = Catalog::load(path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;
    catalog
        .ensure_valid()
        .with_context(|| format!("Catalog {} is not usable", path.display()))?;
    Ok(catalog)
}

pub fn load_population(path: &Path) -> Result<Vec<GeneratedItem>> {
    tierforge::load_population(path)
        .with_context(|| format!("Failed to load population {}", path.display()))
}
