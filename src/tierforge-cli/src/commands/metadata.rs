//! Metadata export command

use crate::file_io::{is_stdout, load_population, write_json};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tierforge::{CollectionInfo, ItemMetadata};

/// Handle the metadata command
///
/// Writes `<id>.json` per item into `output`, or one JSON array to stdout
/// when `output` is "-".
pub fn handle(population: &Path, collection: CollectionInfo, output: &Path) -> Result<()> {
    let items = load_population(population)?;
    let documents: Vec<ItemMetadata> = items
        .iter()
        .map(|item| ItemMetadata::project(item, &collection))
        .collect();

    if is_stdout(output) {
        return write_json(output, &documents);
    }

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create directory {}", output.display()))?;

    for (item, doc) in items.iter().zip(&documents) {
        write_json(&output.join(format!("{}.json", item.id)), doc)?;
    }

    tracing::info!(count = documents.len(), dir = %output.display(), "metadata written");
    println!("Wrote {} metadata files to {}", documents.len(), output.display());

    Ok(())
}
