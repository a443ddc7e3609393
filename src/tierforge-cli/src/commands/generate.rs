//! Population generation command

use super::estimate::print_distribution;
use super::seeded_rng;
use crate::file_io::load_catalog;
use anyhow::{Context, Result};
use std::path::Path;
use tierforge::{RarityConfig, RarityDistribution};

/// Handle the generate command
pub fn handle(catalog_path: &Path, supply: u64, seed: u64, output: &Path, rarity: &RarityConfig) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let check = catalog.check(Some(supply));
    for warning in &check.warnings {
        tracing::warn!("{}", warning);
    }

    let mut rng = seeded_rng(seed);
    let mut unit = tierforge::unit_source(&mut rng);
    let items = tierforge::generate(&catalog.categories, supply, &mut unit, rarity)
        .context("Failed to generate population")?;

    tierforge::save_population(output, &items)
        .with_context(|| format!("Failed to write population {}", output.display()))?;

    println!(
        "Generated {} items from '{}' (seed {})",
        items.len(),
        catalog.name,
        seed
    );
    println!("Population written to {}\n", output.display());
    print_distribution(&RarityDistribution::tally(&items), supply, rarity);

    Ok(())
}
