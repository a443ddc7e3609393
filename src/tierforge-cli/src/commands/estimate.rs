//! Distribution estimate command

use super::seeded_rng;
use crate::file_io::{is_stdout, load_catalog, write_json};
use anyhow::{Context, Result};
use std::path::Path;
use tierforge::{RarityConfig, RarityDistribution, RarityTier};

/// Handle the estimate command
pub fn handle(
    catalog_path: &Path,
    supply: u64,
    seed: u64,
    parallel: Option<usize>,
    output: Option<&Path>,
    rarity: &RarityConfig,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let distribution = match parallel {
        Some(chunks) => tierforge::estimate_parallel(&catalog.categories, supply, seed, chunks, rarity),
        None => {
            let mut rng = seeded_rng(seed);
            let mut unit = tierforge::unit_source(&mut rng);
            tierforge::estimate(&catalog.categories, supply, &mut unit, rarity)
        }
    }
    .context("Failed to estimate distribution")?;

    if let Some(path) = output {
        write_json(path, &distribution)?;
        if is_stdout(path) {
            return Ok(());
        }
        println!("Estimate written to {}\n", path.display());
    }

    print_distribution(&distribution, supply, rarity);
    println!("\nSeed: {} (re-run with --seed {} to reproduce)", seed, seed);

    Ok(())
}

/// Print a tier table with shares and multipliers
pub fn print_distribution(distribution: &RarityDistribution, supply: u64, rarity: &RarityConfig) {
    println!(
        "{:<12} {:>8} {:>8} {:>12}",
        "Tier", "Count", "Share", "Multiplier"
    );
    println!("{}", "-".repeat(43));

    for tier in RarityTier::ALL {
        println!(
            "{:<12} {:>8} {:>7.2}% {:>11}x",
            tier.name(),
            distribution.get(tier),
            distribution.percent(tier),
            rarity.multipliers.get(tier)
        );
    }

    let total = distribution.total();
    println!("{}", "-".repeat(43));
    println!("{:<12} {:>8}", "Total", total);

    if total != supply {
        // Per-tier rounding; expected and not corrected
        println!(
            "\nNote: total differs from target supply {} by {} due to per-tier rounding",
            supply,
            total.abs_diff(supply)
        );
    }
}
