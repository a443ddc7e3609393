//! Post-generation audit commands: verify and stats

use crate::file_io::{load_population, read_json};
use anyhow::{bail, Context, Result};
use std::path::Path;
use tierforge::{CollectionStats, RarityDistribution, VerificationReport};

/// Handle the verify command
///
/// Fails when any tier is outside tolerance so scripts can gate on the exit code.
pub fn verify(population: &Path, expected: &Path, tolerance: f64) -> Result<()> {
    let items = load_population(population)?;
    let expected: RarityDistribution = read_json(expected)
        .with_context(|| format!("Failed to load expected distribution {}", expected.display()))?;

    let report = tierforge::verify(&items, &expected, tolerance)?;
    print_report(&report, tolerance);

    if !report.is_valid {
        bail!(
            "{} tier(s) outside {}% tolerance",
            report.discrepancies.len(),
            tolerance
        );
    }

    Ok(())
}

fn print_report(report: &VerificationReport, tolerance: f64) {
    if report.is_valid {
        println!("All tiers within {}% tolerance", tolerance);
        return;
    }

    println!(
        "{:<12} {:>9} {:>9} {:>9} {:>10}",
        "Tier", "Expected", "Actual", "Diff", "Allowed"
    );
    for d in &report.discrepancies {
        println!(
            "{:<12} {:>9} {:>9} {:>9} {:>10.2}",
            d.tier.name(),
            d.expected_count,
            d.actual_count,
            d.absolute_difference,
            d.tolerance_amount
        );
    }
}

/// Handle the stats command
pub fn stats(population: &Path, json: bool) -> Result<()> {
    let items = load_population(population)?;
    let stats = tierforge::summarize(&items)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats);
    }

    Ok(())
}

fn print_stats(stats: &CollectionStats) {
    println!("Items:            {}", stats.total_supply);
    println!("Average rarity:   {:.2}", stats.average_rarity);
    println!("Total multiplier: {}", stats.total_multiplier);

    if let Some(key) = &stats.most_common_trait {
        println!("Most common:      {}", key);
    }
    if let Some(key) = &stats.rarest_trait {
        println!("Rarest:           {}", key);
    }

    println!("\nTier distribution:");
    for (tier, count) in stats.distribution.iter() {
        println!(
            "  {:<10} {:>8} {:>7.2}%",
            tier.name(),
            count,
            stats.distribution.percent(tier)
        );
    }

    println!("\nTrait frequencies:");
    for freq in &stats.trait_frequencies {
        println!("  {:<32} {:>8} {:>7.2}%", freq.key.to_string(), freq.count, freq.percent);
    }
}
