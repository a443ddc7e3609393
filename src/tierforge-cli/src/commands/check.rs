//! Catalog pre-flight check command

use anyhow::{bail, Context, Result};
use std::path::Path;
use tierforge::{annotate_traits, Catalog, TierMultipliers};

/// Handle the check command
pub fn handle(catalog_path: &Path, supply: Option<u64>, traits: bool, multipliers: &TierMultipliers) -> Result<()> {
    // Load without ensure_valid so every problem gets reported
    let catalog = Catalog::load(catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

    println!("Catalog: {}", catalog.name);
    if !catalog.description.is_empty() {
        println!("  {}", catalog.description);
    }
    println!(
        "Categories: {} ({} sampleable), traits: {}",
        catalog.categories.len(),
        catalog.sampleable_categories().count(),
        catalog.trait_count()
    );

    if traits {
        print_traits(&catalog, multipliers);
    }

    let check = catalog.check(supply);

    for warning in &check.warnings {
        println!("warning: {}", warning);
    }
    for error in &check.errors {
        println!("error: {}", error);
    }

    if !check.is_valid() {
        bail!("Catalog has {} error(s)", check.errors.len());
    }

    println!("\nCatalog OK");
    Ok(())
}

fn print_traits(catalog: &Catalog, multipliers: &TierMultipliers) {
    for category in &catalog.categories {
        let visibility = if category.visible { "" } else { " (hidden)" };
        println!("\n{}{}", category.name, visibility);

        let total = category.total_weight();
        for annotated in annotate_traits(&category.traits, multipliers) {
            let share = if total > 0.0 {
                annotated.base.weight / total * 100.0
            } else {
                0.0
            };
            println!(
                "  {:<24} {:>8.2} {:>6.2}%  {:<10} {:>5}x",
                annotated.base.name,
                annotated.base.weight,
                share,
                annotated.tier.name(),
                annotated.multiplier
            );
        }
    }
}
