//! Single-trait display tier lookup

use anyhow::{bail, Result};
use tierforge::{classify_trait_with, RarityConfig};

/// Handle the classify-trait command
pub fn handle(weight: f64, config: &RarityConfig) -> Result<()> {
    if !weight.is_finite() {
        bail!("Weight must be a finite number");
    }

    let result = classify_trait_with(weight, &config.multipliers);
    println!("Weight:     {}", weight);
    println!("Tier:       {} ({})", result.tier, result.tier.color());
    println!("Multiplier: x{}", result.multiplier);
    println!();
    println!("Note: this is the single-trait display ladder; item tiers are");
    println!("      computed from combined weights and can differ.");

    Ok(())
}
