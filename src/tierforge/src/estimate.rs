//! Monte-Carlo estimate of a collection's tier distribution
//!
//! Each simulation draws one trait per sampleable category, classifies the
//! resulting set, and bumps that tier's count. The raw counts are then
//! turned into a share of simulations and scaled to the target supply,
//! rounding every tier on its own. Because of that per-tier rounding the
//! scaled total can drift from the target by a few items; the drift is
//! accepted and never redistributed.

use crate::catalog::{Category, Trait};
use crate::classify::{classify_item, RarityConfig};
use crate::distribution::RarityDistribution;
use crate::error::RarityError;
use crate::sampler;
use crate::tier::RarityTier;

/// Upper bound on simulations for a single estimate
pub const MAX_SIMULATIONS: u64 = 1000;

/// Simulations to run for `target_supply`: `min(1000, 2 * supply)`
pub fn simulation_count(target_supply: u64) -> Result<u64, RarityError> {
    if target_supply == 0 {
        return Err(RarityError::InvalidSupply(target_supply));
    }
    Ok(target_supply.saturating_mul(2).clamp(1, MAX_SIMULATIONS))
}

/// Draw one trait from every sampleable category.
///
/// Invisible, empty and zero-weight categories contribute nothing.
pub fn select_traits<'a, F>(
    categories: &'a [Category],
    rng: &mut F,
) -> Result<Vec<&'a Trait>, RarityError>
where
    F: FnMut() -> f64 + ?Sized,
{
    let mut selected = Vec::with_capacity(categories.len());
    for category in categories {
        if !category.is_sampleable() {
            continue;
        }
        selected.push(sampler::sample_ref(&category.traits, rng)?);
    }
    Ok(selected)
}

/// Run `simulations` draws and return raw tier counts (all tiers present)
pub fn simulate<F>(
    categories: &[Category],
    simulations: u64,
    rng: &mut F,
    config: &RarityConfig,
) -> Result<RarityDistribution, RarityError>
where
    F: FnMut() -> f64 + ?Sized,
{
    let mut counts = RarityDistribution::zeroed();
    for _ in 0..simulations {
        let traits = select_traits(categories, rng)?;
        let rarity = classify_item(&traits, config)?;
        counts.increment(rarity.tier);
    }
    Ok(counts)
}

/// Scale raw simulation counts to `target_supply`, rounding each tier
pub fn scale(raw: &RarityDistribution, simulations: u64, target_supply: u64) -> RarityDistribution {
    raw.iter()
        .map(|(tier, count)| (tier, scale_count(count, simulations, target_supply)))
        .collect()
}

fn scale_count(count: u64, simulations: u64, target_supply: u64) -> u64 {
    if simulations == 0 {
        return 0;
    }
    let share = count as f64 / simulations as f64;
    (share * target_supply as f64).round() as u64
}

/// Predict tier counts for a population of `target_supply` items
pub fn estimate<F>(
    categories: &[Category],
    target_supply: u64,
    rng: &mut F,
    config: &RarityConfig,
) -> Result<RarityDistribution, RarityError>
where
    F: FnMut() -> f64 + ?Sized,
{
    let simulations = simulation_count(target_supply)?;
    tracing::debug!(target_supply, simulations, "estimating tier distribution");

    let raw = simulate(categories, simulations, rng, config)?;
    let scaled = scale(&raw, simulations, target_supply);
    log_estimate(&scaled, target_supply);
    Ok(scaled)
}

/// Parallel estimate over `chunks` independent seeded streams.
///
/// Chunk `i` is driven by a `StdRng` seeded with `seed + i`, so the result
/// depends only on the inputs, never on how rayon schedules the chunks.
#[cfg(feature = "parallel")]
pub fn estimate_parallel(
    categories: &[Category],
    target_supply: u64,
    seed: u64,
    chunks: usize,
    config: &RarityConfig,
) -> Result<RarityDistribution, RarityError> {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rayon::prelude::*;

    let simulations = simulation_count(target_supply)?;
    let chunks = (chunks.max(1) as u64).min(simulations);
    tracing::debug!(
        target_supply,
        simulations,
        chunks,
        "estimating tier distribution in parallel"
    );

    let partials = (0..chunks)
        .into_par_iter()
        .map(|i| {
            let share = simulations / chunks + u64::from(i < simulations % chunks);
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
            let mut unit = sampler::unit_source(&mut rng);
            simulate(categories, share, &mut unit, config)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut raw = RarityDistribution::zeroed();
    for partial in &partials {
        raw.merge(partial);
    }

    let scaled = scale(&raw, simulations, target_supply);
    log_estimate(&scaled, target_supply);
    Ok(scaled)
}

fn log_estimate(scaled: &RarityDistribution, target_supply: u64) {
    let total = scaled.total();
    let drift = total as i64 - target_supply as i64;
    tracing::info!(
        target_supply,
        estimated_total = total,
        drift,
        mythic = scaled.get(RarityTier::Mythic),
        common = scaled.get(RarityTier::Common),
        "tier distribution estimated"
    );
}
