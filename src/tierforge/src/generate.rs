//! Population generation
//!
//! Builds a finished population by drawing one trait per sampleable
//! category and classifying each item. Per-trait caps, exclusions and
//! requirements in the catalog are carried on the traits but not enforced.

use crate::catalog::Category;
use crate::classify::RarityConfig;
use crate::error::RarityError;
use crate::estimate::select_traits;
use crate::item::GeneratedItem;

/// Generate `supply` items with ids `0..supply`
pub fn generate<F>(
    categories: &[Category],
    supply: u64,
    rng: &mut F,
    config: &RarityConfig,
) -> Result<Vec<GeneratedItem>, RarityError>
where
    F: FnMut() -> f64 + ?Sized,
{
    if supply == 0 {
        return Err(RarityError::InvalidSupply(supply));
    }

    let skipped = categories.iter().filter(|c| !c.is_sampleable()).count();
    if skipped > 0 {
        tracing::debug!(skipped, "categories without sampleable traits skipped");
    }

    let mut items = Vec::with_capacity(usize::try_from(supply.min(65_536)).unwrap_or(0));
    for id in 0..supply {
        let traits = select_traits(categories, rng)?
            .into_iter()
            .cloned()
            .collect();
        items.push(GeneratedItem::classify(id, traits, config)?);
    }

    tracing::info!(supply, categories = categories.len(), "population generated");
    Ok(items)
}
