//! Display tier of a single trait
//!
//! This ladder labels one trait in isolation from its own weight. It is a
//! cosmetic classification and is deliberately separate from the item-level
//! ladder in [`crate::classify`], which drives economic multipliers.

use crate::catalog::Trait;
use crate::tier::{RarityTier, TierMultipliers};
use serde::Serialize;

/// Weight bands for the single-trait ladder, evaluated top to bottom.
/// Anything below the last band is Common.
pub const TRAIT_TIER_BANDS: &[(f64, RarityTier)] = &[
    (95.0, RarityTier::Mythic),
    (85.0, RarityTier::Legendary),
    (70.0, RarityTier::Epic),
    (50.0, RarityTier::Rare),
    (25.0, RarityTier::Uncommon),
];

/// Tier and multiplier assigned to one trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitTier {
    pub tier: RarityTier,
    pub multiplier: u64,
}

/// Classify a single trait weight with the default multipliers
pub fn classify_trait(weight: f64) -> TraitTier {
    classify_trait_with(weight, &TierMultipliers::default())
}

/// Classify a single trait weight with custom multipliers
pub fn classify_trait_with(weight: f64, multipliers: &TierMultipliers) -> TraitTier {
    let tier = TRAIT_TIER_BANDS
        .iter()
        .find(|(min, _)| weight >= *min)
        .map(|(_, tier)| *tier)
        .unwrap_or(RarityTier::Common);

    TraitTier {
        tier,
        multiplier: multipliers.get(tier),
    }
}

/// A catalog trait together with its display tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedTrait {
    #[serde(flatten)]
    pub base: Trait,
    pub tier: RarityTier,
    pub multiplier: u64,
    /// The trait's own weight, surfaced as its target share
    pub target_probability: f64,
}

/// Attach display tiers to every trait in `traits`
pub fn annotate_traits(traits: &[Trait], multipliers: &TierMultipliers) -> Vec<AnnotatedTrait> {
    traits
        .iter()
        .map(|t| {
            let TraitTier { tier, multiplier } = classify_trait_with(t.weight, multipliers);
            AnnotatedTrait {
                base: t.clone(),
                tier,
                multiplier,
                target_probability: t.weight,
            }
        })
        .collect()
}
