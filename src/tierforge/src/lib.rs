//! # tierforge
//!
//! Rarity and distribution engine for collections built from weighted traits.
//!
//! This library provides functionality to:
//! - Sample one trait per category from weighted option lists
//! - Classify generated items into economic rarity tiers
//! - Label single traits with an independent display tier
//! - Estimate a collection's tier distribution before generating it
//! - Verify a generated population against the estimate and summarize it
//!
//! All randomness is injected, so every result is reproducible from a seed.
//!
//! ## Example
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tierforge::{estimate, generate, summarize, unit_source, verify, Catalog, RarityConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::load("catalog.yaml")?;
//! let config = RarityConfig::default();
//! let mut std_rng = StdRng::seed_from_u64(42);
//! let mut rng = unit_source(&mut std_rng);
//!
//! // Plan: predict tier counts for 1000 items
//! let expected = estimate(&catalog.categories, 1000, &mut rng, &config)?;
//!
//! // Generate, then audit the real population
//! let items = generate(&catalog.categories, 1000, &mut rng, &config)?;
//! let report = verify(&items, &expected, 5.0)?;
//! let stats = summarize(&items)?;
//!
//! println!("valid: {}, average rarity: {:.1}", report.is_valid, stats.average_rarity);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod classify;
pub mod distribution;
pub mod error;
pub mod estimate;
pub mod generate;
pub mod item;
pub mod metadata;
pub mod sampler;
pub mod stats;
pub mod tier;
pub mod trait_tier;
pub mod verify;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{Catalog, CatalogError, Category, CollectionCheck, Trait};
#[doc(inline)]
pub use classify::{
    classify_item, ItemRarity, RarityConfig, ThresholdRow, ThresholdTable, DEFAULT_THRESHOLDS,
};
#[doc(inline)]
pub use distribution::RarityDistribution;
#[doc(inline)]
pub use error::RarityError;
#[doc(inline)]
pub use estimate::{estimate, scale, simulate, simulation_count};
#[cfg(feature = "parallel")]
#[doc(inline)]
pub use estimate::estimate_parallel;
#[doc(inline)]
pub use generate::generate;
#[doc(inline)]
pub use item::{load_population, save_population, GeneratedItem};
#[doc(inline)]
pub use metadata::{CollectionInfo, ItemMetadata};
#[doc(inline)]
pub use sampler::{sample, unit_source, Weighted};
#[doc(inline)]
pub use stats::{summarize, CollectionStats, TraitFrequency, TraitKey};
#[doc(inline)]
pub use tier::{RarityTier, TierMultipliers};
#[doc(inline)]
pub use trait_tier::{annotate_traits, classify_trait, classify_trait_with, TraitTier};
#[doc(inline)]
pub use verify::{verify, DiscrepancyReport, VerificationReport, DEFAULT_TOLERANCE_PERCENT};
