//! Engine error kinds
//!
//! Every variant is an input-contract violation raised synchronously by the
//! call that received the bad input. Nothing here is transient.

/// Errors returned by the rarity and distribution engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RarityError {
    #[error("Cannot sample from an empty option list")]
    EmptyOptions,

    #[error("Total option weight must be positive (got {total})")]
    ZeroWeight { total: f64 },

    #[error("An item needs at least one trait to be classified")]
    EmptyTraitSet,

    #[error("Target supply must be at least 1 (got {0})")]
    InvalidSupply(u64),

    #[error("Tolerance percent must be a non-negative number (got {0})")]
    InvalidTolerance(f64),

    #[error("Cannot summarize an empty population")]
    EmptyPopulation,

    #[error("Invalid threshold table: {0}")]
    InvalidThresholdTable(String),

    #[error("max_weight_per_trait must be a positive finite number (got {0})")]
    InvalidWeightCeiling(f64),
}
