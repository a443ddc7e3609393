//! Command handlers for tierforge CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod audit;
pub mod check;
pub mod classify;
pub mod configure;
pub mod estimate;
pub mod generate;
pub mod metadata;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded generator for a run, logging the seed so the run can be repeated
pub fn seeded_rng(seed: u64) -> StdRng {
    tracing::info!(seed, "using RNG seed");
    StdRng::seed_from_u64(seed)
}
