//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tierforge")]
#[command(about = "Plan and audit rarity tiers for weighted trait collections", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file overriding thresholds, multipliers and max trait weight
    #[arg(long, global = true, env = "TIERFORGE_RARITY_CONFIG")]
    pub rarity_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the display tier of a single trait weight
    #[command(visible_alias = "t")]
    ClassifyTrait {
        /// Trait weight (e.g. 87.5)
        weight: f64,
    },

    /// Estimate the tier distribution for a target supply
    #[command(visible_alias = "e")]
    Estimate {
        /// Catalog file (.json, .yaml or .yml)
        catalog: PathBuf,

        /// Target number of items
        #[arg(short, long)]
        supply: u64,

        /// RNG seed (uses configured default, or a random seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Split simulations across this many parallel seeded chunks
        #[arg(long)]
        parallel: Option<usize>,

        /// Write the estimate as JSON to this path ("-" for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a population and write it as JSON
    #[command(visible_alias = "g")]
    Generate {
        /// Catalog file (.json, .yaml or .yml)
        catalog: PathBuf,

        /// Number of items to generate
        #[arg(short, long)]
        supply: u64,

        /// RNG seed (uses configured default, or a random seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Output path for the population
        #[arg(short, long, default_value = "population.json")]
        output: PathBuf,
    },

    /// Verify a population against an expected distribution
    #[command(visible_alias = "v")]
    Verify {
        /// Population file written by `generate`
        population: PathBuf,

        /// Expected distribution written by `estimate --output`
        #[arg(short, long)]
        expected: PathBuf,

        /// Allowed deviation per tier, as a percent of the expected count
        #[arg(short, long)]
        tolerance: Option<f64>,
    },

    /// Summarize a population
    Stats {
        /// Population file written by `generate`
        population: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write per-item metadata documents for a population
    #[command(visible_alias = "m")]
    Metadata {
        /// Population file written by `generate`
        population: PathBuf,

        /// Collection name used in item names
        #[arg(short, long)]
        collection: String,

        /// Collection description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Output directory (one <id>.json per item), or "-" for stdout
        #[arg(short, long, default_value = "metadata")]
        output: PathBuf,
    },

    /// Pre-flight check of a catalog
    Check {
        /// Catalog file (.json, .yaml or .yml)
        catalog: PathBuf,

        /// Target supply to check against
        #[arg(short, long)]
        supply: Option<u64>,

        /// Also list every trait with its display tier
        #[arg(long)]
        traits: bool,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default tolerance percent for `verify`
        #[arg(long)]
        tolerance: Option<f64>,

        /// Set default RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Set default rarity override file
        #[arg(long = "set-rarity-config")]
        set_rarity_config: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
