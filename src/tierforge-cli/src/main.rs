mod cli;
mod commands;
mod config;
mod file_io;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tierforge::RarityConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing(verbose: bool) {
    let default = if verbose { "tierforge=debug" } else { "tierforge=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rarity_flag = cli.rarity_config;
    // Loaded per command so `configure` can repair a broken config file
    let settings = || -> Result<(Config, RarityConfig)> {
        let config = Config::load()?;
        let rarity = config.rarity(rarity_flag.as_deref())?;
        Ok((config, rarity))
    };

    match cli.command {
        Commands::ClassifyTrait { weight } => {
            let (_, rarity) = settings()?;
            commands::classify::handle(weight, &rarity)?;
        }

        Commands::Estimate {
            catalog,
            supply,
            seed,
            parallel,
            output,
        } => {
            let (config, rarity) = settings()?;
            let seed = config.seed_or(seed);
            commands::estimate::handle(
                &catalog,
                supply,
                seed,
                parallel,
                output.as_deref(),
                &rarity,
            )?;
        }

        Commands::Generate {
            catalog,
            supply,
            seed,
            output,
        } => {
            let (config, rarity) = settings()?;
            let seed = config.seed_or(seed);
            commands::generate::handle(&catalog, supply, seed, &output, &rarity)?;
        }

        Commands::Verify {
            population,
            expected,
            tolerance,
        } => {
            let tolerance = Config::load()?.tolerance_or(tolerance);
            commands::audit::verify(&population, &expected, tolerance)?;
        }

        Commands::Stats { population, json } => {
            commands::audit::stats(&population, json)?;
        }

        Commands::Metadata {
            population,
            collection,
            description,
            output,
        } => {
            let info = tierforge::CollectionInfo {
                name: collection,
                description,
            };
            commands::metadata::handle(&population, info, &output)?;
        }

        Commands::Check {
            catalog,
            supply,
            traits,
        } => {
            let (_, rarity) = settings()?;
            commands::check::handle(&catalog, supply, traits, &rarity.multipliers)?;
        }

        Commands::Configure {
            tolerance,
            seed,
            set_rarity_config,
            show,
        } => {
            commands::configure::handle(tolerance, seed, set_rarity_config, show)?;
        }
    }

    Ok(())
}
