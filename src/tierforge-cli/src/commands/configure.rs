//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting tierforge defaults.

use crate::config::{load_rarity_config, Config};
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Handle the configure command
///
/// # Arguments
/// * `tolerance` - Default tolerance percent for `verify`
/// * `seed` - Default RNG seed
/// * `rarity_config` - Default rarity override file
/// * `show` - If true, show current configuration
pub fn handle(
    tolerance: Option<f64>,
    seed: Option<u64>,
    rarity_config: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    handle_at(&Config::config_path()?, tolerance, seed, rarity_config, show)
}

/// Handle the configure command against an explicit config file
///
/// An unreadable config file is reported and replaced with defaults so this
/// command can always repair it.
pub fn handle_at(
    config_path: &Path,
    tolerance: Option<f64>,
    seed: Option<u64>,
    rarity_config: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load_from(config_path).unwrap_or_else(|e| {
        tracing::warn!("{:#}; using defaults", e);
        Config::default()
    });

    if show {
        show_config(&config, config_path);
        return Ok(());
    }

    if tolerance.is_none() && seed.is_none() && rarity_config.is_none() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, tolerance, seed, rarity_config)?;
    config.save_to(config_path)?;

    println!("Configuration updated");
    show_config(&config, config_path);

    Ok(())
}

/// Validate and copy the requested settings into `config`
fn apply(
    config: &mut Config,
    tolerance: Option<f64>,
    seed: Option<u64>,
    rarity_config: Option<PathBuf>,
) -> Result<()> {
    if let Some(t) = tolerance {
        if !t.is_finite() || t < 0.0 {
            bail!("Tolerance must be a non-negative percent (got {})", t);
        }
        config.tolerance = Some(t);
    }

    if let Some(s) = seed {
        config.seed = Some(s);
    }

    if let Some(path) = rarity_config {
        // Refuse to store a file we could not use later
        load_rarity_config(&path)?;
        config.rarity_config = Some(path);
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config, config_path: &Path) {
    match config.tolerance {
        Some(t) => println!("Tolerance: {}%", t),
        None => println!("Tolerance: not set (default {}%)", tierforge::DEFAULT_TOLERANCE_PERCENT),
    }

    match config.seed {
        Some(s) => println!("Seed: {}", s),
        None => println!("Seed: not set (random per run)"),
    }

    match &config.rarity_config {
        Some(path) => println!("Rarity config: {}", path.display()),
        None => println!("Rarity config: built-in defaults"),
    }

    println!("Config file: {}", config_path.display());
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: tierforge configure --tolerance 2.5");
    println!("   or: tierforge configure --seed 42");
    println!("   or: tierforge configure --set-rarity-config rarity.toml");
    println!("   or: tierforge configure --show");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_apply_sets_values() {
        let mut config = Config::default();
        apply(&mut config, Some(2.5), Some(7), None).unwrap();
        assert_eq!(config.tolerance, Some(2.5));
        assert_eq!(config.seed, Some(7));
        assert!(config.rarity_config.is_none());
    }

    #[test]
    fn test_apply_rejects_negative_tolerance() {
        let mut config = Config::default();
        assert!(apply(&mut config, Some(-1.0), None, None).is_err());
        assert!(config.tolerance.is_none());
    }

    #[test]
    fn test_apply_validates_rarity_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let mut config = Config::default();
        assert!(apply(&mut config, None, None, Some(missing)).is_err());

        let good = dir.path().join("rarity.toml");
        fs::write(&good, "max_weight_per_trait = 50.0\n").unwrap();
        apply(&mut config, None, None, Some(good.clone())).unwrap();
        assert_eq!(config.rarity_config, Some(good));
    }

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
        show_config(&Config::default(), Path::new("config.toml"));
    }

    #[test]
    fn test_repairs_corrupted_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tolerance = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
        handle_at(&path, None, None, None, true).unwrap();

        handle_at(&path, Some(1.5), None, None, false).unwrap();
        let repaired = Config::load_from(&path).unwrap();
        assert_eq!(repaired.tolerance, Some(1.5));
    }
}
