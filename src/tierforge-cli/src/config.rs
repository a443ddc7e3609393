//! Configuration management for tierforge CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tierforge::{RarityConfig, DEFAULT_TOLERANCE_PERCENT};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Default rarity override file
    pub rarity_config: Option<PathBuf>,
    /// Default tolerance percent for `verify`
    pub tolerance: Option<f64>,
    /// Default RNG seed
    pub seed: Option<u64>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("tierforge");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Tolerance from the command line, then config, then the library default
    pub fn tolerance_or(&self, flag: Option<f64>) -> f64 {
        flag.or(self.tolerance).unwrap_or(DEFAULT_TOLERANCE_PERCENT)
    }

    /// Seed from the command line, then config, then a fresh random seed
    pub fn seed_or(&self, flag: Option<u64>) -> u64 {
        flag.or(self.seed).unwrap_or_else(rand::random)
    }

    /// Resolve the rarity configuration: explicit path, then configured path,
    /// then built-in defaults
    pub fn rarity(&self, flag: Option<&Path>) -> Result<RarityConfig> {
        match flag.or(self.rarity_config.as_deref()) {
            Some(path) => load_rarity_config(path),
            None => Ok(RarityConfig::default()),
        }
    }
}

/// Read a TOML rarity override file
pub fn load_rarity_config(path: &Path) -> Result<RarityConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rarity config from {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse rarity config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tierforge::RarityTier;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let config = Config {
            rarity_config: Some(PathBuf::from("rarity.toml")),
            tolerance: Some(2.5),
            seed: Some(42),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_precedence() {
        let config = Config {
            rarity_config: None,
            tolerance: Some(3.0),
            seed: Some(9),
        };
        assert_eq!(config.tolerance_or(Some(1.0)), 1.0);
        assert_eq!(config.tolerance_or(None), 3.0);
        assert_eq!(Config::default().tolerance_or(None), DEFAULT_TOLERANCE_PERCENT);
        assert_eq!(config.seed_or(None), 9);
        assert_eq!(config.seed_or(Some(1)), 1);
    }

    #[test]
    fn test_rarity_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rarity.toml");
        fs::write(
            &path,
            r#"
max_weight_per_trait = 250.0

[multipliers]
mythic = 2000

[[thresholds]]
tier = "Legendary"
min_total_weight = 300.0
min_average_weight = 75.0

[[thresholds]]
tier = "Common"
min_total_weight = 0.0
min_average_weight = 0.0
"#,
        )
        .unwrap();

        let rarity = Config::default().rarity(Some(&path)).unwrap();
        assert_eq!(rarity.max_weight_per_trait, 250.0);
        assert_eq!(rarity.multipliers.get(RarityTier::Mythic), 2000);
        assert_eq!(rarity.multipliers.get(RarityTier::Rare), 10);
        assert_eq!(rarity.thresholds.rows().len(), 2);
    }

    #[test]
    fn test_rarity_override_rejects_bad_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rarity.toml");
        fs::write(
            &path,
            r#"
[[thresholds]]
tier = "Common"
min_total_weight = 0.0
min_average_weight = 0.0

[[thresholds]]
tier = "Mythic"
min_total_weight = 400.0
min_average_weight = 90.0
"#,
        )
        .unwrap();

        assert!(load_rarity_config(&path).is_err());
    }

    #[test]
    fn test_rarity_override_rejects_nan_ceiling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rarity.toml");
        fs::write(&path, "max_weight_per_trait = nan\n").unwrap();
        assert!(load_rarity_config(&path).is_err());
    }

    #[test]
    fn test_rarity_defaults_without_override() {
        let rarity = Config::default().rarity(None).unwrap();
        assert_eq!(rarity, RarityConfig::default());
    }
}
