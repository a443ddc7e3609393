//! Rarity tier definitions
//!
//! Tiers are ordered richest first. The tier → multiplier mapping lives in
//! [`TierMultipliers`] so collections can override it without touching the
//! classifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named rarity bucket, richest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RarityTier {
    Mythic,
    Legendary,
    Epic,
    Rare,
    Uncommon,
    Common,
}

impl RarityTier {
    /// All tiers in richness order (richest first)
    pub const ALL: [RarityTier; 6] = [
        RarityTier::Mythic,
        RarityTier::Legendary,
        RarityTier::Epic,
        RarityTier::Rare,
        RarityTier::Uncommon,
        RarityTier::Common,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RarityTier::Mythic => "Mythic",
            RarityTier::Legendary => "Legendary",
            RarityTier::Epic => "Epic",
            RarityTier::Rare => "Rare",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Common => "Common",
        }
    }

    /// Display color used by the CLI tables
    pub fn color(&self) -> &'static str {
        match self {
            RarityTier::Mythic => "#FF3030",
            RarityTier::Legendary => "#FFA500",
            RarityTier::Epic => "#A020F0",
            RarityTier::Rare => "#0080FF",
            RarityTier::Uncommon => "#00FF00",
            RarityTier::Common => "#FFFFFF",
        }
    }

    /// Position in the richness order; 0 is the richest tier.
    pub fn richness_rank(&self) -> usize {
        *self as usize
    }

    /// True if `self` is strictly richer than `other`
    pub fn is_richer_than(&self, other: RarityTier) -> bool {
        self.richness_rank() < other.richness_rank()
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RarityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RarityTier::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown rarity tier: {}", s))
    }
}

/// Tier → economic multiplier mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierMultipliers {
    pub mythic: u64,
    pub legendary: u64,
    pub epic: u64,
    pub rare: u64,
    pub uncommon: u64,
    pub common: u64,
}

impl Default for TierMultipliers {
    fn default() -> Self {
        Self {
            mythic: 1000,
            legendary: 100,
            epic: 50,
            rare: 10,
            uncommon: 5,
            common: 1,
        }
    }
}

impl TierMultipliers {
    pub fn get(&self, tier: RarityTier) -> u64 {
        match tier {
            RarityTier::Mythic => self.mythic,
            RarityTier::Legendary => self.legendary,
            RarityTier::Epic => self.epic,
            RarityTier::Rare => self.rare,
            RarityTier::Uncommon => self.uncommon,
            RarityTier::Common => self.common,
        }
    }

    pub fn set(&mut self, tier: RarityTier, multiplier: u64) {
        let slot = match tier {
            RarityTier::Mythic => &mut self.mythic,
            RarityTier::Legendary => &mut self.legendary,
            RarityTier::Epic => &mut self.epic,
            RarityTier::Rare => &mut self.rare,
            RarityTier::Uncommon => &mut self.uncommon,
            RarityTier::Common => &mut self.common,
        };
        *slot = multiplier;
    }
}
