//! Tier → count mapping

use crate::item::GeneratedItem;
use crate::tier::RarityTier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count of items per rarity tier, iterated richest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RarityDistribution(BTreeMap<RarityTier, u64>);

impl RarityDistribution {
    /// Empty distribution with no tiers present
    pub fn new() -> Self {
        Self::default()
    }

    /// Distribution with every tier present at zero
    pub fn zeroed() -> Self {
        Self(RarityTier::ALL.iter().map(|t| (*t, 0)).collect())
    }

    /// Count tiers across a finished population. Every tier is present.
    pub fn tally(items: &[GeneratedItem]) -> Self {
        let mut dist = Self::zeroed();
        for item in items {
            dist.increment(item.rarity.tier);
        }
        dist
    }

    pub fn increment(&mut self, tier: RarityTier) {
        *self.0.entry(tier).or_insert(0) += 1;
    }

    pub fn set(&mut self, tier: RarityTier, count: u64) {
        self.0.insert(tier, count);
    }

    /// Count for `tier`; 0 when absent
    pub fn get(&self, tier: RarityTier) -> u64 {
        self.0.get(&tier).copied().unwrap_or(0)
    }

    pub fn contains(&self, tier: RarityTier) -> bool {
        self.0.contains_key(&tier)
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RarityTier, u64)> + '_ {
        self.0.iter().map(|(t, c)| (*t, *c))
    }

    /// Add another distribution's counts into this one
    pub fn merge(&mut self, other: &RarityDistribution) {
        for (tier, count) in other.iter() {
            *self.0.entry(tier).or_insert(0) += count;
        }
    }

    /// Share of the total held by `tier`, in percent
    pub fn percent(&self, tier: RarityTier) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(tier) as f64 / total as f64 * 100.0
    }
}

impl FromIterator<(RarityTier, u64)> for RarityDistribution {
    fn from_iter<I: IntoIterator<Item = (RarityTier, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
