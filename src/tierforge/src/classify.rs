//! Item-level rarity classification
//!
//! An item's tier comes from the combined weight of its traits, checked
//! against an ordered threshold table. Rows are evaluated richest first and
//! the first row satisfied by either the total or the average weight wins,
//! so the table's order (not its numbers) decides precedence.

use crate::error::RarityError;
use crate::sampler::Weighted;
use crate::tier::{RarityTier, TierMultipliers};
use serde::{Deserialize, Serialize};

/// Default ceiling on a single trait's weight
pub const DEFAULT_MAX_WEIGHT_PER_TRAIT: f64 = 100.0;

/// Bounds for the heuristic probability, in percent
const HEURISTIC_FLOOR: f64 = 0.01;
const HEURISTIC_CEIL: f64 = 99.99;

/// One row of the item-level threshold table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRow {
    pub tier: RarityTier,
    pub min_total_weight: f64,
    pub min_average_weight: f64,
}

impl ThresholdRow {
    pub const fn new(tier: RarityTier, min_total_weight: f64, min_average_weight: f64) -> Self {
        Self {
            tier,
            min_total_weight,
            min_average_weight,
        }
    }

    fn matches(&self, total: f64, average: f64) -> bool {
        total >= self.min_total_weight || average >= self.min_average_weight
    }
}

/// Default item-level ladder
pub const DEFAULT_THRESHOLDS: [ThresholdRow; 6] = [
    ThresholdRow::new(RarityTier::Mythic, 450.0, 90.0),
    ThresholdRow::new(RarityTier::Legendary, 350.0, 80.0),
    ThresholdRow::new(RarityTier::Epic, 250.0, 70.0),
    ThresholdRow::new(RarityTier::Rare, 150.0, 60.0),
    ThresholdRow::new(RarityTier::Uncommon, 75.0, 40.0),
    ThresholdRow::new(RarityTier::Common, 0.0, 0.0),
];

/// Non-empty threshold table in strictly decreasing richness order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ThresholdRow>", into = "Vec<ThresholdRow>")]
pub struct ThresholdTable(Vec<ThresholdRow>);

impl ThresholdTable {
    pub fn new(rows: Vec<ThresholdRow>) -> Result<Self, RarityError> {
        if rows.is_empty() {
            return Err(RarityError::InvalidThresholdTable(
                "table has no rows".to_string(),
            ));
        }
        for pair in rows.windows(2) {
            if !pair[0].tier.is_richer_than(pair[1].tier) {
                return Err(RarityError::InvalidThresholdTable(format!(
                    "{} must come after {}",
                    pair[0].tier, pair[1].tier
                )));
            }
        }
        Ok(Self(rows))
    }

    pub fn rows(&self) -> &[ThresholdRow] {
        &self.0
    }

    /// Tier assigned when no row matches
    pub fn floor(&self) -> RarityTier {
        // new() rejects empty tables
        self.0.last().map(|r| r.tier).unwrap_or(RarityTier::Common)
    }

    /// First matching tier, richest first; the floor tier otherwise
    pub fn evaluate(&self, total: f64, average: f64) -> RarityTier {
        self.0
            .iter()
            .find(|row| row.matches(total, average))
            .map(|row| row.tier)
            .unwrap_or_else(|| self.floor())
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLDS.to_vec())
    }
}

impl TryFrom<Vec<ThresholdRow>> for ThresholdTable {
    type Error = RarityError;

    fn try_from(rows: Vec<ThresholdRow>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<ThresholdTable> for Vec<ThresholdRow> {
    fn from(table: ThresholdTable) -> Self {
        table.0
    }
}

/// Tunables for item classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRarityConfig")]
pub struct RarityConfig {
    pub thresholds: ThresholdTable,
    pub multipliers: TierMultipliers,
    pub max_weight_per_trait: f64,
}

impl RarityConfig {
    /// Reject a weight ceiling the heuristic cannot divide by
    pub fn validate(&self) -> Result<(), RarityError> {
        if !self.max_weight_per_trait.is_finite() || self.max_weight_per_trait <= 0.0 {
            return Err(RarityError::InvalidWeightCeiling(self.max_weight_per_trait));
        }
        Ok(())
    }
}

impl Default for RarityConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdTable::default(),
            multipliers: TierMultipliers::default(),
            max_weight_per_trait: DEFAULT_MAX_WEIGHT_PER_TRAIT,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawRarityConfig {
    thresholds: ThresholdTable,
    multipliers: TierMultipliers,
    max_weight_per_trait: f64,
}

impl Default for RawRarityConfig {
    fn default() -> Self {
        let RarityConfig {
            thresholds,
            multipliers,
            max_weight_per_trait,
        } = RarityConfig::default();
        Self {
            thresholds,
            multipliers,
            max_weight_per_trait,
        }
    }
}

impl TryFrom<RawRarityConfig> for RarityConfig {
    type Error = RarityError;

    fn try_from(raw: RawRarityConfig) -> Result<Self, Self::Error> {
        let config = Self {
            thresholds: raw.thresholds,
            multipliers: raw.multipliers,
            max_weight_per_trait: raw.max_weight_per_trait,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Classification result attached to a generated item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRarity {
    pub tier: RarityTier,
    pub multiplier: u64,
    pub total_weight: f64,
    /// Relative-weight ratio in percent, clamped to [0.01, 99.99].
    /// This is not an occurrence probability.
    pub heuristic_probability: f64,
}

/// Classify an item from its selected traits
pub fn classify_item<T: Weighted>(
    traits: &[T],
    config: &RarityConfig,
) -> Result<ItemRarity, RarityError> {
    if traits.is_empty() {
        return Err(RarityError::EmptyTraitSet);
    }
    config.validate()?;

    let count = traits.len() as f64;
    let total_weight: f64 = traits.iter().map(Weighted::weight).sum();
    let average_weight = total_weight / count;

    let tier = config.thresholds.evaluate(total_weight, average_weight);
    let heuristic_probability =
        heuristic_probability(total_weight, count, config.max_weight_per_trait);

    Ok(ItemRarity {
        tier,
        multiplier: config.multipliers.get(tier),
        total_weight,
        heuristic_probability,
    })
}

fn heuristic_probability(total_weight: f64, count: f64, max_weight_per_trait: f64) -> f64 {
    let ratio = total_weight / (count * max_weight_per_trait) * 100.0;
    ratio.clamp(HEURISTIC_FLOOR, HEURISTIC_CEIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(weights: &[f64]) -> ItemRarity {
        classify_item(weights, &RarityConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_trait_set() {
        let empty: [f64; 0] = [];
        assert_eq!(
            classify_item(&empty, &RarityConfig::default()),
            Err(RarityError::EmptyTraitSet)
        );
    }

    #[test]
    fn test_threshold_boundaries() {
        let mythic = classify(&[95.0; 5]);
        assert_eq!(mythic.tier, RarityTier::Mythic);
        assert_eq!(mythic.multiplier, 1000);
        assert_eq!(mythic.total_weight, 475.0);

        let common = classify(&[10.0; 5]);
        assert_eq!(common.tier, RarityTier::Common);
        assert_eq!(common.multiplier, 1);
    }

    #[test]
    fn test_total_or_average() {
        // total 160 reaches Rare even though the average is only 32
        assert_eq!(classify(&[32.0; 5]).tier, RarityTier::Rare);
        // a single trait of 61 reaches Rare on its average alone
        assert_eq!(classify(&[61.0]).tier, RarityTier::Rare);
        // average 40 reaches Uncommon
        assert_eq!(classify(&[40.0]).tier, RarityTier::Uncommon);
    }

    #[test]
    fn test_heuristic_probability() {
        let r = classify(&[50.0, 30.0]);
        assert!((r.heuristic_probability - 40.0).abs() < 1e-9);

        assert_eq!(classify(&[0.0]).heuristic_probability, 0.01);
        assert_eq!(classify(&[500.0]).heuristic_probability, 99.99);
    }

    #[test]
    fn test_custom_max_weight() {
        let config = RarityConfig {
            max_weight_per_trait: 200.0,
            ..RarityConfig::default()
        };
        let r = classify_item(&[50.0, 50.0], &config).unwrap();
        assert!((r.heuristic_probability - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_table_order_decides_precedence() {
        // Uncommon with a lower bar than Common still wins because it comes first
        let table = ThresholdTable::new(vec![
            ThresholdRow::new(RarityTier::Uncommon, 10.0, 10.0),
            ThresholdRow::new(RarityTier::Common, 1000.0, 1000.0),
        ])
        .unwrap();
        assert_eq!(table.evaluate(20.0, 20.0), RarityTier::Uncommon);
        // Nothing matches, so the final row's tier is the floor
        assert_eq!(table.evaluate(1.0, 1.0), RarityTier::Common);
    }

    #[test]
    fn test_floor_is_last_row() {
        let table = ThresholdTable::new(vec![
            ThresholdRow::new(RarityTier::Legendary, 300.0, 90.0),
            ThresholdRow::new(RarityTier::Rare, 100.0, 50.0),
        ])
        .unwrap();
        assert_eq!(table.evaluate(5.0, 5.0), RarityTier::Rare);
    }

    #[test]
    fn test_table_rejects_bad_order() {
        let err = ThresholdTable::new(vec![
            ThresholdRow::new(RarityTier::Rare, 1.0, 1.0),
            ThresholdRow::new(RarityTier::Epic, 1.0, 1.0),
        ]);
        assert!(matches!(err, Err(RarityError::InvalidThresholdTable(_))));

        let dup = ThresholdTable::new(vec![
            ThresholdRow::new(RarityTier::Rare, 1.0, 1.0),
            ThresholdRow::new(RarityTier::Rare, 0.0, 0.0),
        ]);
        assert!(dup.is_err());
        assert!(ThresholdTable::new(vec![]).is_err());
    }

    #[test]
    fn test_table_deserialize_validates() {
        let ok: Result<ThresholdTable, _> = serde_json::from_str(
            r#"[{"tier":"Epic","min_total_weight":1,"min_average_weight":1},
                {"tier":"Common","min_total_weight":0,"min_average_weight":0}]"#,
        );
        assert!(ok.is_ok());

        let bad: Result<ThresholdTable, _> = serde_json::from_str(
            r#"[{"tier":"Common","min_total_weight":0,"min_average_weight":0},
                {"tier":"Epic","min_total_weight":1,"min_average_weight":1}]"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_multiplier_override_flows_through() {
        let mut config = RarityConfig::default();
        config.multipliers.set(RarityTier::Mythic, 5000);
        assert_eq!(classify_item(&[99.0; 5], &config).unwrap().multiplier, 5000);
    }

    #[test]
    fn test_monotonic_in_each_weight() {
        let config = RarityConfig::default();
        let base = [12.0, 35.0, 48.0, 7.0];
        for slot in 0..base.len() {
            let mut weights = base;
            let mut previous = classify_item(&weights, &config).unwrap().tier;
            for _ in 0..40 {
                weights[slot] += 2.5;
                let next = classify_item(&weights, &config).unwrap().tier;
                assert!(
                    !previous.is_richer_than(next),
                    "tier dropped from {} to {} at {:?}",
                    previous,
                    next,
                    weights
                );
                previous = next;
            }
        }
    }

    #[test]
    fn test_weight_ceiling_rejected_on_deserialize() {
        for body in [
            r#"{"max_weight_per_trait": 0}"#,
            r#"{"max_weight_per_trait": -100.0}"#,
        ] {
            let parsed: Result<RarityConfig, _> = serde_json::from_str(body);
            assert!(parsed.is_err(), "accepted {}", body);
        }

        let ok: RarityConfig = serde_json::from_str(r#"{"max_weight_per_trait": 250.0}"#).unwrap();
        assert_eq!(ok.max_weight_per_trait, 250.0);
        assert_eq!(ok.thresholds, ThresholdTable::default());
    }

    #[test]
    fn test_nan_weight_ceiling_rejected_by_classify() {
        let config = RarityConfig {
            max_weight_per_trait: f64::NAN,
            ..RarityConfig::default()
        };
        assert!(matches!(
            classify_item(&[50.0, 40.0], &config),
            Err(RarityError::InvalidWeightCeiling(v)) if v.is_nan()
        ));

        let negative = RarityConfig {
            max_weight_per_trait: -100.0,
            ..RarityConfig::default()
        };
        assert_eq!(
            negative.validate(),
            Err(RarityError::InvalidWeightCeiling(-100.0))
        );
    }
}
