//! Aggregate statistics over a finished population

use crate::distribution::RarityDistribution;
use crate::error::RarityError;
use crate::item::GeneratedItem;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// A trait identified by its category and name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TraitKey {
    pub category: String,
    pub name: String,
}

impl fmt::Display for TraitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.name)
    }
}

/// How often one trait appears in the population
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitFrequency {
    #[serde(flatten)]
    pub key: TraitKey,
    pub count: u64,
    /// Share of items carrying this trait, in percent
    pub percent: f64,
}

/// Summary of a generated population
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionStats {
    pub total_supply: u64,
    pub distribution: RarityDistribution,
    /// Mean of the items' total weights
    pub average_rarity: f64,
    pub total_multiplier: u64,
    pub most_common_trait: Option<TraitKey>,
    pub rarest_trait: Option<TraitKey>,
    /// Per-trait counts in first-encountered order
    pub trait_frequencies: Vec<TraitFrequency>,
}

/// Summarize a population.
///
/// Ties for most/least frequent trait go to the trait encountered first
/// when scanning items (and their traits) in order.
pub fn summarize(actual: &[GeneratedItem]) -> Result<CollectionStats, RarityError> {
    if actual.is_empty() {
        return Err(RarityError::EmptyPopulation);
    }

    let mut total_weight = 0.0;
    let mut total_multiplier: u64 = 0;
    let mut counts: IndexMap<TraitKey, u64> = IndexMap::new();

    for item in actual {
        total_weight += item.rarity.total_weight;
        total_multiplier = total_multiplier.saturating_add(item.rarity.multiplier);

        for t in &item.traits {
            let key = TraitKey {
                category: t.category.clone(),
                name: t.name.clone(),
            };
            *counts.entry(key).or_insert(0) += 1;
        }
    }

    let population = actual.len() as u64;
    let (most_common_trait, rarest_trait) = extremes(&counts);

    let trait_frequencies = counts
        .iter()
        .map(|(key, count)| TraitFrequency {
            key: key.clone(),
            count: *count,
            percent: *count as f64 / population as f64 * 100.0,
        })
        .collect();

    Ok(CollectionStats {
        total_supply: population,
        distribution: RarityDistribution::tally(actual),
        average_rarity: total_weight / population as f64,
        total_multiplier,
        most_common_trait,
        rarest_trait,
        trait_frequencies,
    })
}

fn extremes(counts: &IndexMap<TraitKey, u64>) -> (Option<TraitKey>, Option<TraitKey>) {
    let mut most: Option<(&TraitKey, u64)> = None;
    let mut least: Option<(&TraitKey, u64)> = None;

    for (key, &count) in counts {
        if most.map_or(true, |(_, best)| count > best) {
            most = Some((key, count));
        }
        if least.map_or(true, |(_, best)| count < best) {
            least = Some((key, count));
        }
    }

    (most.map(|(k, _)| k.clone()), least.map(|(k, _)| k.clone()))
}
