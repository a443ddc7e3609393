//! Per-item metadata documents
//!
//! Projects a classified item into the attribute layout marketplaces read:
//! one attribute per trait plus the rarity attributes.

use crate::item::GeneratedItem;
use serde::{Deserialize, Serialize};

/// Collection-level fields copied into every item document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Attribute value: trait names and tiers are strings, the rest numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Integer(u64),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: AttributeValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<f64>,
}

impl Attribute {
    fn new(trait_type: &str, value: AttributeValue) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value,
            rarity: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMetadata {
    pub name: String,
    pub description: String,
    pub attributes: Vec<Attribute>,
    pub rarity_tier: String,
    pub token_multiplier: u64,
    pub total_weight: f64,
    pub rarity_probability: f64,
}

impl ItemMetadata {
    /// Build the metadata document for `item`. Display numbering is 1-based.
    pub fn project(item: &GeneratedItem, collection: &CollectionInfo) -> Self {
        let rarity = &item.rarity;

        let mut attributes: Vec<Attribute> = item
            .traits
            .iter()
            .map(|t| Attribute {
                trait_type: t.category.clone(),
                value: AttributeValue::Text(t.name.clone()),
                rarity: Some(t.weight),
            })
            .collect();

        attributes.push(Attribute::new(
            "Rarity Tier",
            AttributeValue::Text(rarity.tier.to_string()),
        ));
        attributes.push(Attribute::new(
            "Token Multiplier",
            AttributeValue::Integer(rarity.multiplier),
        ));
        attributes.push(Attribute::new(
            "Total Weight",
            AttributeValue::Number(rarity.total_weight),
        ));

        Self {
            name: format!("{} #{}", collection.name, u128::from(item.id) + 1),
            description: collection.description.clone(),
            attributes,
            rarity_tier: rarity.tier.to_string(),
            token_multiplier: rarity.multiplier,
            total_weight: rarity.total_weight,
            rarity_probability: rarity.heuristic_probability,
        }
    }
}
