//! Generated items and population files

use crate::catalog::{CatalogError, Trait};
use crate::classify::{classify_item, ItemRarity, RarityConfig};
use crate::error::RarityError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A composite item with one trait per contributing category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    pub id: u64,
    pub traits: Vec<Trait>,
    pub rarity: ItemRarity,
}

impl GeneratedItem {
    /// Classify `traits` and wrap them as an item
    pub fn classify(id: u64, traits: Vec<Trait>, config: &RarityConfig) -> Result<Self, RarityError> {
        let rarity = classify_item(&traits, config)?;
        Ok(Self { id, traits, rarity })
    }

    /// Trait chosen for `category`, if the item has one
    pub fn trait_in(&self, category: &str) -> Option<&Trait> {
        self.traits.iter().find(|t| t.category == category)
    }
}

/// Read a population previously written by [`save_population`]
pub fn load_population<P: AsRef<Path>>(path: P) -> Result<Vec<GeneratedItem>, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a population as pretty JSON, creating parent directories
pub fn save_population<P: AsRef<Path>>(path: P, items: &[GeneratedItem]) -> Result<(), CatalogError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json)?;
    Ok(())
}
