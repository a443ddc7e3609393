//! Trait catalog: categories (layers) of weighted traits
//!
//! A catalog is supplied once per collection definition and treated as
//! read-only input by everything else in this crate. Catalog files are JSON
//! or YAML, picked by file extension.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// Supplies above this size still work but take noticeably longer to audit
pub const LARGE_SUPPLY_WARNING: u64 = 10_000;

/// Errors that can occur while loading or validating a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported catalog format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Trait '{trait_id}' has invalid weight {weight}")]
    InvalidWeight { trait_id: String, weight: f64 },

    #[error("Duplicate trait id: {0}")]
    DuplicateTrait(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// One weighted option within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    pub id: String,
    pub name: String,
    /// Owning category name. Filled from the enclosing category when omitted.
    #[serde(default)]
    pub category: String,
    /// Relative likelihood within the category, not a probability
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u32>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub excludes_with: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub requires_with: BTreeSet<String>,
}

impl Trait {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            weight,
            max_count: None,
            excludes_with: BTreeSet::new(),
            requires_with: BTreeSet::new(),
        }
    }
}

/// A named, ordered group of mutually exclusive traits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Invisible categories contribute no trait to an item
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub traits: Vec<Trait>,
}

fn default_visible() -> bool {
    true
}

impl Category {
    pub fn new(name: impl Into<String>, traits: Vec<Trait>) -> Self {
        let mut category = Self {
            name: name.into(),
            visible: true,
            traits,
        };
        category.adopt_traits();
        category
    }

    /// Builder-style visibility toggle
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn total_weight(&self) -> f64 {
        self.traits.iter().map(|t| t.weight).sum()
    }

    /// Whether this category can contribute a trait to an item
    pub fn is_sampleable(&self) -> bool {
        self.visible && !self.traits.is_empty() && self.total_weight() > 0.0
    }

    fn adopt_traits(&mut self) {
        for t in &mut self.traits {
            if t.category.is_empty() {
                t.category = self.name.clone();
            }
        }
    }
}

/// A full collection definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "layers")]
    pub categories: Vec<Category>,
}

/// Outcome of a pre-flight catalog check
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionCheck {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CollectionCheck {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Catalog {
    pub fn new(name: impl Into<String>, categories: Vec<Category>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            categories,
        }
    }

    /// Load a catalog from a `.json`, `.yaml` or `.yml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Self::from_json(&content),
            "yaml" | "yml" => Self::from_yaml(&content),
            other => Err(CatalogError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(content)?;
        catalog.normalize();
        Ok(catalog)
    }

    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.normalize();
        Ok(catalog)
    }

    fn normalize(&mut self) {
        for category in &mut self.categories {
            category.adopt_traits();
        }
    }

    pub fn trait_count(&self) -> usize {
        self.categories.iter().map(|c| c.traits.len()).sum()
    }

    /// Categories that will contribute a trait to every generated item
    pub fn sampleable_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_sampleable())
    }

    /// Pre-flight check of the catalog, optionally against a target supply.
    ///
    /// Errors block generation; warnings are informational.
    pub fn check(&self, target_supply: Option<u64>) -> CollectionCheck {
        let mut report = CollectionCheck::default();

        if self.categories.is_empty() {
            report.errors.push("At least one category is required".to_string());
        }
        if self.trait_count() == 0 {
            report.errors.push("At least one trait is required".to_string());
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            for t in &category.traits {
                if !t.weight.is_finite() || t.weight <= 0.0 {
                    report.errors.push(format!(
                        "Trait '{}' in '{}' has invalid weight {}",
                        t.id, category.name, t.weight
                    ));
                }
                if !seen.insert(t.id.as_str()) {
                    report.errors.push(format!("Duplicate trait id: {}", t.id));
                }
            }

            if category.visible && !category.is_sampleable() {
                report.warnings.push(format!(
                    "Category '{}' has no sampleable traits and will be skipped",
                    category.name
                ));
            }
        }

        if !self.categories.is_empty() && self.categories.iter().all(|c| !c.visible) {
            report
                .warnings
                .push("Every category is invisible; items will have no traits".to_string());
        }

        match target_supply {
            Some(0) => report
                .errors
                .push("Total supply must be greater than 0".to_string()),
            Some(n) if n > LARGE_SUPPLY_WARNING => report.warnings.push(format!(
                "Large collections (>{}) may take longer to process",
                LARGE_SUPPLY_WARNING
            )),
            _ => {}
        }

        report
    }

    /// Strict validation: weights must be positive and ids unique
    pub fn ensure_valid(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() || self.trait_count() == 0 {
            return Err(CatalogError::Invalid(
                "catalog needs at least one category with one trait".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for t in self.categories.iter().flat_map(|c| &c.traits) {
            if !t.weight.is_finite() || t.weight <= 0.0 {
                return Err(CatalogError::InvalidWeight {
                    trait_id: t.id.clone(),
                    weight: t.weight,
                });
            }
            if !seen.insert(t.id.as_str()) {
                return Err(CatalogError::DuplicateTrait(t.id.clone()));
            }
        }

        Ok(())
    }
}
