//! # Catalog
//!
//! Store contents loaded from TOML (see `config/catalog.toml`).
//!
//! ```toml
//! [[promotions]]
//! name = "30% off!"
//! kind = "percent_discount"
//! percent = 30
//!
//! [[products]]
//! name = "Shipping"
//! price = 10
//! quantity = 250
//! kind = "limited"
//! maximum = 1
//! promotion = "30% off!"
//! ```

use crate::error::{StoreError, StoreResult};
use crate::product::Product;
use crate::promotion::{BoxedPromotion, PercentDiscount, SecondHalfPrice, ThirdOneFree};
use crate::store::Store;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Pricing rule of a configured promotion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromotionRule {
    PercentDiscount { percent: f64 },
    SecondHalfPrice,
    ThirdOneFree,
}

/// A named promotion entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionConfig {
    pub name: String,

    #[serde(flatten)]
    pub rule: PromotionRule,
}

impl PromotionConfig {
    pub fn build(&self) -> StoreResult<BoxedPromotion> {
        let promotion: BoxedPromotion = match self.rule {
            PromotionRule::PercentDiscount { percent } => {
                Arc::new(PercentDiscount::new(self.name.clone(), percent)?)
            }
            PromotionRule::SecondHalfPrice => Arc::new(SecondHalfPrice::new(self.name.clone())),
            PromotionRule::ThirdOneFree => Arc::new(ThirdOneFree::new(self.name.clone())),
        };
        Ok(promotion)
    }
}

/// Product variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKindConfig {
    #[default]
    Standard,
    NonStocked,
    Limited,
}

/// A product entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub name: String,

    pub price: f64,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default)]
    pub kind: ProductKindConfig,

    /// Per-order cap, required for `limited` products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u32>,

    /// Name of a promotion declared in the same catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

impl ProductConfig {
    pub fn build(&self) -> StoreResult<Product> {
        if self.maximum.is_some() && self.kind != ProductKindConfig::Limited {
            return Err(StoreError::Configuration(format!(
                "product '{}' sets a maximum but is not limited",
                self.name
            )));
        }

        match self.kind {
            ProductKindConfig::Standard => {
                Product::new(self.name.clone(), self.price, self.quantity)
            }
            ProductKindConfig::NonStocked => {
                if self.quantity != 0 {
                    return Err(StoreError::Configuration(format!(
                        "non-stocked product '{}' cannot have a quantity",
                        self.name
                    )));
                }
                Product::non_stocked(self.name.clone(), self.price)
            }
            ProductKindConfig::Limited => {
                let maximum = self.maximum.ok_or_else(|| {
                    StoreError::Configuration(format!(
                        "limited product '{}' needs a maximum",
                        self.name
                    ))
                })?;
                Product::limited(self.name.clone(), self.price, self.quantity, maximum)
            }
        }
    }
}

/// Catalog document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub promotions: Vec<PromotionConfig>,

    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

impl Catalog {
    /// Parse a catalog from a TOML string
    pub fn from_toml(toml_str: &str) -> StoreResult<Self> {
        toml::from_str(toml_str).map_err(|e| StoreError::Configuration(e.to_string()))
    }

    /// Read and parse a catalog file
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Build the store, wiring each product to its named promotion.
    /// Products sharing a promotion name share one promotion instance.
    pub fn into_store(self) -> StoreResult<Store> {
        let mut promotions: HashMap<String, BoxedPromotion> = HashMap::new();
        for config in &self.promotions {
            if promotions.contains_key(&config.name) {
                return Err(StoreError::Configuration(format!(
                    "duplicate promotion '{}'",
                    config.name
                )));
            }
            promotions.insert(config.name.clone(), config.build()?);
        }

        let mut store = Store::default();
        for config in &self.products {
            let mut product = config.build()?;
            if let Some(name) = &config.promotion {
                let promotion = promotions.get(name).ok_or_else(|| {
                    StoreError::Configuration(format!(
                        "product '{}' refers to unknown promotion '{}'",
                        config.name, name
                    ))
                })?;
                product.set_promotion(Arc::clone(promotion));
            }
            store.add_item(product);
        }

        Ok(store)
    }
}
