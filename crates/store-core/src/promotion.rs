//! # Promotion Trait
//!
//! Strategy pattern for purchase-time pricing rules.
//!
//! ## Design Pattern
//!
//! A product holds at most one promotion. When a purchase is priced the
//! product hands its unit price and the requested quantity to the promotion,
//! which returns the total. Promotions never see or touch stock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Promotion (trait)                       │
//! │  ├── name()                                                 │
//! │  └── apply(unit_price, quantity)                            │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │PercentDiscount│ │SecondHalfPrice│ │ ThirdOneFree  │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```

use crate::error::{StoreError, StoreResult};
use std::fmt;
use std::sync::Arc;

/// A named pricing rule applied when a product is bought.
pub trait Promotion: fmt::Debug + Send + Sync {
    /// Display name (e.g. "30% off!")
    fn name(&self) -> &str;

    /// Total price for `quantity` units at `unit_price`.
    fn apply(&self, unit_price: f64, quantity: u32) -> f64;
}

/// Type alias for a shared promotion (one promotion may back many products)
pub type BoxedPromotion = Arc<dyn Promotion>;

/// Percentage off the whole line
#[derive(Debug, Clone, PartialEq)]
pub struct PercentDiscount {
    name: String,
    percent: f64,
}

impl PercentDiscount {
    /// Create a discount of `percent` percent. `percent` must lie in [0, 100].
    pub fn new(name: impl Into<String>, percent: f64) -> StoreResult<Self> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(StoreError::InvalidConstruction(format!(
                "discount percent must be between 0 and 100, got {percent}"
            )));
        }
        Ok(Self {
            name: name.into(),
            percent,
        })
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }
}

impl Promotion for PercentDiscount {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, unit_price: f64, quantity: u32) -> f64 {
        unit_price * f64::from(quantity) * (1.0 - self.percent / 100.0)
    }
}

/// Every second unit costs half
#[derive(Debug, Clone, PartialEq)]
pub struct SecondHalfPrice {
    name: String,
}

impl SecondHalfPrice {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Promotion for SecondHalfPrice {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, unit_price: f64, quantity: u32) -> f64 {
        let half = quantity / 2;
        let full = quantity - half;
        f64::from(full) * unit_price + f64::from(half) * unit_price * 0.5
    }
}

/// Every third unit is free
#[derive(Debug, Clone, PartialEq)]
pub struct ThirdOneFree {
    name: String,
}

impl ThirdOneFree {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Promotion for ThirdOneFree {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, unit_price: f64, quantity: u32) -> f64 {
        let free = quantity / 3;
        f64::from(quantity - free) * unit_price
    }
}
