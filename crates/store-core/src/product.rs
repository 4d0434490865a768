//! # Product Types
//!
//! Catalog entries and their purchase behaviour.
//!
//! Three variants share one struct and differ only through [`ProductKind`]:
//!
//! | Kind | Stock | Per-order cap |
//! |------|-------|---------------|
//! | `Standard` | tracked, deactivates at 0 | none |
//! | `NonStocked` | always 0, never checked | none |
//! | `Limited` | tracked, deactivates at 0 | `maximum` |

use crate::error::{StoreError, StoreResult};
use crate::promotion::BoxedPromotion;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Opaque product identifier, assigned at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Purchase behaviour of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    /// Stock-tracked; decrements on purchase
    Standard,
    /// No inventory (digital licenses and the like)
    NonStocked,
    /// Stock-tracked with a cap on units per order (shipping fees and the like)
    Limited { maximum: u32 },
}

/// A product in the store
#[derive(Debug)]
pub struct Product {
    id: ItemId,
    name: String,
    price: f64,
    quantity: u32,
    active: bool,
    kind: ProductKind,
    promotion: Option<BoxedPromotion>,
}

impl Product {
    /// Create a stock-tracked product
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> StoreResult<Self> {
        Self::build(name.into(), price, quantity, ProductKind::Standard)
    }

    /// Create a product without inventory; its quantity is always 0
    pub fn non_stocked(name: impl Into<String>, price: f64) -> StoreResult<Self> {
        Self::build(name.into(), price, 0, ProductKind::NonStocked)
    }

    /// Create a stock-tracked product that caps units per order at `maximum`
    pub fn limited(
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        maximum: u32,
    ) -> StoreResult<Self> {
        if maximum == 0 {
            return Err(StoreError::InvalidConstruction(
                "Maximum per order must be positive.".to_string(),
            ));
        }
        Self::build(name.into(), price, quantity, ProductKind::Limited { maximum })
    }

    fn build(name: String, price: f64, quantity: u32, kind: ProductKind) -> StoreResult<Self> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidConstruction(
                "Name cannot be empty.".to_string(),
            ));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(StoreError::InvalidConstruction(
                "Price cannot be negative.".to_string(),
            ));
        }

        Ok(Self {
            id: ItemId::new(),
            name,
            price,
            quantity,
            active: true,
            kind,
            promotion: None,
        })
    }

    /// Builder: attach a promotion
    pub fn with_promotion(mut self, promotion: BoxedPromotion) -> Self {
        self.promotion = Some(promotion);
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Units in stock (always 0 for non-stocked products)
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Replace the stock count.
    ///
    /// Ignored for non-stocked products. Restocking a sold-out product does
    /// not reactivate it; call [`Product::activate`] for that.
    pub fn set_quantity(&mut self, quantity: u32) {
        if self.is_stock_tracked() {
            self.quantity = quantity;
        }
    }

    pub fn is_stock_tracked(&self) -> bool {
        !matches!(self.kind, ProductKind::NonStocked)
    }

    /// Per-order cap, if this is a limited product
    pub fn maximum(&self) -> Option<u32> {
        match self.kind {
            ProductKind::Limited { maximum } => Some(maximum),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn promotion(&self) -> Option<&BoxedPromotion> {
        self.promotion.as_ref()
    }

    /// Set the promotion, replacing any previous one
    pub fn set_promotion(&mut self, promotion: BoxedPromotion) {
        self.promotion = Some(promotion);
    }

    pub fn clear_promotion(&mut self) {
        self.promotion = None;
    }

    /// Price `quantity` units, through the promotion when one is set
    pub fn quote(&self, quantity: u32) -> f64 {
        match &self.promotion {
            Some(promotion) => promotion.apply(self.price, quantity),
            None => self.price * f64::from(quantity),
        }
    }

    /// Check that `quantity` units could be bought right now, given that
    /// `reserved` units are already claimed by earlier lines of the same order.
    ///
    /// Checks run in the same order as [`Product::buy`]: quantity, per-order
    /// cap, active flag, stock.
    pub fn check_purchase(&self, quantity: u32, reserved: u32) -> StoreResult<()> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity {
                product: self.name.clone(),
                requested: quantity,
            });
        }

        if let ProductKind::Limited { maximum } = self.kind {
            if quantity > maximum {
                return Err(StoreError::ExceedsOrderLimit {
                    product: self.name.clone(),
                    maximum,
                    requested: quantity,
                });
            }
        }

        // Earlier lines that empty the stock deactivate the product.
        let sold_out = self.is_stock_tracked() && reserved > 0 && reserved >= self.quantity;
        if !self.active || sold_out {
            return Err(StoreError::ProductInactive {
                product: self.name.clone(),
            });
        }

        if self.is_stock_tracked() {
            let available = self.quantity - reserved.min(self.quantity);
            if quantity > available {
                return Err(StoreError::InsufficientStock {
                    product: self.name.clone(),
                    available,
                    requested: quantity,
                });
            }
        }

        Ok(())
    }

    /// Buy `quantity` units and return the total price.
    ///
    /// Stock-tracked products lose `quantity` units and deactivate when the
    /// stock reaches exactly 0. On error nothing changes.
    pub fn buy(&mut self, quantity: u32) -> StoreResult<f64> {
        self.check_purchase(quantity, 0)?;

        let total = self.quote(quantity);

        if self.is_stock_tracked() {
            self.quantity -= quantity;
            debug!(
                product = %self.name,
                sold = quantity,
                remaining = self.quantity,
                "stock decremented"
            );
            if self.quantity == 0 {
                self.deactivate();
                debug!(product = %self.name, "sold out, deactivated");
            }
        }

        Ok(total)
    }

    /// Human-readable summary
    pub fn show(&self) -> String {
        let mut text = format!(
            "{}, Price: {}, Quantity: {}",
            self.name, self.price, self.quantity
        );
        if let Some(promotion) = &self.promotion {
            text.push_str(&format!(" [Promotion: {}]", promotion.name()));
        }
        match self.kind {
            ProductKind::Standard => {}
            ProductKind::NonStocked => text.push_str(" (Non-stocked product)"),
            ProductKind::Limited { maximum } => {
                text.push_str(&format!(" (Maximum purchase quantity: {maximum})"))
            }
        }
        text
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}
