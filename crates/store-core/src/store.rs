//! # Store
//!
//! The store owns its products in insertion order and processes orders
//! against them.
//!
//! ## Order processing
//!
//! ```text
//! [LineItem, LineItem, ...]
//!      │
//!      ▼  for each line, in order
//! Product::buy(quantity) ──► Promotion::apply (if set)
//!      │
//!      ▼
//! running total ──► Receipt
//! ```
//!
//! `process_order` is not transactional: lines that succeed before a failing
//! line keep their stock changes. `process_order_strict` validates the whole
//! order first and mutates nothing unless every line can be bought.

use crate::error::{StoreError, StoreResult};
use crate::order::{LineItem, Receipt, ReceiptLine};
use crate::product::{ItemId, Product};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Aggregate owning the product list
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Add a product and return its ID
    pub fn add_item(&mut self, product: Product) -> ItemId {
        let id = product.id();
        self.products.push(product);
        id
    }

    /// Remove a product; returns `None` if the store does not hold it
    pub fn remove_item(&mut self, id: ItemId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id() == id)?;
        Some(self.products.remove(index))
    }

    pub fn get(&self, id: ItemId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// All products, active or not, in insertion order
    pub fn items(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of stock over all products (non-stocked products count 0)
    pub fn total_stock(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity())).sum()
    }

    /// Active products, in insertion order
    pub fn active_items(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_active())
    }

    /// Buy every line in order and return the total cost.
    ///
    /// Stops at the first failing line and returns its error. Lines bought
    /// before it are not rolled back.
    pub fn process_order(&mut self, lines: &[LineItem]) -> StoreResult<f64> {
        self.place_order(lines).map(|receipt| receipt.total)
    }

    /// Like [`Store::process_order`], but leaves every product untouched
    /// unless the whole order can be bought.
    pub fn process_order_strict(&mut self, lines: &[LineItem]) -> StoreResult<f64> {
        self.place_order_strict(lines).map(|receipt| receipt.total)
    }

    /// Non-transactional order returning a receipt
    pub fn place_order(&mut self, lines: &[LineItem]) -> StoreResult<Receipt> {
        let mut receipt = Receipt::new();

        for line in lines {
            let product = self
                .get_mut(line.item_id)
                .ok_or(StoreError::ProductNotFound {
                    item_id: line.item_id,
                })?;
            let total = product.buy(line.quantity)?;
            receipt.push(ReceiptLine {
                item_id: line.item_id,
                name: product.name().to_string(),
                quantity: line.quantity,
                total,
            });
        }

        debug!(
            receipt = %receipt.id,
            lines = receipt.lines.len(),
            total = receipt.total,
            "order processed"
        );
        Ok(receipt)
    }

    /// All-or-nothing order returning a receipt
    pub fn place_order_strict(&mut self, lines: &[LineItem]) -> StoreResult<Receipt> {
        self.validate_order(lines)?;
        self.place_order(lines)
    }

    /// Check every line against current stock, counting units claimed by
    /// earlier lines on the same product.
    pub fn validate_order(&self, lines: &[LineItem]) -> StoreResult<()> {
        let mut reserved: HashMap<ItemId, u32> = HashMap::new();

        for line in lines {
            let product = self.get(line.item_id).ok_or(StoreError::ProductNotFound {
                item_id: line.item_id,
            })?;
            let claimed = reserved.entry(line.item_id).or_insert(0);
            product.check_purchase(line.quantity, *claimed)?;
            if product.is_stock_tracked() {
                *claimed = claimed.saturating_add(line.quantity);
            }
        }

        Ok(())
    }
}

impl fmt::Display for Store {
    /// Numbered list of active products, starting at 1
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, product) in self.active_items().enumerate() {
            writeln!(f, "{}. {}", i + 1, product)?;
        }
        Ok(())
    }
}
