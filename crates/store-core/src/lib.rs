//! # store-core
//!
//! Products, promotions and order processing for the shelf-rs store.
//!
//! This crate provides:
//! - `Product` with its `Standard`, `NonStocked` and `Limited` purchase behaviour
//! - `Promotion` trait and the built-in pricing rules
//! - `Store` for catalog queries and order processing
//! - `Receipt` and `LineItem` for orders
//! - `Catalog` for loading a store from TOML
//! - `StoreError` for typed error handling
//!
//! The crate does no terminal or network I/O; `Catalog::load` is the only
//! function that touches the file system.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use store_core::{LineItem, Product, SecondHalfPrice, Store};
//!
//! let mut store = Store::default();
//! let mac = store.add_item(Product::new("MacBook Air M2", 1450.0, 100).unwrap());
//! let bose = store.add_item(
//!     Product::new("Bose QuietComfort Earbuds", 250.0, 500)
//!         .unwrap()
//!         .with_promotion(Arc::new(SecondHalfPrice::new("Second Half price!"))),
//! );
//!
//! let total = store
//!     .process_order(&[LineItem::new(mac, 1), LineItem::new(bose, 2)])
//!     .unwrap();
//! assert_eq!(total, 1450.0 + 375.0);
//! assert_eq!(store.total_stock(), 99 + 498);
//! ```

pub mod catalog;
pub mod error;
pub mod order;
pub mod product;
pub mod promotion;
pub mod store;

// Re-exports for convenience
pub use catalog::{Catalog, ProductConfig, ProductKindConfig, PromotionConfig, PromotionRule};
pub use error::{StoreError, StoreResult};
pub use order::{LineItem, Receipt, ReceiptLine};
pub use product::{ItemId, Product, ProductKind};
pub use promotion::{BoxedPromotion, PercentDiscount, Promotion, SecondHalfPrice, ThirdOneFree};
pub use store::Store;
