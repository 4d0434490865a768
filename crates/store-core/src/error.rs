//! # Store Error Types
//!
//! Typed error handling for the store core.
//! Every fallible operation returns `Result<T, StoreError>`.

use crate::product::ItemId;
use thiserror::Error;

/// Core error type for all store operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Product or promotion built with invalid fields (empty name, negative price, ...)
    #[error("Invalid construction: {0}")]
    InvalidConstruction(String),

    /// Purchase asks for more units than are in stock
    #[error("Not enough stock available for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: u32,
        requested: u32,
    },

    /// Purchase exceeds the per-order cap of a limited product
    #[error("Cannot purchase more than {maximum} units of {product} (requested {requested})")]
    ExceedsOrderLimit {
        product: String,
        maximum: u32,
        requested: u32,
    },

    /// Purchase quantity must be positive
    #[error("Invalid quantity {requested} for {product}")]
    InvalidQuantity { product: String, requested: u32 },

    /// Product has been deactivated
    #[error("Product is not available for purchase: {product}")]
    ProductInactive { product: String },

    /// Line item refers to a product the store does not hold
    #[error("Product not found: {item_id}")]
    ProductNotFound { item_id: ItemId },

    /// Catalog could not be read or is inconsistent
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Returns true if the caller can retry with a different request
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StoreError::InsufficientStock { .. }
                | StoreError::ExceedsOrderLimit { .. }
                | StoreError::InvalidQuantity { .. }
                | StoreError::ProductInactive { .. }
        )
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(StoreError::InsufficientStock {
            product: "MacBook Air M2".into(),
            available: 1,
            requested: 2
        }
        .is_recoverable());
        assert!(StoreError::ExceedsOrderLimit {
            product: "Shipping".into(),
            maximum: 1,
            requested: 2
        }
        .is_recoverable());
        assert!(!StoreError::InvalidConstruction("empty name".into()).is_recoverable());
        assert!(!StoreError::Configuration("bad toml".into()).is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = StoreError::InsufficientStock {
            product: "Google Pixel 7".into(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock available for Google Pixel 7: available 3, requested 5"
        );

        let err = StoreError::ExceedsOrderLimit {
            product: "Shipping".into(),
            maximum: 1,
            requested: 2,
        };
        assert_eq!(
            err.to_string(),
            "Cannot purchase more than 1 units of Shipping (requested 2)"
        );
    }
}
