//! # Order Types
//!
//! Line items submitted to the store and receipts returned by it.

use crate::product::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One (product, quantity) request within an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product to buy
    pub item_id: ItemId,

    /// Units requested
    pub quantity: u32,
}

impl LineItem {
    pub fn new(item_id: ItemId, quantity: u32) -> Self {
        Self { item_id, quantity }
    }
}

impl From<(ItemId, u32)> for LineItem {
    fn from((item_id, quantity): (ItemId, u32)) -> Self {
        Self::new(item_id, quantity)
    }
}

/// A purchased line, as priced at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Product ID
    pub item_id: ItemId,

    /// Product name (denormalized for display)
    pub name: String,

    /// Units bought
    pub quantity: u32,

    /// Price paid for the line, promotion included
    pub total: f64,
}

/// Result of a successful order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt ID (generated)
    pub id: Uuid,

    /// Purchased lines, in order
    pub lines: Vec<ReceiptLine>,

    /// Sum of line totals
    pub total: f64,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    /// Create an empty receipt with generated ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            lines: Vec::new(),
            total: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Append a line and add it to the running total
    pub fn push(&mut self, line: ReceiptLine) {
        self.total += line.total;
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_totals() {
        let mut receipt = Receipt::new();
        assert!(receipt.is_empty());

        receipt.push(ReceiptLine {
            item_id: ItemId::new(),
            name: "MacBook Air M2".into(),
            quantity: 1,
            total: 1450.0,
        });
        receipt.push(ReceiptLine {
            item_id: ItemId::new(),
            name: "Bose QuietComfort Earbuds".into(),
            quantity: 2,
            total: 500.0,
        });

        assert_eq!(receipt.total, 1950.0);
        assert_eq!(receipt.item_count(), 3);
        assert!(!receipt.is_empty());
    }

    #[test]
    fn test_line_item_from_tuple() {
        let id = ItemId::new();
        let line: LineItem = (id, 4).into();
        assert_eq!(line, LineItem::new(id, 4));
    }

    #[test]
    fn test_receipt_serializes() {
        let mut receipt = Receipt::new();
        receipt.push(ReceiptLine {
            item_id: ItemId::new(),
            name: "Shipping".into(),
            quantity: 1,
            total: 10.0,
        });

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["total"], 10.0);
        assert_eq!(json["lines"][0]["name"], "Shipping");
        assert!(json["id"].is_string());
    }
}
