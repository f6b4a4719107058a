//! Order entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::ProductId;
use crate::domain::user::UserId;

/// Order identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
}

/// Snapshot of one product line within an order.
///
/// Captured at order time; later product changes never alter it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// Price per unit at the time the stock was decremented
    pub unit_price: f64,
    /// `unit_price * quantity`
    pub subtotal: f64,
}

impl LineItem {
    pub fn new(product_id: ProductId, name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            product_id,
            name: name.into(),
            quantity,
            unit_price,
            subtotal: unit_price * f64::from(quantity),
        }
    }
}

/// Order entity. Append-only; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub line_items: Vec<LineItem>,
    /// Sum of line-item subtotals, computed at creation
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a confirmed order from captured line items
    pub fn confirmed(user_id: UserId, line_items: Vec<LineItem>) -> Self {
        let total_amount = line_items.iter().map(|item| item.subtotal).sum();

        Self {
            id: OrderId::generate(),
            user_id,
            line_items,
            total_amount,
            status: OrderStatus::Confirmed,
            created_at: Utc::now(),
        }
    }
}
