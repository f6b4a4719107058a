//! Product entity and related types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
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

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product entity.
///
/// Invariant: `in_stock == (stock_quantity > 0)` after every mutation.
/// Stock is only ever mutated through the store's atomic decrement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: ProductId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price, non-negative
    pub price: f64,
    /// Category, matched case-insensitively in filters
    pub category: String,
    /// Derived availability flag
    pub in_stock: bool,
    pub stock_quantity: u32,
    /// Tags, matched case-insensitively in filters
    pub tags: Vec<String>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        stock_quantity: u32,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            in_stock: stock_quantity > 0,
            stock_quantity,
            tags: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Re-derive `in_stock` from the current quantity
    pub fn recompute_in_stock(&mut self) {
        self.in_stock = self.stock_quantity > 0;
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
