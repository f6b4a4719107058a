//! Product repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Product, ProductId};
use super::query::ProductQuery;
use crate::domain::DomainError;

/// Repository trait for product storage
#[async_trait]
pub trait ProductRepository: Send + Sync + Debug {
    /// Get a product by id
    async fn find(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Insert a new product
    async fn insert(&self, product: Product) -> Result<Product, DomainError>;

    /// List products matching the query, in insertion order
    async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, DomainError>;

    /// Atomically check and subtract stock.
    ///
    /// Fails with `NotFound` if the product does not exist and with
    /// `InsufficientStock` if fewer than `quantity` units are available;
    /// neither failure mutates anything. On success the stored quantity is
    /// reduced, `in_stock` re-derived, and the updated product returned.
    async fn decrement_stock(
        &self,
        id: &ProductId,
        quantity: u32,
    ) -> Result<Product, DomainError>;
}
