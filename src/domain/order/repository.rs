//! Order repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Order, OrderId};
use crate::domain::DomainError;

/// Repository trait for order storage
#[async_trait]
pub trait OrderRepository: Send + Sync + Debug {
    /// Get an order by id
    async fn find(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Unconditionally append an order.
    ///
    /// Validation happens upstream in the order transaction; the store
    /// itself never rejects an order.
    async fn append(&self, order: Order) -> Result<Order, DomainError>;

    /// List all orders in insertion order
    async fn list(&self) -> Result<Vec<Order>, DomainError>;

    /// Count stored orders
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}
