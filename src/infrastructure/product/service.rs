//! Product service for lookups and filtered listings

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainError, Product, ProductId, ProductQuery, ProductRepository};

/// Product service over the entity store
#[derive(Debug)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Get a product by id
    pub async fn get(&self, id: &str) -> Result<Option<Product>, DomainError> {
        self.repository.find(&ProductId::new(id)).await
    }

    /// List products matching the query, in insertion order.
    ///
    /// Unlike user listings there is no limit parameter.
    pub async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, DomainError> {
        debug!(?query, "Listing products");
        self.repository.list(query).await
    }
}
