//! Storefront API
//!
//! A sample HTTP service over three in-memory entity collections:
//! - Users, products and orders with uniqueness and stock invariants
//! - An order fulfillment transaction with per-item stock decrements
//! - Composable listing filters
//! - Synthetic data generation and error simulation for testing clients

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::AppState;
use infrastructure::generator::GeneratorService;
use infrastructure::order::OrderService;
use infrastructure::product::ProductService;
use infrastructure::store::InMemoryStore;
use infrastructure::user::UserService;

/// Create the application state backed by a store seeded with sample data
pub fn create_app_state() -> AppState {
    create_app_state_with_store(Arc::new(InMemoryStore::with_sample_data()))
}

/// Create the application state over a caller-supplied store.
///
/// The store is the single owner of all entity state; every service holds
/// a handle to the same instance.
pub fn create_app_state_with_store(store: Arc<InMemoryStore>) -> AppState {
    AppState {
        user_service: Arc::new(UserService::new(store.clone())),
        product_service: Arc::new(ProductService::new(store.clone())),
        order_service: Arc::new(OrderService::new(store.clone(), store.clone(), store)),
        generator_service: Arc::new(GeneratorService::new()),
    }
}
