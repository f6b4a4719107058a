//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::generator::GeneratorService;
use crate::infrastructure::order::OrderService;
use crate::infrastructure::product::ProductService;
use crate::infrastructure::user::UserService;

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub product_service: Arc<ProductService>,
    pub order_service: Arc<OrderService>,
    pub generator_service: Arc<GeneratorService>,
}
