pub mod service;

pub use service::{CreateOrderRequest, OrderItemRequest, OrderService};
