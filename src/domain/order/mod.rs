pub mod entity;
pub mod repository;

pub use entity::{LineItem, Order, OrderId, OrderStatus};
pub use repository::OrderRepository;
