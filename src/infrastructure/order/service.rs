//! Order fulfillment transaction

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    DomainError, LineItem, Order, OrderId, OrderRepository, ProductId, ProductRepository, UserId,
    UserRepository,
};

/// One requested product line within an order
#[derive(Debug, Clone)]
pub struct OrderItemRequest {
    pub product_id: String,
    /// Defaults to 1 when unspecified
    pub quantity: Option<u32>,
}

/// Request for creating a new order
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub items: Vec<OrderItemRequest>,
}

/// Order service implementing the fulfillment transaction.
///
/// Stock decrements are applied item by item as validation passes. A later
/// item's failure does NOT roll back decrements already made for earlier
/// items in the same request; callers observe the partial mutation.
#[derive(Debug)]
pub struct OrderService {
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            users,
            products,
            orders,
        }
    }

    /// Get an order by id
    pub async fn get(&self, id: &str) -> Result<Option<Order>, DomainError> {
        self.orders.find(&OrderId::new(id)).await
    }

    /// List all orders in insertion order
    pub async fn list(&self) -> Result<Vec<Order>, DomainError> {
        self.orders.list().await
    }

    /// Validate and apply a purchase against the store.
    ///
    /// 1. Resolve the user; nothing runs if it is unknown.
    /// 2. Per item, in input order: resolve the product, atomically
    ///    decrement its stock, and snapshot a line item at the price in
    ///    effect at decrement time.
    /// 3. Sum the subtotals and append a confirmed order.
    pub async fn create(&self, request: CreateOrderRequest) -> Result<Order, DomainError> {
        let user = self
            .users
            .find(&UserId::new(request.user_id.clone()))
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("User '{}' not found", request.user_id))
            })?;

        let mut line_items = Vec::with_capacity(request.items.len());

        for item in &request.items {
            let quantity = item.quantity.unwrap_or(1);
            if quantity == 0 {
                return Err(DomainError::invalid_argument(format!(
                    "Quantity for product '{}' must be a positive integer",
                    item.product_id
                )));
            }

            let product_id = ProductId::new(item.product_id.clone());

            // Resolve first so an unknown product reports NotFound rather
            // than a stock failure. Earlier items keep their decrements.
            let product = self.products.find(&product_id).await?.ok_or_else(|| {
                warn!(product_id = %item.product_id, "Order references unknown product");
                DomainError::not_found(format!("Product '{}' not found", item.product_id))
            })?;

            if product.stock_quantity < quantity {
                warn!(
                    product = %product.name,
                    requested = quantity,
                    available = product.stock_quantity,
                    "Order rejected on stock"
                );
                return Err(DomainError::insufficient_stock(product.name));
            }

            let updated = self.products.decrement_stock(&product_id, quantity).await?;

            line_items.push(LineItem::new(
                product_id,
                updated.name.clone(),
                quantity,
                updated.price,
            ));
        }

        let order = Order::confirmed(user.id, line_items);
        let order = self.orders.append(order).await?;

        info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total = order.total_amount,
            "Order confirmed"
        );

        Ok(order)
    }
}
