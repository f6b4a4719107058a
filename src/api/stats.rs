//! Store statistics endpoint

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::types::{to_json_value, ApiError, ApiResponse};
use crate::domain::{ProductQuery, UserQuery};

/// Aggregate counters over the current store state
#[derive(Debug, Serialize)]
pub struct StoreStats {
    pub total_users: usize,
    pub total_products: usize,
    pub total_orders: usize,
    pub active_users: usize,
    pub in_stock_products: usize,
    pub total_inventory_value: f64,
    /// Orders created within the last 7 days
    pub recent_orders: usize,
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<ApiResponse>, ApiError> {
    let total_users = state.user_service.count(&UserQuery::default()).await?;
    let active_users = state
        .user_service
        .count(&UserQuery {
            role: None,
            active_only: true,
        })
        .await?;

    let products = state.product_service.list(&ProductQuery::all()).await?;
    let in_stock_products = products.iter().filter(|p| p.in_stock).count();
    let total_inventory_value = products
        .iter()
        .map(|p| p.price * f64::from(p.stock_quantity))
        .sum();

    let orders = state.order_service.list().await?;
    let now = Utc::now();
    let recent_orders = orders
        .iter()
        .filter(|o| (now - o.created_at).num_days() < 7)
        .count();

    let stats = StoreStats {
        total_users,
        total_products: products.len(),
        total_orders: orders.len(),
        active_users,
        in_stock_products,
        total_inventory_value,
        recent_orders,
    };

    Ok(Json(
        ApiResponse::success("Statistics retrieved").with_data(to_json_value(&stats)?),
    ))
}
