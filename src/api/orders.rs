//! Order endpoint handlers

use axum::extract::{Path, State};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::types::{to_json_value, ApiError, ApiResponse, Json};
use crate::infrastructure::order::{CreateOrderRequest, OrderItemRequest};

/// One requested line in the order body
#[derive(Debug, Deserialize)]
pub struct OrderItemBody {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Body for POST /api/orders
#[derive(Debug, Deserialize)]
pub struct CreateOrderBody {
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<OrderItemBody>,
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderBody>,
) -> Result<Json<ApiResponse>, ApiError> {
    let request = CreateOrderRequest {
        user_id: body.user_id,
        items: body
            .items
            .into_iter()
            .map(|item| OrderItemRequest {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect(),
    };

    let order = state.order_service.create(request).await?;

    Ok(Json(
        ApiResponse::success("Order created successfully").with_data(to_json_value(&order)?),
    ))
}

/// GET /api/orders/{order_id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let order = state
        .order_service
        .get(&order_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Order '{}' not found", order_id)))?;

    Ok(Json(
        ApiResponse::success("Order retrieved successfully").with_data(to_json_value(&order)?),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_body_parsing() {
        let body: CreateOrderBody = serde_json::from_str(
            r#"{"user_id":"user_001","items":[{"product_id":"prod_001","quantity":2},{"product_id":"prod_003"}]}"#,
        )
        .unwrap();

        assert_eq!(body.user_id, "user_001");
        assert_eq!(body.items.len(), 2);
        assert_eq!(body.items[0].quantity, Some(2));
        assert_eq!(body.items[1].quantity, None);
    }

    #[test]
    fn test_items_default_to_empty() {
        let body: CreateOrderBody = serde_json::from_str(r#"{"user_id":"user_001"}"#).unwrap();
        assert!(body.items.is_empty());
    }
}
