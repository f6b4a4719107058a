//! Product endpoint handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{to_json_value, ApiError, ApiResponse};
use crate::domain::ProductQuery;

fn default_in_stock() -> bool {
    true
}

/// Query parameters for GET /api/products
#[derive(Debug, Deserialize)]
pub struct ListProductsParams {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub tag: Option<String>,
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> Result<Json<ApiResponse>, ApiError> {
    debug!(?params, "Listing products");

    let query = ProductQuery {
        category: params.category,
        min_price: params.min_price,
        max_price: params.max_price,
        in_stock: params.in_stock,
        tag: params.tag,
    };

    let products = state.product_service.list(&query).await?;

    Ok(Json(
        ApiResponse::success(format!("Retrieved {} products", products.len()))
            .with_data(to_json_value(&products)?),
    ))
}

/// GET /api/products/{product_id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let product = state
        .product_service
        .get(&product_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Product '{}' not found", product_id)))?;

    Ok(Json(
        ApiResponse::success("Product retrieved successfully").with_data(to_json_value(&product)?),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        let params: ListProductsParams = serde_json::from_str("{}").unwrap();
        assert!(params.in_stock);
        assert!(params.category.is_none());
        assert!(params.tag.is_none());
    }

    #[test]
    fn test_in_stock_can_be_disabled() {
        let params: ListProductsParams =
            serde_json::from_str(r#"{"in_stock":false}"#).unwrap();
        assert!(!params.in_stock);
    }
}
