use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::{generate, health, orders, products, simulate, stats, users};

/// GET / - endpoint directory
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Storefront API",
        "endpoints": {
            "users": "/api/users",
            "products": "/api/products",
            "orders": "/api/orders",
            "stats": "/api/stats",
            "random_data": "/api/simulate/random-data",
            "health": "/health",
            "simulate_error": "/simulate-error"
        }
    }))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{user_id}", get(users::get_user))
        .route("/products", get(products::list_products))
        .route("/products/{product_id}", get(products::get_product))
        .route("/orders", post(orders::create_order))
        .route("/orders/{order_id}", get(orders::get_order))
        .route("/stats", get(stats::get_stats))
        .route("/simulate/random-data", get(generate::random_data))
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health_check))
        .route("/simulate-error", get(simulate::simulate_error))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(crate::create_app_state())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_users_envelope() {
        let response = app()
            .oneshot(Request::builder().uri("/api/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Retrieved 3 users");
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/users/user_404")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["data"]["status_code"], 404);
    }

    #[tokio::test]
    async fn test_category_filter_via_http() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/products?category=electronics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let products = body["data"].as_array().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["category"], "Electronics");
    }

    #[tokio::test]
    async fn test_create_order_via_http() {
        let app = app();

        let request = Request::builder()
            .method("POST")
            .uri("/api/orders")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"user_id":"user_001","items":[{"product_id":"prod_003","quantity":3}]}"#,
            ))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "confirmed");

        // Stock decrement is visible to subsequent reads
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products/prod_003")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"]["stock_quantity"], 97);
    }

    #[tokio::test]
    async fn test_order_beyond_stock_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/orders")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"user_id":"user_001","items":[{"product_id":"prod_002","quantity":100}]}"#,
            ))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Error: Insufficient stock for Coffee Maker");
    }

    #[tokio::test]
    async fn test_simulate_error_always_fails() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/simulate-error")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error() || response.status().is_server_error());
    }

    #[tokio::test]
    async fn test_random_data_count_out_of_range_is_400() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/simulate/random-data?count=21")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
