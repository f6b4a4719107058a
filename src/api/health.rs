//! Health check endpoint

use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::api::types::ApiResponse;

/// GET /health
pub async fn health_check() -> Json<ApiResponse> {
    let data = json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    });

    Json(ApiResponse::success("API is running normally").with_data(data))
}
