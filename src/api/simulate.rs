//! Error simulation endpoint

use axum::http::StatusCode;
use rand::seq::SliceRandom;

use crate::api::types::ApiError;

const ERROR_TABLE: &[(StatusCode, &str)] = &[
    (StatusCode::BAD_REQUEST, "Bad Request"),
    (StatusCode::UNAUTHORIZED, "Unauthorized"),
    (StatusCode::FORBIDDEN, "Forbidden"),
    (StatusCode::NOT_FOUND, "Not Found"),
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
    (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable"),
];

/// GET /simulate-error
///
/// Always fails, with a status picked at random from a fixed table.
pub async fn simulate_error() -> ApiError {
    let (status, message) = ERROR_TABLE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(ERROR_TABLE[0]);

    ApiError::new(status, message)
}
