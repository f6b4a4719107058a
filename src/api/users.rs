//! User endpoint handlers

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{to_json_value, ApiError, ApiResponse, Json};
use crate::domain::{UserQuery, UserRole};
use crate::infrastructure::user::CreateUserRequest;

fn default_active_only() -> bool {
    true
}

fn default_limit() -> u32 {
    10
}

/// Query parameters for GET /api/users
#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    pub role: Option<UserRole>,
    #[serde(default = "default_active_only")]
    pub active_only: bool,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Body for POST /api/users
#[derive(Debug, Deserialize)]
pub struct CreateUserBody {
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Result<Json<ApiResponse>, ApiError> {
    debug!(?params, "Listing users");

    let query = UserQuery {
        role: params.role,
        active_only: params.active_only,
    };

    let users = state.user_service.list(&query, params.limit).await?;

    Ok(Json(
        ApiResponse::success(format!("Retrieved {} users", users.len()))
            .with_data(to_json_value(&users)?),
    ))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let user = state
        .user_service
        .get(&user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", user_id)))?;

    Ok(Json(
        ApiResponse::success("User retrieved successfully").with_data(to_json_value(&user)?),
    ))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> Result<Json<ApiResponse>, ApiError> {
    let user = state
        .user_service
        .create(CreateUserRequest {
            id: body.id,
            username: body.username,
            email: body.email,
            role: body.role,
            is_active: body.is_active,
        })
        .await?;

    Ok(Json(
        ApiResponse::success("User created successfully").with_data(to_json_value(&user)?),
    ))
}
