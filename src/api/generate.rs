//! Synthetic data endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{to_json_value, ApiError, ApiResponse};
use crate::infrastructure::generator::{DataType, GenerateRequest};

fn default_data_type() -> DataType {
    DataType::Users
}

fn default_count() -> u32 {
    5
}

/// Query parameters for GET /api/simulate/random-data
#[derive(Debug, Deserialize)]
pub struct RandomDataParams {
    #[serde(default = "default_data_type")]
    pub data_type: DataType,
    #[serde(default = "default_count")]
    pub count: u32,
}

/// GET /api/simulate/random-data
pub async fn random_data(
    State(state): State<AppState>,
    Query(params): Query<RandomDataParams>,
) -> Result<Json<ApiResponse>, ApiError> {
    debug!(?params, "Generating random data");

    let request = GenerateRequest {
        data_type: params.data_type,
        count: params.count,
    };
    let data = state.generator_service.generate(&request)?;

    let kind = match params.data_type {
        DataType::Users => "users",
        DataType::Products => "products",
        DataType::Orders => "orders",
    };

    Ok(Json(
        ApiResponse::success(format!("Generated {} random {}", data.len(), kind))
            .with_data(to_json_value(&data)?),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params: RandomDataParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.data_type, DataType::Users);
        assert_eq!(params.count, 5);
    }

    #[test]
    fn test_unrecognized_data_type_is_rejected() {
        let result = serde_json::from_str::<RandomDataParams>(r#"{"data_type":"widgets"}"#);
        assert!(result.is_err());
    }
}
