//! Response envelope shared by every endpoint

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Uniform response envelope.
///
/// Every endpoint, success or failure, responds with this shape; only the
/// HTTP status code and the `success` flag distinguish the two.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

impl ApiResponse {
    /// Successful response without a payload
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
        }
    }

    /// Failed response
    pub fn failure(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data,
            timestamp: Utc::now(),
        }
    }

    /// Attach a payload
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
