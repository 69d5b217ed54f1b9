pub mod events;
pub mod health;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use evman_core::error::StoreError;
use serde::Serialize;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Store and handler errors mapped onto HTTP responses.
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Event not found: {}", id))
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(message) => ApiError::Validation(message),
            StoreError::NotFound(id) => ApiError::NotFound(id),
            other => ApiError::Internal(other.into()),
        }
    }
}

/// GET / - service banner with the endpoint map.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "evman API is running",
        "endpoints": {
            "events": "/api/events",
            "health": "/api/health",
        },
    }))
}
