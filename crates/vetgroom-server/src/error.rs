//! Error handling for the site server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use vetgroom::{SlugError, VetgroomError};

/// Result type for handlers
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Message shown inline on the contact form
    #[error("Lead rejected: {0}")]
    LeadRejected(String),

    #[error("Site error: {0}")]
    Site(#[from] VetgroomError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::LeadRejected(ref message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
            }
            ApiError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<SlugError> for ApiError {
    fn from(error: SlugError) -> Self {
        ApiError::NotFound(error.to_string())
    }
}

// Convenience functions for common errors
impl ApiError {
    pub fn not_found(path: &str) -> Self {
        Self::NotFound(path.to_string())
    }

    pub fn bad_request(msg: &str) -> Self {
        Self::BadRequest(msg.to_string())
    }
}
