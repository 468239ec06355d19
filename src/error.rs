// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// Message devise-style clients expect when no valid credential is presented.
pub const SIGN_IN_MESSAGE: &str = "You need to sign in or sign up before continuing.";

/// Message returned when an authenticated caller is not the resource owner.
pub const NOT_AUTHORIZED_MESSAGE: &str = "You are not authorized to perform this action.";

/// HTTP API error with appropriate status codes and client-facing envelopes.
///
/// The wire shapes are deliberately asymmetric and must stay that way:
/// an unauthenticated request gets `{"errors": [..]}` while every other
/// failure gets a singular `{"error_message": ".."}`. Clients assert on
/// both shapes.
#[derive(Debug)]
pub enum ApiError {
    // 401 - no valid credential
    Unauthenticated,

    // 401 - valid credential, caller is not permitted
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 422 Unprocessable Entity
    Validation(String),

    // 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthenticated => SIGN_IN_MESSAGE,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Validation(msg) => msg,
            ApiError::Internal(msg) => msg,
        }
    }

    /// Convert to the JSON response body for this error kind.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Unauthenticated => {
                json!({ "errors": [SIGN_IN_MESSAGE] })
            }
            _ => {
                json!({ "error_message": self.message() })
            }
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn unauthenticated() -> Self {
        ApiError::Unauthenticated
    }

    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(NOT_AUTHORIZED_MESSAGE.to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<crate::models::recipe::ValidationError> for ApiError {
    fn from(err: crate::models::recipe::ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<crate::store::StoreError> for ApiError {
    fn from(err: crate::store::StoreError) -> Self {
        match err {
            crate::store::StoreError::NotFound(msg) => ApiError::not_found(msg),
            crate::store::StoreError::Conflict(msg) => ApiError::validation(msg),
            crate::store::StoreError::Sqlx(sqlx_err) => {
                // Log the real error but return a generic message
                tracing::error!("sqlx error: {}", sqlx_err);
                ApiError::internal("An error occurred while processing your request")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
