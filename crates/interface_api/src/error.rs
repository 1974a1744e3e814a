//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use domain_customer::CustomerError;
use domain_mortgage::SimulationError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// Returns the HTTP status and the machine-readable error kind
    pub fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Conflict(_) => (StatusCode::BAD_REQUEST, "conflict"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        let message = match self {
            ApiError::NotFound(msg) | ApiError::Conflict(msg) | ApiError::Validation(msg) => msg,
            // Storage details stay in the logs.
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                "Internal server error".to_string()
            }
        };

        let body = ErrorResponse {
            error: kind.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::Validation(msg) => ApiError::Validation(msg),
            CustomerError::Conflict(msg) => ApiError::Conflict(msg),
            CustomerError::NotFound(msg) => ApiError::NotFound(msg),
            CustomerError::Storage(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SimulationError> for ApiError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::Validation(msg) => ApiError::Validation(msg),
            SimulationError::CustomerNotFound(id) => {
                ApiError::NotFound(format!("Customer with national ID {} not found", id))
            }
            SimulationError::Storage(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        messages.sort();
        ApiError::Validation(messages.join("; "))
    }
}
