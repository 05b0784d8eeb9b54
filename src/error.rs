//! Unified error types for the calculator service.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::types::ErrorResponse;

/// Message returned when an operand is missing or not a JSON number.
pub const INVALID_OPERANDS_MESSAGE: &str = "Both a and b must be numbers";

/// Process-level error for startup and configuration.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced to HTTP clients as `{"error": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// `a` or `b` is missing or is not a JSON number.
    #[error("{}", INVALID_OPERANDS_MESSAGE)]
    InvalidOperands,

    /// The body could not be read as JSON.
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidOperands => StatusCode::BAD_REQUEST,
            Self::Body(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_operands_is_bad_request() {
        let err = ApiError::InvalidOperands;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Both a and b must be numbers");
    }

    #[test]
    fn invalid_config_displays_reason() {
        let err = AppError::InvalidConfig("PORT must not be 0".to_string());
        assert_eq!(err.to_string(), "invalid configuration: PORT must not be 0");
    }
}
