//! Response types for the employee directory API.
//!
//! This module defines the error response structures and the mapping from
//! [`DirectoryError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;
use crate::validation::ValidationErrors;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message, suitable for a single notification.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Per-field messages for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            fields: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response carrying per-field messages.
    pub fn validation_error(errors: ValidationErrors) -> Self {
        Self {
            fields: Some(errors),
            ..Self::new("VALIDATION_ERROR", "One or more fields are invalid")
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Outcome of the eager validation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no field failed.
    pub valid: bool,
    /// Per-field messages; empty when valid.
    pub errors: ValidationErrors,
}

impl From<ValidationErrors> for ValidationReport {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs a status with an error body.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DirectoryError> for ApiErrorResponse {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::ConfigNotFound { path } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            ),
            DirectoryError::ConfigParseError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            ),
            DirectoryError::EmployeeNotFound { id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", format!("Employee not found: {}", id)),
            ),
            DirectoryError::Transport { message } => ApiErrorResponse::new(
                StatusCode::BAD_GATEWAY,
                ApiError::with_details(
                    "DATA_SOURCE_UNAVAILABLE",
                    "The employee data source could not be reached",
                    message,
                ),
            ),
            DirectoryError::Remote { status, message } => ApiErrorResponse::new(
                StatusCode::BAD_GATEWAY,
                ApiError::with_details(
                    "DATA_SOURCE_ERROR",
                    message,
                    format!("Data source responded with status {}", status),
                ),
            ),
            DirectoryError::Rejected { message, errors } => {
                let error = if errors.is_empty() {
                    ApiError::new("REQUEST_REJECTED", message)
                } else {
                    ApiError::with_details("REQUEST_REJECTED", message, errors.join("; "))
                };
                ApiErrorResponse::new(StatusCode::UNPROCESSABLE_ENTITY, error)
            }
            DirectoryError::InvalidResponse { message } => ApiErrorResponse::new(
                StatusCode::BAD_GATEWAY,
                ApiError::with_details(
                    "INVALID_DATA_SOURCE_RESPONSE",
                    "The employee data source sent an unreadable response",
                    message,
                ),
            ),
            DirectoryError::Validation { errors } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::validation_error(errors),
            ),
        }
    }
}
