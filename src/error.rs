//! Centralized error handling module
//!
//! Error types for the dashboard's HTTP adapter and their JSON response mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use crate::models::UnknownOption;

/// Application-wide error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(#[from] UnknownOption),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Standardized error response format
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Unique correlation ID for tracing
    pub correlation_id: String,
    /// Error type classification
    pub error_type: String,
    /// Human-readable error message (safe for clients)
    pub message: String,
    /// HTTP status code
    pub status_code: u16,
    /// Timestamp of the error
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str, status_code: StatusCode) -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            error_type: error_type.to_string(),
            message: message.to_string(),
            status_code: status_code.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (error_type, message) = match self {
            AppError::InvalidSelection(option) => {
                warn!(kind = option.kind, label = %option.label, "Rejected unknown selection");
                ("INVALID_SELECTION", self.to_string())
            }
            AppError::ValidationError(msg) => ("VALIDATION_ERROR", msg.clone()),
        };

        let error_response = ErrorResponse::new(error_type, &message, status);

        error!(
            correlation_id = %error_response.correlation_id,
            error_type = %error_type,
            status_code = %status.as_u16(),
            "Error response generated"
        );

        HttpResponse::build(status).json(error_response)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidSelection(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;
