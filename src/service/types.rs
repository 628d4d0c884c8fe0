//! Request and response types for the SNP scoring web service

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Standard error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Basic health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Detailed health response including the prediction model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    pub model: ModelStatus,
}

/// Status of the prediction model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    /// Model name
    pub name: String,
    /// Whether the model can serve predictions
    pub available: bool,
    /// Health status string (healthy, degraded, unhealthy)
    pub status: String,
    /// Reason for degraded or unhealthy status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Whether an external model API key is configured
    pub external_model_configured: bool,
}

/// Response for the service root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub status: String,
    pub version: String,
}

/// Service error types
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    MalformedRequest(String),

    #[error("Request body rejected: {0}")]
    BodyRejected(String),

    #[error("Batch size {actual} exceeds maximum allowed ({max})")]
    BatchTooLarge { max: usize, actual: usize },

    #[error("Endpoint not found")]
    NotFound,

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ServiceError {
    /// Convert to HTTP status code
    ///
    /// Request problems are reported as 500 to match what existing clients expect.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::MalformedRequest(_)
            | ServiceError::BodyRejected(_)
            | ServiceError::BatchTooLarge { .. }
            | ServiceError::InternalError(_)
            | ServiceError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }

    /// Status code and JSON body, as returned from handlers
    pub fn into_http(self) -> (StatusCode, Json<ErrorResponse>) {
        (self.status_code(), Json(self.to_response()))
    }
}

impl From<Error> for ServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::MalformedRequest(e) => ServiceError::MalformedRequest(e.to_string()),
            Error::Config(msg) => ServiceError::ConfigError(msg),
            other => ServiceError::InternalError(other.to_string()),
        }
    }
}
