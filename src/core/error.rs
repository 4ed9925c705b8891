//! Typed error handling for the storefront service
//!
//! Internal operations return [`StorefrontResult`]; handlers propagate with
//! `?` and the conversion to an HTTP response happens once, in the
//! [`IntoResponse`] implementation of [`StorefrontError`].
//!
//! # Error Categories
//!
//! - [`ValidationError`]: missing fields or malformed request bodies (400)
//! - [`OrderError`]: lookups against the order store (404)
//! - [`ConfigError`]: configuration loading and validation
//! - `Internal`: anything else (500)
//!
//! Every error is rendered as `{ "error": "<message>" }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::core::order::OrderId;

/// The main error type for the storefront service
#[derive(Debug)]
pub enum StorefrontError {
    /// Request validation errors
    Validation(ValidationError),

    /// Order store errors
    Order(OrderError),

    /// Configuration errors
    Config(ConfigError),

    /// Unexpected failures while processing a request
    Internal(String),
}

impl fmt::Display for StorefrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorefrontError::Validation(e) => write!(f, "{}", e),
            StorefrontError::Order(e) => write!(f, "{}", e),
            StorefrontError::Config(e) => write!(f, "{}", e),
            StorefrontError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StorefrontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorefrontError::Validation(e) => Some(e),
            StorefrontError::Order(e) => Some(e),
            StorefrontError::Config(e) => Some(e),
            StorefrontError::Internal(_) => None,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl StorefrontError {
    /// Shorthand for an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        StorefrontError::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StorefrontError::Validation(_) => StatusCode::BAD_REQUEST,
            StorefrontError::Order(e) => e.status_code(),
            StorefrontError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StorefrontError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StorefrontError::Validation(e) => e.error_code(),
            StorefrontError::Order(e) => e.error_code(),
            StorefrontError::Config(_) => "CONFIG_ERROR",
            StorefrontError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to request validation
#[derive(Debug)]
pub enum ValidationError {
    /// A required top-level field is absent or empty
    MissingField { field: String },

    /// A required customer field is absent or empty
    MissingCustomerField { field: String },

    /// The body is not valid JSON, or a field has the wrong shape
    InvalidJson { message: String },

    /// The body is valid JSON but not an object
    InvalidBody { message: String },

    /// A path parameter could not be parsed
    InvalidPath { message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { field } => {
                write!(f, "Missing required field: {}", field)
            }
            ValidationError::MissingCustomerField { field } => {
                write!(f, "Missing required customer field: {}", field)
            }
            ValidationError::InvalidJson { message } => write!(f, "Invalid JSON: {}", message),
            ValidationError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            ValidationError::InvalidPath { message } => write!(f, "Invalid path: {}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::MissingCustomerField { .. } => "MISSING_CUSTOMER_FIELD",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InvalidBody { .. } => "INVALID_BODY",
            ValidationError::InvalidPath { .. } => "INVALID_PATH",
        }
    }
}

impl From<ValidationError> for StorefrontError {
    fn from(err: ValidationError) -> Self {
        StorefrontError::Validation(err)
    }
}

// =============================================================================
// Order Errors
// =============================================================================

/// Errors related to order store operations
#[derive(Debug)]
pub enum OrderError {
    /// No order with this identifier
    NotFound { id: OrderId },

    /// The store could not complete the operation
    StoreFailed { operation: String, message: String },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The public message does not carry the id
            OrderError::NotFound { .. } => write!(f, "Order not found"),
            OrderError::StoreFailed { operation, message } => {
                write!(f, "Failed to {} order: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for OrderError {}

impl OrderError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::StoreFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::NotFound { .. } => "ORDER_NOT_FOUND",
            OrderError::StoreFailed { .. } => "ORDER_STORE_FAILED",
        }
    }
}

impl From<OrderError> for StorefrontError {
    fn from(err: OrderError) -> Self {
        StorefrontError::Order(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for StorefrontError {
    fn from(err: ConfigError) -> Self {
        StorefrontError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        StorefrontError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for StorefrontError {
    fn from(err: serde_yaml::Error) -> Self {
        StorefrontError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for StorefrontError {
    fn from(err: std::io::Error) -> Self {
        StorefrontError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for StorefrontError {
    fn from(err: anyhow::Error) -> Self {
        StorefrontError::Internal(err.to_string())
    }
}

/// A specialized Result type for storefront operations
pub type StorefrontResult<T> = Result<T, StorefrontError>;
