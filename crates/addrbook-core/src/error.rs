//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Broken wiring between components.
///
/// These are programming errors, not runtime conditions: a correctly composed
/// application never produces one. The composition root aborts startup when it
/// sees one, and request handlers never retry or swallow them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A cache namespace was registered twice.
    #[error("cache partition with namespace={0} was already registered")]
    DuplicatePartition(String),

    /// A cache namespace was used without being registered.
    #[error("cache partition with namespace={0} was not registered")]
    UnregisteredPartition(String),

    /// A cache partition was declared with an empty namespace.
    #[error("cache partition namespace must not be empty")]
    EmptyNamespace,
}

/// Unified error type for the address book service.
#[derive(Error, Debug)]
pub enum AddrBookError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    // ============ Wiring Errors ============
    /// Invariant violation (fatal)
    #[error("Invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AddrBookError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Cache(_)
            | Self::Invariant(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Invariant(_) => "INVARIANT_VIOLATION",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the process must stop rather than keep serving.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Invariant(_))
    }

    /// Message safe to show to API clients.
    ///
    /// Server-side failures are reported generically; the detail stays in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.status_code() >= 500 {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AddrBookError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AddrBookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    /// Request id of the failed call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from an `AddrBookError`.
    #[must_use]
    pub fn from_error(error: &AddrBookError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.public_message(),
            details: None,
            trace_id: None,
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&AddrBookError> for ErrorResponse {
    fn from(error: &AddrBookError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AddrBookError::not_found("Contact", 1).status_code(), 404);
        assert_eq!(AddrBookError::validation("bad phone").status_code(), 400);
        assert_eq!(AddrBookError::Database("down".to_string()).status_code(), 500);
        assert_eq!(
            AddrBookError::from(InvariantViolation::EmptyNamespace).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AddrBookError::not_found("Contact", 1).error_code(), "NOT_FOUND");
        assert_eq!(AddrBookError::internal("boom").error_code(), "INTERNAL_ERROR");
        assert_eq!(
            AddrBookError::from(InvariantViolation::DuplicatePartition("x".into())).error_code(),
            "INVARIANT_VIOLATION"
        );
    }

    #[test]
    fn test_fatal_errors() {
        assert!(AddrBookError::Configuration("unknown cache type".into()).is_fatal());
        assert!(AddrBookError::from(InvariantViolation::UnregisteredPartition("x".into())).is_fatal());
        assert!(!AddrBookError::Database("timeout".into()).is_fatal());
        assert!(!AddrBookError::Cache("refused".into()).is_fatal());
    }

    #[test]
    fn test_invariant_messages_name_the_namespace() {
        let err = InvariantViolation::DuplicatePartition("contact-by-id".into());
        assert!(err.to_string().contains("namespace=contact-by-id"));
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn test_public_message_hides_server_errors() {
        let err = AddrBookError::Database("password authentication failed for user".into());
        assert_eq!(err.public_message(), "Internal server error");

        let err = AddrBookError::validation("first_name: required");
        assert!(err.public_message().contains("first_name"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = AddrBookError::not_found("Contact", "abc");
        let response = ErrorResponse::from_error(&err).with_trace_id("req-1");
        assert_eq!(response.code, "NOT_FOUND");
        assert!(response.message.contains("abc"));
        assert!(response.details.is_none());
        assert_eq!(response.trace_id.as_deref(), Some("req-1"));
    }
}
