//! Domain error types
//!
//! This module defines the error hierarchy for Porter. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Porter error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PorterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request validation errors, naming the offending field
    #[error("Validation error: field '{field}': {message}")]
    Validation { field: String, message: String },

    /// Path classification errors (non-fatal, record excluded from groups)
    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    /// Requested group index past the end of the addressable sequence
    #[error("Group index {index} out of range: only {count} addressable group(s)")]
    IndexOutOfRange { index: usize, count: usize },

    /// Lookup-store errors
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    /// Manifest sink errors
    #[error("Sink error: {0}")]
    Sink(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl PorterError {
    /// Convenience constructor for a validation error naming a field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PorterError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Classification failure for a single record's relative path
///
/// These are non-fatal: the offending record is excluded from every group
/// and the invocation continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Path starts with neither of the known data-type prefixes
    #[error("path '{0}' matches no known data type prefix")]
    UnknownPrefix(String),

    /// A secondary-analysis path with no portal run id segment
    #[error("secondary path '{0}' contains no portal run id segment")]
    MissingPortalRunId(String),

    /// A primary path too shallow to carry an instrument run id segment
    #[error("primary path '{0}' has no instrument run id segment")]
    MissingInstrumentRunId(String),
}

/// Lookup-store specific errors
///
/// Errors that occur when talking to the record store. These errors don't
/// expose third-party HTTP client types. Retry and backoff are owned by the
/// orchestrator, never by this crate.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the record store
    #[error("Failed to connect to record store: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Invalid response from the store
    #[error("Invalid response from record store: {0}")]
    InvalidResponse(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PorterError {
    fn from(err: std::io::Error) -> Self {
        PorterError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PorterError {
    fn from(err: serde_json::Error) -> Self {
        PorterError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PorterError {
    fn from(err: toml::de::Error) -> Self {
        PorterError::Configuration(format!("TOML parse error: {err}"))
    }
}
