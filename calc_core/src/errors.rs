//! # Error Types
//!
//! Structured error types for calc_core.
//!
//! Estimate operations themselves never fail: a bad lookup resolves to zero
//! weight and unparseable input falls back to zero. These errors cover the
//! edges around the estimate (strict table lookups, settings documents and
//! writing report files).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_price(price: f64) -> CalcResult<()> {
//!     if price < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "unit_price",
//!             price.to_string(),
//!             "Price must not be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Profile family or size not present in the reference table
    #[error("Profile not found: {family} {size}")]
    ProfileNotFound { family: String, size: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ProfileNotFound error
    pub fn profile_not_found(family: impl Into<String>, size: impl Into<String>) -> Self {
        CalcError::ProfileNotFound {
            family: family.into(),
            size: size.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::profile_not_found("Canal", "100x50");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("ProfileNotFound"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::profile_not_found("IPR", "1x1").error_code(), "PROFILE_NOT_FOUND");
        assert_eq!(CalcError::file_error("write", "/tmp/x", "denied").error_code(), "FILE_ERROR");
        assert_eq!(
            CalcError::invalid_input("unit_price", "-1", "negative").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::profile_not_found("Canal", "100x50");
        assert_eq!(error.to_string(), "Profile not found: Canal 100x50");
    }
}
