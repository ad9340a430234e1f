//! # Error Types
//!
//! Structured error types for brew_core. Only the validated calculation layer,
//! the formatting helpers and settings loading produce errors; the raw formulas
//! in [`crate::equations`] and [`crate::units`] never fail and let non-finite
//! values propagate instead.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::errors::{BrewError, BrewResult};
//!
//! fn validate_gravity(sg: f64) -> BrewResult<()> {
//!     if sg <= 0.0 {
//!         return Err(BrewError::InvalidInput {
//!             field: "og_sg".to_string(),
//!             value: sg.to_string(),
//!             reason: "Gravity must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for brew_core operations
pub type BrewResult<T> = Result<T, BrewError>;

/// Structured error type for brewing calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BrewError {
    /// An input value is invalid (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Decimal text that the formatting helpers cannot work with
    #[error("Malformed number '{value}': {reason}")]
    MalformedNumber { value: String, reason: String },

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

impl BrewError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BrewError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MalformedNumber error
    pub fn malformed_number(value: impl Into<String>, reason: impl Into<String>) -> Self {
        BrewError::MalformedNumber {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BrewError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BrewError::InvalidInput { .. } => "INVALID_INPUT",
            BrewError::MalformedNumber { .. } => "MALFORMED_NUMBER",
            BrewError::FileError { .. } => "FILE_ERROR",
            BrewError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for BrewError {
    fn from(err: serde_json::Error) -> Self {
        BrewError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Require a finite value, naming the field in the error.
pub(crate) fn require_finite(field: &str, value: f64) -> BrewResult<()> {
    if !value.is_finite() {
        return Err(BrewError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    Ok(())
}

/// Require a finite, strictly positive value.
pub(crate) fn require_positive(field: &str, value: f64) -> BrewResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(BrewError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}
