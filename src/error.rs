//! Custom error types for the calculator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for calculator operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Raw text that could not be read as the requested numeric type
    #[error("'{input}' is not a valid {expected}")]
    InvalidNumber {
        input: String,
        expected: &'static str,
    },

    /// A variant name outside the closed set (e.g. an unknown annuity timing)
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// The formula has no real, finite answer for these inputs
    #[error("{operation}: {reason}")]
    Domain {
        operation: &'static str,
        reason: String,
    },

    /// Console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input stream closed while a prompt was waiting
    #[error("Input ended")]
    EndOfInput,
}

impl CalcError {
    /// Create a domain error for a formula
    pub fn domain(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            operation,
            reason: reason.into(),
        }
    }

    /// Create an "unknown variant" error
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Check if this is a domain error
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let err = CalcError::domain("Perpetuity PV", "rate must not be zero");
        assert_eq!(err.to_string(), "Perpetuity PV: rate must not be zero");
        assert!(err.is_domain());
    }

    #[test]
    fn test_invalid_number_display() {
        let err = CalcError::InvalidNumber {
            input: "abc".into(),
            expected: "number",
        };
        assert_eq!(err.to_string(), "'abc' is not a valid number");
        assert!(!err.is_domain());
    }

    #[test]
    fn test_unknown_variant_display() {
        let err = CalcError::unknown_variant("annuity timing", "sometimes");
        assert_eq!(err.to_string(), "Unknown annuity timing: 'sometimes'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CalcError = io_err.into();
        assert!(matches!(err, CalcError::Io(_)));
    }
}
