//! Custom error types for layak-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for layak-cli operations
#[derive(Error, Debug)]
pub enum LayakError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid input passed to the engine or a service
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// City name outside the fixed reference set
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// Role name outside the fixed reference set
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Expense category outside the fixed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Month label outside the fixed twelve-month sequence
    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    /// Future-choice id outside the fixed catalog
    #[error("Unknown choice: {0}")]
    UnknownChoice(String),

    /// Ratio computation with a zero divisor
    #[error("Division undefined: {0} is zero")]
    DivisionUndefined(&'static str),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LayakError {
    /// Create a "not found" error for expense records
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias for layak-cli operations
pub type LayakResult<T> = Result<T, LayakError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayakError::InvalidInput("income must be positive".into());
        assert_eq!(err.to_string(), "Invalid input: income must be positive");
    }

    #[test]
    fn test_not_found_error() {
        let err = LayakError::expense_not_found("exp-1234");
        assert_eq!(err.to_string(), "Expense not found: exp-1234");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_division_undefined() {
        let err = LayakError::DivisionUndefined("income");
        assert_eq!(err.to_string(), "Division undefined: income is zero");
    }

    #[test]
    fn test_unknown_city() {
        let err = LayakError::UnknownCity("Bandung".into());
        assert_eq!(err.to_string(), "Unknown city: Bandung");
    }

    #[test]
    fn test_not_found_detection_is_variant_specific() {
        assert!(!LayakError::UnknownChoice("saving-small".into()).is_not_found());
        assert!(LayakError::expense_not_found("exp-1234").is_not_found());
    }
}
