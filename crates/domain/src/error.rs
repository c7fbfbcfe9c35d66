//! Unified error types for the domain layer.
//!
//! Provides a common error type used across all domain operations,
//! enabling consistent error handling without forcing callers onto
//! String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for command words and slot names)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Target position lies outside the grid
    #[error("Position ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i64, y: i64 },

    /// Target tile cannot be entered
    #[error("The {kind} at ({x}, {y}) cannot be entered")]
    Impassable { kind: &'static str, x: u32, y: u32 },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("client id cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: client id cannot be empty"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Item", "rusty sword");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Item"));
        assert!(err.to_string().contains("rusty sword"));
    }

    #[test]
    fn test_out_of_bounds_error() {
        let err = DomainError::OutOfBounds { x: -1, y: 0 };
        assert_eq!(err.to_string(), "Position (-1, 0) is outside the grid");
    }

    #[test]
    fn test_impassable_error() {
        let err = DomainError::Impassable {
            kind: "water",
            x: 3,
            y: 4,
        };
        assert!(err.to_string().contains("water"));
    }
}
