//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Validation, scoring or setup failed            │
//! │  ├── ValidationError  - Receipt grammar failures                       │
//! │  └── MoneyError       - Amount strings that are not exact cents        │
//! │                                                                         │
//! │  tally-store errors (separate crate)                                   │
//! │  └── StoreError       - Association map failures                       │
//! │                                                                         │
//! │  tally-api errors (in app)                                             │
//! │  └── ApiError         - What HTTP clients see (status + JSON)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Client                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the failing field in error messages
//! 3. Errors are enum variants, never String
//! 4. Clients only ever see a generic message; the detail is for logs

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core receipt processing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The receipt failed one of the grammar, date or time checks.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Scoring could not complete on a receipt that passed validation.
    ///
    /// ## When This Occurs
    /// - An amount has more integer digits than fit in i64 cents
    /// - Scoring was called on a receipt that never went through the validator
    /// - The point total overflowed
    #[error("Could not compute {rule}: {reason}")]
    Computation { rule: &'static str, reason: String },

    /// A grammar pattern failed to compile when building the validator.
    #[error("Invalid grammar pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl CoreError {
    /// Shorthand for a computation failure inside a named rule.
    pub fn computation(rule: &'static str, reason: impl Into<String>) -> Self {
        CoreError::Computation {
            rule,
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation errors.
///
/// The validator stops at the first failing check; the error names the field
/// so it can be logged, but callers of the HTTP API never see it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required collection is empty (e.g. no items).
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// Invalid format (grammar mismatch, impossible date, bad time).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Empty { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Money Error
// =============================================================================

/// Errors from parsing an amount string into [`Money`](crate::Money).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("amount '{0}' must look like 12.34")]
    Malformed(String),

    #[error("amount '{0}' is too large")]
    Overflow(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::computation("round total", "amount too large");
        assert_eq!(err.to_string(), "Could not compute round total: amount too large");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Empty {
            field: "items".to_string(),
        };
        assert_eq!(err.to_string(), "items must not be empty");
        assert_eq!(err.field(), "items");

        let err = ValidationError::invalid("total", "must look like 12.34");
        assert_eq!(err.to_string(), "total has invalid format: must look like 12.34");
        assert_eq!(err.field(), "total");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Empty {
            field: "items".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
