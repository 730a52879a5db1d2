//! # Error Types
//!
//! Domain-specific error types for paisa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  paisa-core errors (this file)                                      │
//! │  └── CoreError        - Validation and domain-rule failures         │
//! │                                                                     │
//! │  paisa-store errors (separate crate)                                │
//! │  └── StoreError       - Persistence failures (wraps CoreError)      │
//! │                                                                     │
//! │  Flow: CoreError → StoreError → caller / UI message                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, query, bill id)
//! 3. Validation failures never mutate state: a constructor either returns
//!    a complete value or an error, nothing in between

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent rule violations surfaced to the immediate caller. None of
/// them is fatal; the user may always correct the input and retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed numeric or quantity input.
    ///
    /// ## When This Occurs
    /// - Unit price is negative or not a number
    /// - Quantity is zero, negative, or not an integer
    /// - A price string contains no digits at all
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// No catalog product matches the given code or name exactly.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Finalize was attempted on a cart with zero lines.
    #[error("cannot finalize an empty cart")]
    EmptyCart,

    /// Shared secret mismatch on the history/report access gate.
    ///
    /// The gate state is left unchanged; there is no lockout or retry limit.
    #[error("authentication failed")]
    AuthFailed,
}

impl CoreError {
    /// Creates an InvalidInput error for a given field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
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
        let err = CoreError::invalid_input("quantity", "must be a positive integer");
        assert_eq!(err.to_string(), "invalid quantity: must be a positive integer");

        let err = CoreError::ProductNotFound("B-404".to_string());
        assert_eq!(err.to_string(), "product not found: B-404");

        assert_eq!(CoreError::EmptyCart.to_string(), "cannot finalize an empty cart");
        assert_eq!(CoreError::AuthFailed.to_string(), "authentication failed");
    }
}
