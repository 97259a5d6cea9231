//! # Error Types
//!
//! Domain-specific error types for satchel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  satchel-core errors (this file)                                        │
//! │  ├── CoreError        - Cart and catalog domain errors                  │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  satchel-store errors (separate crate)                                  │
//! │  └── StoreError       - Cart slot read/write failures                   │
//! │                                                                         │
//! │  satchel-api errors (separate crate)                                    │
//! │  └── ApiError         - Catalog fetch / sale submission failures        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → (ApiError | CLI message)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, index, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent cart precondition violations or domain logic
/// failures. They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// A positional cart mutation referenced a line that does not exist.
    ///
    /// ## When This Occurs
    /// - Quantity update or removal with a stale index
    /// - The cart changed between rendering and the mutation
    #[error("Cart line {index} does not exist (cart has {len} lines)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Cart has exceeded maximum allowed line items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Checkout attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,
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
        let err = CoreError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Cart line 4 does not exist (cart has 2 lines)"
        );

        let err = CoreError::ProductNotFound(17);
        assert_eq!(err.to_string(), "Product not found: 17");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        assert_eq!(ValidationError::EmptyCart.to_string(), "cart is empty");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "address".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
