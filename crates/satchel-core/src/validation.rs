//! # Validation Module
//!
//! Input validation for cart mutations and the checkout form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI argument parsing (clap)                                   │
//! │  ├── Type validation (an index is a usize, a quantity an i64)           │
//! │  └── Immediate feedback on malformed input                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                        │
//! │  ├── Trimmed non-empty checkout fields                                  │
//! │  ├── Quantity and price bounds                                          │
//! │  └── Non-empty cart before submission                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The remote sale endpoint (out of our hands)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::cart::Cart;
use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Checkout Form
// =============================================================================

/// The checkout form: who the order is for and where it goes.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub name: String,
    pub address: String,
}

impl CheckoutForm {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        CheckoutForm {
            name: name.into(),
            address: address.into(),
        }
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates the customer name on the checkout form.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates the delivery address on the checkout form.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 500 characters
pub fn validate_delivery_address(address: &str) -> ValidationResult<()> {
    let address = address.trim();

    if address.is_empty() {
        return Err(ValidationError::Required {
            field: "address".to_string(),
        });
    }

    if address.len() > 500 {
        return Err(ValidationError::TooLong {
            field: "address".to_string(),
            max: 500,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Checkout Guard
// =============================================================================

/// The checkout submission guard.
///
/// A submission may leave the Editing state only when the trimmed name and
/// address are non-empty AND the cart holds at least one line. A failure
/// here means no network call is made.
///
/// ## User Workflow
/// ```text
/// satchel checkout --name "" --address "12 Main Rd"
///       │
///       ▼
/// validate_checkout(form, cart) ← THIS FUNCTION
///       │
///       ├── name blank?    → Required { field: "name" }
///       ├── address blank? → Required { field: "address" }
///       ├── cart empty?    → EmptyCart
///       │
///       └── OK → proceed to Submitting
/// ```
pub fn validate_checkout(form: &CheckoutForm, cart: &Cart) -> ValidationResult<()> {
    validate_customer_name(&form.name)?;
    validate_delivery_address(&form.address)?;

    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
