//! # satchel-core: Pure Business Logic for Satchel
//!
//! This crate is the **heart** of the Satchel storefront client. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Satchel Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (`satchel`)                         │   │
//! │  │    catalog ──► add ──► cart ──► update/remove ──► checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │        ┌───────────────────────┼───────────────────────┐               │
//! │        ▼                       ▼                       ▼               │
//! │  ┌───────────────┐   ┌──────────────────┐   ┌───────────────────┐     │
//! │  │ satchel-store │   │ ★ satchel-core ★ │   │   satchel-api     │     │
//! │  │  (cart slot)  │   │   (THIS CRATE)   │   │  (HTTP client)    │     │
//! │  └───────────────┘   │                  │   └───────────────────┘     │
//! │                      │  ┌────────────┐  │                             │
//! │                      │  │   money    │  │                             │
//! │                      │  │   types    │  │                             │
//! │                      │  │   cart     │  │                             │
//! │                      │  │ validation │  │                             │
//! │                      │  └────────────┘  │                             │
//! │                      │                  │                             │
//! │                      │ NO I/O • PURE    │                             │
//! │                      └──────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (Product, category filtering)
//! - [`cart`] - The cart, its mutation operations, and aggregation
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation and the checkout guard
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use satchel_core::cart::Cart;
//! use satchel_core::types::Product;
//!
//! let tote = Product {
//!     id: 1,
//!     name: "Tote".into(),
//!     description: "Everyday carry".into(),
//!     price_cents: 10100, // R101.00
//!     image_path: "images/tote.jpg".into(),
//!     category: "Mini Bags".into(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_product(&tote).unwrap();
//! cart.add_product(&tote).unwrap();
//!
//! assert_eq!(cart.item_count(), 1);      // merged by id
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(format!("{}", cart.subtotal()), "R202.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use satchel_core::Money` instead of
// `use satchel_core::money::Money`

pub use cart::{Cart, CartItem, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{filter_by_category, Product};
pub use validation::CheckoutForm;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct line items allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps the order payload bounded.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Minor units per major unit: cents per rand.
pub const CENTS_PER_RAND: i64 = 100;
