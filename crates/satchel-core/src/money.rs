//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Repeatedly adding and removing cart lines with float prices drifts.    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    R101.00 is stored as 10100 cents. Every sum is exact.                │
//! │    Floats exist ONLY at the wire boundary, with explicit rounding.      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use satchel_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(10100); // R101.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                        // R202.00
//! let total = price + Money::from_cents(2550);    // R126.50
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents (the smallest Rand unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money flows
/// ```text
/// Product.price_cents ──► CartItem.unit_price_cents ──► line_total_cents
///                                                            │
///                        Cart.subtotal_cents ◄──────────────┘
///                                 │
///                        Displayed as "R101.00" in the CLI
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// let price = Money::from_cents(10100); // Represents R101.00
    /// assert_eq!(price.cents(), 10100);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (rand and cents).
    ///
    /// ## Example
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// let price = Money::from_major_minor(101, 50); // R101.50
    /// assert_eq!(price.cents(), 10150);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -R5.50, not -R4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Converts a major-unit float (e.g. `101.0` for R101.00) to Money.
    ///
    /// The backend's wire format carries prices and profit as floats in major
    /// units. This is the ONLY place that conversion happens; rounding is
    /// half-away-from-zero to the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// assert_eq!(Money::from_rand_f64(101.0).cents(), 10100);
    /// assert_eq!(Money::from_rand_f64(50.005).cents(), 5001);
    /// ```
    #[inline]
    pub fn from_rand_f64(rand: f64) -> Self {
        Money((rand * 100.0).round() as i64)
    }

    /// Converts to a major-unit float for the backend's wire format.
    ///
    /// ## Example
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(10100).to_rand_f64(), 101.0);
    /// ```
    #[inline]
    pub fn to_rand_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rand) portion.
    ///
    /// ## Example
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(10150).rand(), 101);
    /// assert_eq!(Money::from_cents(-550).rand(), -5);
    /// ```
    #[inline]
    pub const fn rand(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use satchel_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(10100); // R101.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 20200); // R202.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money the way the storefront does: `R101.00`.
///
/// Two decimal places always, sign before the symbol for negative values.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}R{}.{:02}", sign, self.rand().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
