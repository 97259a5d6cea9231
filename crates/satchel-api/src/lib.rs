//! # satchel-api: Storefront API Client
//!
//! Everything that talks to the storefront backend lives here: the catalog
//! fetch, the sale submission, the wire DTOs pinned to the backend's JSON
//! contract, and the checkout state machine that orchestrates a submission
//! against the persisted cart slot.
//!
//! ## Module Organization
//! ```text
//! satchel_api/
//! ├── lib.rs       ◄─── You are here (exports)
//! ├── config.rs    ◄─── Endpoint configuration (env over defaults)
//! ├── client.rs    ◄─── StorefrontClient: GET /api/products, POST /api/sale
//! ├── wire.rs      ◄─── SaleRequest / SaleLineItem / SaleResult DTOs
//! ├── checkout.rs  ◄─── Editing → Submitting → Succeeded | Failed
//! └── error.rs     ◄─── ApiError taxonomy
//! ```
//!
//! ## The Two Suspension Points
//! The whole system suspends in exactly two places, both in this crate:
//! awaiting the catalog response and awaiting the sale response. Everything
//! upstream (cart math) and downstream (the slot) is synchronous.

pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod wire;

#[cfg(test)]
mod testing;

pub use checkout::{Checkout, CheckoutOutcome, CheckoutState};
pub use client::StorefrontClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use wire::{SaleLineItem, SaleRequest, SaleResult};
