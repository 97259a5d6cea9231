//! # Command Handlers
//!
//! Thin orchestration per subcommand:
//! - [`catalog`] - fetch and render product listings
//! - [`cart`] - the load → mutate → save cycle against the slot
//! - [`checkout`] - drive the checkout state machine and surface the outcome

pub mod cart;
pub mod catalog;
pub mod checkout;
