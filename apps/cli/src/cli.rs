//! # Command-Line Interface
//!
//! One subcommand per storefront action: category listings, add-to-cart,
//! the cart view with its quantity/remove/clear controls, and the checkout
//! form.

use clap::{Parser, Subcommand};

/// Satchel: a command-line storefront client.
#[derive(Parser, Debug)]
#[command(name = "satchel")]
#[command(about = "Browse the catalog, manage a persisted cart, check out")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List products, optionally restricted to one category
    Catalog {
        /// Category name, e.g. "Mini Bags" or "Backpacks"
        #[arg(long)]
        category: Option<String>,
    },

    /// Add a product to the cart by catalog id
    Add {
        /// Catalog id of the product
        product_id: i64,
    },

    /// Show the cart with per-line subtotals and totals
    Cart,

    /// Set the quantity of a cart line (0 removes the line)
    Update {
        /// Line number as shown by `satchel cart` (1-based)
        line: usize,
        /// New quantity
        quantity: i64,
    },

    /// Remove a cart line
    Remove {
        /// Line number as shown by `satchel cart` (1-based)
        line: usize,
    },

    /// Empty the cart entirely
    Clear,

    /// Validate the form and submit the cart as an order
    Checkout {
        /// Customer name
        #[arg(long)]
        name: String,
        /// Delivery address
        #[arg(long)]
        address: String,
    },
}
