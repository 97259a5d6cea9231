//! # Satchel Command-Line Storefront
//!
//! Entry point for the `satchel` binary.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, writing to stderr             │
//! │     • Default: WARN (stdout is for storefront output), RUST_LOG         │
//! │       overrides                                                         │
//! │                                                                         │
//! │  2. Open the Cart Slot ───────────────────────────────────────────────► │
//! │     • SATCHEL_CART_PATH, else the platform app-data dir                 │
//! │     • Linux: ~/.local/share/satchel/cart.json                           │
//! │                                                                         │
//! │  3. Build the API Client (network commands only) ─────────────────────► │
//! │     • SATCHEL_API_URL, else http://127.0.0.1:3000                       │
//! │     • 30s timeout on both endpoints                                     │
//! │                                                                         │
//! │  4. Dispatch the Subcommand ──────────────────────────────────────────► │
//! │     • handlers print user-facing lines to stdout                        │
//! │     • errors log to stderr and exit 1                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod commands;
mod error;
mod render;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use satchel_api::{ApiConfig, StorefrontClient};
use satchel_store::CartStore;

use cli::{Cli, Command};
use error::CliResult;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        error!(%err, "command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let store = CartStore::open_default()?;

    match cli.command {
        Command::Catalog { category } => {
            let client = client()?;
            commands::catalog::run(&client, category.as_deref()).await
        }
        Command::Add { product_id } => {
            let client = client()?;
            commands::cart::add(&client, &store, product_id).await
        }
        Command::Cart => commands::cart::show(&store),
        Command::Update { line, quantity } => commands::cart::update(&store, line, quantity),
        Command::Remove { line } => commands::cart::remove(&store, line),
        Command::Clear => commands::cart::clear(&store),
        Command::Checkout { name, address } => {
            let client = client()?;
            commands::checkout::run(&client, &store, name, address).await
        }
    }
}

fn client() -> CliResult<StorefrontClient> {
    Ok(StorefrontClient::new(&ApiConfig::from_env())?)
}
