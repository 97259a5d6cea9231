//! # CLI Error Type
//!
//! Thin wrapper over the library errors so `run` has one error type and
//! `main` one exit path.
//!
//! User-facing messages are printed by the command handlers at the moment
//! they know the context (apology line, retry line, confirmation). What
//! flows through here is the typed error for logging and the exit code.

use thiserror::Error;

use satchel_api::ApiError;
use satchel_core::CoreError;
use satchel_store::StoreError;

/// Errors surfaced by the `satchel` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Convenience type alias for CLI command results.
pub type CliResult<T> = Result<T, CliError>;
