//! # Store Error Types
//!
//! Error types for cart slot operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI surfaces a message, or satchel-api wraps it in ApiError            │
//! │                                                                         │
//! │  NOTE: decode failures on load never reach here; load() recovers        │
//! │  to the empty cart instead (see lib.rs).                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Cart slot operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed while saving or clearing the slot.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - Disk full or permissions issue on save
    /// - Slot removal failed for a reason other than absence
    #[error("Cart slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Cart could not be serialized for the slot.
    #[error("Cart serialization failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// No per-user data directory could be determined on this platform.
    #[error("No application data directory available")]
    NoDataDir,
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
