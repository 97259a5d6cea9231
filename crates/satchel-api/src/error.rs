//! # API Error Types
//!
//! Error types for the storefront API client and the checkout flow.
//!
//! ## Taxonomy Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Taxonomy                                      │
//! │                                                                         │
//! │  Catalog load failure (fatal to page init, surfaced once)               │
//! │  ├── CatalogStatus   - non-success status from GET /api/products        │
//! │  └── Http            - transport failure / undecodable body             │
//! │                                                                         │
//! │  Sale submission failure (recovered to Failed, cart preserved)          │
//! │  ├── SaleStatus      - non-success status from POST /api/sale           │
//! │  └── Http            - transport failure, timeout, undecodable body     │
//! │                                                                         │
//! │  Checkout misuse (programming error at the call site)                   │
//! │  ├── AlreadySubmitting                                                  │
//! │  └── AlreadyCompleted                                                   │
//! │                                                                         │
//! │  Store(StoreError)   - clearing the slot after a recorded sale failed   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use satchel_store::StoreError;

/// Storefront API and checkout errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The catalog endpoint answered with a non-success status.
    #[error("Catalog request failed with status {status}")]
    CatalogStatus { status: u16 },

    /// The sale endpoint answered with a non-success status.
    #[error("Sale submission failed with status {status}")]
    SaleStatus { status: u16 },

    /// Transport-level failure: connection, timeout, or undecodable body.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The persisted cart slot failed while completing a checkout.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// `submit` called while a submission is already in flight.
    #[error("Checkout is already submitting")]
    AlreadySubmitting,

    /// `submit` called after the checkout already succeeded.
    #[error("Checkout already completed")]
    AlreadyCompleted,
}

impl ApiError {
    /// True for failures of the initial catalog load.
    pub fn is_catalog_failure(&self) -> bool {
        matches!(self, ApiError::CatalogStatus { .. })
    }
}

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;
