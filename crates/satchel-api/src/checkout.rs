//! # Checkout
//!
//! The checkout submission state machine.
//!
//! ## States & Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout State Machine                               │
//! │                                                                         │
//! │              guard fails (form/cart invalid, NO network call)           │
//! │             ┌───────────────┐                                           │
//! │             ▼               │                                           │
//! │        ┌─────────┐  guard ok  ┌────────────┐                            │
//! │        │ Editing │ ─────────► │ Submitting │                            │
//! │        └─────────┘            └─────┬──────┘                            │
//! │             ▲                       │                                   │
//! │             │            ┌──────────┴──────────┐                        │
//! │   manual    │            ▼                     ▼                        │
//! │   resubmit  │      ┌───────────┐        ┌────────────┐                  │
//! │             └───── │  Failed   │        │ Succeeded  │ (terminal)       │
//! │                    └───────────┘        └────────────┘                  │
//! │                    cart preserved       cart slot cleared,              │
//! │                    retry message        profit surfaced                 │
//! │                                                                         │
//! │  No automatic retry from Failed: the user resubmits, which re-runs      │
//! │  the Editing → Submitting transition against the current slot value.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use satchel_core::validation::validate_checkout;
use satchel_core::{CheckoutForm, Money, ValidationError};
use satchel_store::CartStore;

use crate::client::StorefrontClient;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// State & Outcome
// =============================================================================

/// Where a checkout currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    /// Form being edited; nothing sent. The initial state.
    Editing,
    /// Request in flight; re-entry is rejected.
    Submitting,
    /// Terminal: sale recorded, cart slot cleared.
    Succeeded { profit: Money },
    /// Sale rejected or unreachable; cart preserved for manual retry.
    Failed,
}

/// What a single `submit` call produced, when it didn't error outright.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// The guard blocked submission; state stays Editing, no network call.
    Rejected(ValidationError),
    /// The sale was recorded and the cart slot cleared.
    Completed { profit: Money },
}

// =============================================================================
// Checkout
// =============================================================================

/// A checkout attempt: one form, one state.
#[derive(Debug)]
pub struct Checkout {
    form: CheckoutForm,
    state: CheckoutState,
}

impl Checkout {
    /// Starts a checkout in the Editing state.
    pub fn new(form: CheckoutForm) -> Self {
        Checkout {
            form,
            state: CheckoutState::Editing,
        }
    }

    /// Current state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Runs one submission attempt.
    ///
    /// ## Behavior
    /// - Re-reads the cart from the slot (the slot owns the cart; no stale
    ///   in-memory copy is trusted).
    /// - Guard failure: returns `Ok(Rejected)`, state back to Editing, and
    ///   **no request is made**.
    /// - Endpoint success: clears the slot, state Succeeded, returns
    ///   `Ok(Completed)` with the profit.
    /// - Endpoint failure (status, transport, timeout, decode): state
    ///   Failed, cart untouched, the error propagates for surfacing.
    ///
    /// Calling from Failed is the manual retry; calling from Submitting or
    /// Succeeded is a caller bug and returns a typed error.
    pub async fn submit(
        &mut self,
        client: &StorefrontClient,
        store: &CartStore,
    ) -> ApiResult<CheckoutOutcome> {
        match self.state {
            CheckoutState::Editing | CheckoutState::Failed => {}
            CheckoutState::Submitting => return Err(ApiError::AlreadySubmitting),
            CheckoutState::Succeeded { .. } => return Err(ApiError::AlreadyCompleted),
        }

        let cart = store.load();

        if let Err(reason) = validate_checkout(&self.form, &cart) {
            info!(%reason, "checkout blocked by validation");
            self.state = CheckoutState::Editing;
            return Ok(CheckoutOutcome::Rejected(reason));
        }

        self.state = CheckoutState::Submitting;

        match client.submit_sale(&cart).await {
            Ok(result) => {
                let profit = result.profit();
                self.state = CheckoutState::Succeeded { profit };
                // The sale is recorded remotely; clearing the slot comes
                // after the state flip so a clear failure cannot demote a
                // recorded sale to Failed.
                store.clear()?;
                info!(%profit, "checkout succeeded, cart cleared");
                Ok(CheckoutOutcome::Completed { profit })
            }
            Err(err) => {
                warn!(%err, "checkout failed, cart preserved");
                self.state = CheckoutState::Failed;
                Err(err)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::testing::{serve, HitCounter};
    use axum::routing::post;
    use axum::{Json, Router};
    use satchel_core::{Cart, Product};
    use tempfile::tempdir;

    fn tote() -> Product {
        Product {
            id: 1,
            name: "Tote".to_string(),
            description: String::new(),
            price_cents: 10100,
            image_path: "images/tote.jpg".to_string(),
            category: "Mini Bags".to_string(),
        }
    }

    fn seeded_store(dir: &tempfile::TempDir) -> CartStore {
        let store = CartStore::new(dir.path().join("cart.json"));
        let mut cart = Cart::new();
        cart.add_product(&tote()).unwrap();
        store.save(&cart).unwrap();
        store
    }

    fn sale_router(hits: HitCounter, profit: f64) -> Router {
        Router::new().route(
            "/api/sale",
            post(move || async move {
                hits.bump();
                Json(serde_json::json!({ "profit": profit }))
            }),
        )
    }

    #[tokio::test]
    async fn test_blank_name_blocks_without_network() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);
        let hits = HitCounter::default();
        let base = serve(sale_router(hits.clone(), 50.0)).await;
        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();

        let mut checkout = Checkout::new(CheckoutForm::new("   ", "12 Main Rd"));
        let outcome = checkout.submit(&client, &store).await.unwrap();

        assert!(matches!(outcome, CheckoutOutcome::Rejected(_)));
        assert_eq!(*checkout.state(), CheckoutState::Editing);
        // No network call was made and the cart is unchanged.
        assert_eq!(hits.count(), 0);
        assert_eq!(store.load().total_quantity(), 1);
    }

    #[tokio::test]
    async fn test_empty_cart_blocks_without_network() {
        let dir = tempdir().unwrap();
        let store = CartStore::new(dir.path().join("cart.json"));
        let hits = HitCounter::default();
        let base = serve(sale_router(hits.clone(), 50.0)).await;
        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();

        let mut checkout = Checkout::new(CheckoutForm::new("Thandi M", "12 Main Rd"));
        let outcome = checkout.submit(&client, &store).await.unwrap();

        assert!(matches!(
            outcome,
            CheckoutOutcome::Rejected(ValidationError::EmptyCart)
        ));
        assert_eq!(hits.count(), 0);
    }

    #[tokio::test]
    async fn test_success_clears_cart_and_surfaces_profit() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);
        let hits = HitCounter::default();
        let base = serve(sale_router(hits.clone(), 50.0)).await;
        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();

        let mut checkout = Checkout::new(CheckoutForm::new("Thandi M", "12 Main Rd"));
        let outcome = checkout.submit(&client, &store).await.unwrap();

        match outcome {
            CheckoutOutcome::Completed { profit } => {
                assert_eq!(format!("{}", profit), "R50.00");
            }
            other => panic!("expected Completed, got {:?}", other),
        }
        assert!(matches!(
            checkout.state(),
            CheckoutState::Succeeded { profit } if format!("{}", profit) == "R50.00"
        ));
        // The slot holds no cart on next load.
        assert!(store.load().is_empty());
    }

    #[tokio::test]
    async fn test_failure_preserves_cart_and_allows_retry() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);
        let app = Router::new().route(
            "/api/sale",
            post(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "down") }),
        );
        let base = serve(app).await;
        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();

        let mut checkout = Checkout::new(CheckoutForm::new("Thandi M", "12 Main Rd"));
        let err = checkout.submit(&client, &store).await.unwrap_err();

        assert!(matches!(err, ApiError::SaleStatus { status: 500 }));
        assert_eq!(*checkout.state(), CheckoutState::Failed);
        // Cart intact: the user may retry without re-entering items.
        assert_eq!(store.load().total_quantity(), 1);

        // Manual resubmission against a healthy endpoint succeeds.
        let hits = HitCounter::default();
        let base = serve(sale_router(hits.clone(), 12.5)).await;
        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();
        let outcome = checkout.submit(&client, &store).await.unwrap();

        assert!(matches!(outcome, CheckoutOutcome::Completed { .. }));
        assert!(store.load().is_empty());
    }

    #[tokio::test]
    async fn test_resubmit_after_success_is_rejected() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);
        let hits = HitCounter::default();
        let base = serve(sale_router(hits.clone(), 50.0)).await;
        let client = StorefrontClient::new(&ApiConfig::with_base_url(base)).unwrap();

        let mut checkout = Checkout::new(CheckoutForm::new("Thandi M", "12 Main Rd"));
        checkout.submit(&client, &store).await.unwrap();

        let err = checkout.submit(&client, &store).await.unwrap_err();
        assert!(matches!(err, ApiError::AlreadyCompleted));
        assert_eq!(hits.count(), 1);
    }
}
