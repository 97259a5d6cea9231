//! # Checkout Command

use tracing::info;

use satchel_api::{Checkout, CheckoutOutcome, StorefrontClient};
use satchel_core::CheckoutForm;
use satchel_store::CartStore;

use crate::error::CliResult;

/// `satchel checkout --name NAME --address ADDRESS`
///
/// One submission attempt. The three user-visible endings mirror the
/// storefront exactly:
/// - guard rejection: the "complete all fields" line, cart untouched
/// - success: the profit line, cart slot now empty
/// - failure: the retry line, cart preserved, non-zero exit
pub async fn run(
    client: &StorefrontClient,
    store: &CartStore,
    name: String,
    address: String,
) -> CliResult<()> {
    let mut checkout = Checkout::new(CheckoutForm::new(name, address));

    match checkout.submit(client, store).await {
        Ok(CheckoutOutcome::Completed { profit }) => {
            println!("Sale recorded! Profit: {}", profit);
            Ok(())
        }
        Ok(CheckoutOutcome::Rejected(reason)) => {
            info!(%reason, "checkout rejected");
            println!("Please complete all fields and ensure cart is not empty.");
            Ok(())
        }
        Err(err) => {
            println!("Error processing your order. Please try again.");
            Err(err.into())
        }
    }
}
