//! # Catalog Command

use tracing::error;

use satchel_api::StorefrontClient;
use satchel_core::Product;

use crate::error::CliResult;
use crate::render;

/// Fetches the catalog, surfacing a load failure once with the storefront
/// apology line. Shared by every command that needs products.
pub async fn fetch_catalog(client: &StorefrontClient) -> CliResult<Vec<Product>> {
    match client.fetch_products().await {
        Ok(products) => Ok(products),
        Err(err) => {
            error!(%err, "catalog load failed");
            println!("Sorry, we couldn't load products at this time.");
            Err(err.into())
        }
    }
}

/// `satchel catalog [--category NAME]`
pub async fn run(client: &StorefrontClient, category: Option<&str>) -> CliResult<()> {
    let products = fetch_catalog(client).await?;
    println!("{}", render::catalog_listing(&products, category));
    Ok(())
}
