//! # Cart Commands
//!
//! Every handler here is one full read-modify-write cycle against the
//! slot: load, mutate through satchel-core, save. Nothing holds a cart
//! across commands; the slot is the single owner.

use tracing::debug;

use satchel_api::StorefrontClient;
use satchel_core::CoreError;
use satchel_store::CartStore;

use crate::commands::catalog::fetch_catalog;
use crate::error::CliResult;
use crate::render;

/// Maps a 1-based display line number to a cart index, range-checked
/// against the current cart so the error speaks the user's numbering.
fn line_to_index(line: usize, len: usize) -> Result<usize, CoreError> {
    match line.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(CoreError::IndexOutOfBounds { index: line, len }),
    }
}

/// `satchel add <PRODUCT_ID>`
pub async fn add(client: &StorefrontClient, store: &CartStore, product_id: i64) -> CliResult<()> {
    let catalog = fetch_catalog(client).await?;
    let product = catalog
        .iter()
        .find(|p| p.id == product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;

    let mut cart = store.load();
    cart.add_product(product)?;
    store.save(&cart)?;

    println!("{} added to cart!", product.name);
    Ok(())
}

/// `satchel cart`
pub fn show(store: &CartStore) -> CliResult<()> {
    println!("{}", render::cart_view(&store.load()));
    Ok(())
}

/// `satchel update <LINE> <QTY>`
pub fn update(store: &CartStore, line: usize, quantity: i64) -> CliResult<()> {
    let mut cart = store.load();
    let index = line_to_index(line, cart.item_count())?;
    cart.update_quantity(index, quantity)?;
    store.save(&cart)?;

    debug!(line, quantity, "cart line updated");
    println!("{}", render::cart_view(&cart));
    Ok(())
}

/// `satchel remove <LINE>`
pub fn remove(store: &CartStore, line: usize) -> CliResult<()> {
    let mut cart = store.load();
    let index = line_to_index(line, cart.item_count())?;
    let removed = cart.remove_item(index)?;
    store.save(&cart)?;

    println!("{} removed from cart.", removed.name);
    println!("{}", render::cart_view(&cart));
    Ok(())
}

/// `satchel clear`
pub fn clear(store: &CartStore) -> CliResult<()> {
    store.clear()?;
    println!("Your cart is empty.");
    Ok(())
}
