//! # Rendering
//!
//! Pure presentation functions: every view the storefront has, as a
//! `String` builder with no I/O. The command layer prints; nothing here
//! touches the terminal, the slot, or the network, so all of it is
//! unit-testable.
//!
//! ## Views
//! ```text
//! catalog_listing  product cards, optionally one category   (category page)
//! cart_view        numbered lines + totals                  (cart page)
//! ```

use satchel_core::{filter_by_category, Cart, Product};

/// Renders one product card.
///
/// Image paths in the catalog sometimes arrive with backslashes; they are
/// normalized to forward slashes for display.
pub fn product_card(product: &Product) -> String {
    format!(
        "[{}] {}\n    {}\n    {}  (image: {})",
        product.id,
        product.name,
        product.description,
        product.price(),
        product.image_path.replace('\\', "/"),
    )
}

/// Renders the catalog, optionally restricted to one category.
pub fn catalog_listing(catalog: &[Product], category: Option<&str>) -> String {
    let selected: Vec<&Product> = match category {
        Some(name) => filter_by_category(catalog, name),
        None => catalog.iter().collect(),
    };

    if selected.is_empty() {
        return match category {
            Some(name) => format!("No products in {}.", name),
            None => "No products available.".to_string(),
        };
    }

    let mut out = String::new();
    if let Some(name) = category {
        out.push_str(name);
        out.push('\n');
        out.push('\n');
    }
    for (i, product) in selected.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&product_card(product));
        out.push('\n');
    }
    out
}

/// Renders the cart view: numbered lines, then the totals summary.
pub fn cart_view(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut out = String::new();
    for (i, item) in cart.items.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}  {} x {} = {}\n",
            i + 1,
            item.name,
            item.unit_price(),
            item.quantity,
            item.line_total(),
        ));
    }
    out.push_str(&format!("Total Items: {}\n", cart.total_quantity()));
    out.push_str(&format!("Total Price: {}", cart.subtotal()));
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
