//! # Wire Format
//!
//! DTOs pinned to the storefront backend's JSON contract. The backend
//! predates this client, so the shapes here are not negotiable:
//!
//! ```text
//! POST /api/sale
//!   → {"cartItems": [{"id": 1, "name": "Tote", "price": 101.0, "quantity": 2}]}
//!   ← {"profit": 50.0}
//! ```
//!
//! `price` and `profit` travel as floats in MAJOR units (rand). Internally
//! everything is integer cents; the conversion happens here and only here,
//! through the `Money` float bridge.

use serde::{Deserialize, Serialize};

use satchel_core::{Cart, CartItem, Money};

// =============================================================================
// Sale Request
// =============================================================================

/// The order payload: the full cart as the backend expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequest {
    pub cart_items: Vec<SaleLineItem>,
}

impl SaleRequest {
    /// Serializes a cart into the backend's order payload.
    pub fn from_cart(cart: &Cart) -> Self {
        SaleRequest {
            cart_items: cart.items.iter().map(SaleLineItem::from).collect(),
        }
    }
}

/// One cart line on the wire. `price` is the unit price in major units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLineItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl From<&CartItem> for SaleLineItem {
    fn from(item: &CartItem) -> Self {
        SaleLineItem {
            id: item.product_id,
            name: item.name.clone(),
            price: item.unit_price().to_rand_f64(),
            quantity: item.quantity,
        }
    }
}

// =============================================================================
// Sale Result
// =============================================================================

/// Successful sale response: the profit figure in major units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleResult {
    pub profit: f64,
}

impl SaleResult {
    /// The profit as exact Money, rounded to the nearest cent.
    pub fn profit(&self) -> Money {
        Money::from_rand_f64(self.profit)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::Product;

    #[test]
    fn test_sale_request_shape() {
        let mut cart = Cart::new();
        let tote = Product {
            id: 1,
            name: "Tote".to_string(),
            description: String::new(),
            price_cents: 10100,
            image_path: "images/tote.jpg".to_string(),
            category: "Mini Bags".to_string(),
        };
        cart.add_product(&tote).unwrap();
        cart.add_product(&tote).unwrap();

        let request = SaleRequest::from_cart(&cart);
        let json = serde_json::to_value(&request).unwrap();

        // Exact backend shape: cartItems, unit price in major units.
        let line = &json["cartItems"][0];
        assert_eq!(line["id"], 1);
        assert_eq!(line["name"], "Tote");
        assert_eq!(line["price"], 101.0);
        assert_eq!(line["quantity"], 2);
    }

    #[test]
    fn test_sale_result_profit_as_money() {
        let result: SaleResult = serde_json::from_str(r#"{"profit": 50.0}"#).unwrap();
        assert_eq!(result.profit(), Money::from_cents(5000));
        assert_eq!(format!("{}", result.profit()), "R50.00");
    }
}
