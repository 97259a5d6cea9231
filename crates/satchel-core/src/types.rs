//! # Domain Types
//!
//! Catalog-side domain types for Satchel.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐         ┌─────────────────┐                        │
//! │  │    Product      │         │    CartItem     │  (cart.rs)             │
//! │  │  ─────────────  │  add    │  ─────────────  │                        │
//! │  │  id (i64)       │ ──────► │  product_id     │                        │
//! │  │  name           │         │  name snapshot  │                        │
//! │  │  price_cents    │         │  unit price     │                        │
//! │  │  category       │         │  quantity       │                        │
//! │  └─────────────────┘         └─────────────────┘                        │
//! │                                                                         │
//! │  The catalog is READ-ONLY to the core: products come off the wire       │
//! │  and are never mutated. The cart snapshots what it needs from them.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the remote catalog.
///
/// Field names are pinned to the catalog wire format, which predates this
/// implementation: the endpoint sends `price` (integer cents) and `image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: i64,

    /// Display name shown in listings and the cart.
    pub name: String,

    /// Short description for the product card.
    pub description: String,

    /// Price in cents (smallest currency unit).
    #[serde(rename = "price")]
    pub price_cents: i64,

    /// Path to the product image, relative to the storefront assets.
    #[serde(rename = "image")]
    pub image_path: String,

    /// Category name, e.g. "Mini Bags" or "Backpacks".
    pub category: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the product belongs to the given category.
    #[inline]
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

/// Filters a loaded catalog down to one category, preserving catalog order.
///
/// The catalog is passed in explicitly; nothing in the core holds it as
/// ambient state. Callers fetch once and thread the slice through.
pub fn filter_by_category<'a>(catalog: &'a [Product], category: &str) -> Vec<&'a Product> {
    catalog.iter().filter(|p| p.in_category(category)).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, category: &str) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: String::new(),
            price_cents: 10100,
            image_path: "images/p.jpg".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_price_as_money() {
        let p = product(1, "Mini Bags");
        assert_eq!(p.price(), Money::from_cents(10100));
        assert_eq!(format!("{}", p.price()), "R101.00");
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let catalog = vec![
            product(1, "Mini Bags"),
            product(2, "Backpacks"),
            product(3, "Mini Bags"),
        ];

        let minis = filter_by_category(&catalog, "Mini Bags");
        assert_eq!(minis.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

        assert!(filter_by_category(&catalog, "Travel Bags").is_empty());
    }

    #[test]
    fn test_wire_field_names() {
        // The catalog endpoint sends `price` and `image`, not our field names.
        let json = r#"{
            "id": 1,
            "name": "Tote",
            "description": "A tote bag",
            "price": 10100,
            "image": "images\\tote.jpg",
            "category": "Mini Bags"
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.price_cents, 10100);
        assert_eq!(p.image_path, "images\\tote.jpg");
    }
}
