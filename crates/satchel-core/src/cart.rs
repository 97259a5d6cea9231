//! # Cart
//!
//! The shopping cart and its mutation operations.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cart Mutation Cycle                                 │
//! │                                                                         │
//! │  The persisted slot owns the cart. No component keeps a private copy    │
//! │  across operations. Every mutation is:                                   │
//! │                                                                         │
//! │     store.load() ──► Cart (this module) ──► mutate ──► store.save()     │
//! │                                                                         │
//! │  add       ──► add_product()       merge-by-id, +1 quantity             │
//! │  update    ──► update_quantity()   positional; 0 removes the line       │
//! │  remove    ──► remove_item()       positional                           │
//! │  clear     ──► (store.clear())     slot removed entirely                │
//! │                                                                         │
//! │  No locking between writers: last save wins.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// One distinct product entry in the cart with an associated quantity.
///
/// ## Design Notes
/// - Snapshots `name` and unit price at add time, so the cart displays
///   consistent data even if the catalog changes under it.
/// - Price is kept in cents; the backend's major-unit float appears only
///   at the wire boundary in satchel-api.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Catalog id of the product this line refers to.
    pub product_id: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart. Invariant: always >= 1.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a line item from a catalog product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line subtotal (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Line subtotal as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of line items.
///
/// ## Invariants
/// - At most one line item per distinct `product_id`
/// - Every line has quantity >= 1; an update to 0 removes the line
/// - Insertion order = order in which distinct products were first added,
///   stable across merges and quantity updates
/// - Maximum lines: [`MAX_CART_ITEMS`]; maximum quantity: [`MAX_ITEM_QUANTITY`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Line items, in first-add order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from persisted line items.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// Adds a product to the cart (merge-by-id).
    ///
    /// ## Behavior
    /// - If a line with the same product id exists: its quantity grows by 1
    /// - Otherwise: a new line with quantity 1 is appended, snapshotting
    ///   id, name, and unit price from the product
    pub fn add_product(&mut self, product: &Product) -> CoreResult<()> {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            let new_qty = item.quantity + 1;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_product(product));
        Ok(())
    }

    /// Sets the quantity of the line at the given position.
    ///
    /// ## Behavior
    /// - Quantity 0 removes the line (a line never sits at quantity 0)
    /// - Negative quantity is a validation error
    /// - An out-of-range index is a precondition violation, not a no-op
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> CoreResult<()> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }

        if quantity == 0 {
            self.items.remove(index);
            return Ok(());
        }

        if quantity < 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        self.items[index].quantity = quantity;
        Ok(())
    }

    /// Removes exactly one line item at the given position.
    ///
    /// Returns the removed line so callers can confirm what went away.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<CartItem> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }

        Ok(self.items.remove(index))
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines ("Total Items").
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the cart subtotal in cents ("Total Price").
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Cart subtotal as Money.
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: String::new(),
            price_cents,
            image_path: format!("images/{}.jpg", id),
            category: "Mini Bags".to_string(),
        }
    }

    #[test]
    fn test_add_product_new_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add_product(&product).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.items[0].name, "Product 1");
        assert_eq!(cart.items[0].unit_price_cents, 999);
    }

    #[test]
    fn test_add_same_product_merges_by_id() {
        let mut cart = Cart::new();
        let tote = Product {
            id: 1,
            name: "Tote".to_string(),
            description: String::new(),
            price_cents: 10100, // R101.00
            image_path: "images/tote.jpg".to_string(),
            category: "Mini Bags".to_string(),
        };

        cart.add_product(&tote).unwrap();
        cart.add_product(&tote).unwrap();

        // One line, quantity 2, total R202.00
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.subtotal_cents(), 20200);
        assert_eq!(format!("{}", cart.subtotal()), "R202.00");
    }

    #[test]
    fn test_one_line_per_distinct_id() {
        let mut cart = Cart::new();
        let a = test_product(1, 100);
        let b = test_product(2, 200);

        for _ in 0..3 {
            cart.add_product(&a).unwrap();
        }
        cart.add_product(&b).unwrap();
        cart.add_product(&a).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.items[0].quantity, 4);
        assert_eq!(cart.items[1].quantity, 1);
        // First-add order survives the late merge into line 0.
        assert_eq!(cart.items[0].product_id, 1);
        assert_eq!(cart.items[1].product_id, 2);
    }

    #[test]
    fn test_totals_match_itemwise_sums() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 999)).unwrap();
        cart.add_product(&test_product(2, 2500)).unwrap();
        cart.update_quantity(1, 3).unwrap();

        let expected_qty: i64 = cart.items.iter().map(|i| i.quantity).sum();
        let expected_total: i64 = cart
            .items
            .iter()
            .map(|i| i.unit_price_cents * i.quantity)
            .sum();

        assert_eq!(cart.total_quantity(), expected_qty);
        assert_eq!(cart.subtotal_cents(), expected_total);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.total_quantity, expected_qty);
        assert_eq!(totals.subtotal_cents, expected_total);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 999)).unwrap();
        cart.add_product(&test_product(2, 500)).unwrap();

        cart.update_quantity(0, 0).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].product_id, 2);
    }

    #[test]
    fn test_update_quantity_negative_rejected() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 999)).unwrap();

        let err = cart.update_quantity(0, -1).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        // Cart unchanged
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_positional_out_of_range_is_typed_error() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 999)).unwrap();

        let err = cart.update_quantity(5, 2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::IndexOutOfBounds { index: 5, len: 1 }
        ));

        let err = cart.remove_item(1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::IndexOutOfBounds { index: 1, len: 1 }
        ));
    }

    #[test]
    fn test_remove_item_returns_line() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 999)).unwrap();
        cart.add_product(&test_product(2, 500)).unwrap();

        let removed = cart.remove_item(0).unwrap();
        assert_eq!(removed.product_id, 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 999)).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_cents(), 0);
    }

    #[test]
    fn test_quantity_cap() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 999)).unwrap();

        let err = cart.update_quantity(0, MAX_ITEM_QUANTITY + 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));

        cart.update_quantity(0, MAX_ITEM_QUANTITY).unwrap();
        let err = cart.add_product(&test_product(1, 999)).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
    }

    #[test]
    fn test_persisted_shape_is_camel_case() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 999)).unwrap();

        let json = serde_json::to_value(&cart.items).unwrap();
        let line = &json[0];
        assert_eq!(line["productId"], 1);
        assert_eq!(line["unitPriceCents"], 999);
        assert_eq!(line["quantity"], 1);
    }
}
