//! # Cart
//!
//! The shopping cart and its reducer.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Reducer                                         │
//! │                                                                         │
//! │  previous Cart ──► apply(CartAction) ──► next Cart  (or CoreError)      │
//! │                                                                         │
//! │  Add { product, qty } ────────► line.qty += qty  | push new line        │
//! │  UpdateQuantity { id, qty } ──► qty ≤ 0 → Remove                        │
//! │                                 qty > stock → InsufficientStock         │
//! │                                 else line.qty = qty                     │
//! │  Remove { id } ───────────────► drop line (no-op if absent)             │
//! │  Clear ───────────────────────► empty                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `apply` never touches `self`: a rejected action leaves the previous cart
//! exactly as it was, and repeated actions can't lose updates.
//!
//! `Add` does not look at stock. Callers run [`crate::stock::ensure_can_add`]
//! first.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::stock::ensure_within_stock;
use crate::types::{CartItem, Product};
use crate::validation::validate_quantity;

/// A mutation request for the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add `quantity` units of `product` (snapshot).
    Add { product: Product, quantity: i64 },
    /// Set a line's quantity to exactly `quantity`.
    UpdateQuantity { product_id: String, quantity: i64 },
    /// Drop a line.
    Remove { product_id: String },
    /// Empty the cart.
    Clear,
}

impl CartAction {
    pub fn add(product: &Product, quantity: i64) -> Self {
        CartAction::Add {
            product: product.clone(),
            quantity,
        }
    }

    pub fn update_quantity(product_id: impl Into<String>, quantity: i64) -> Self {
        CartAction::UpdateQuantity {
            product_id: product_id.into(),
            quantity,
        }
    }

    pub fn remove(product_id: impl Into<String>) -> Self {
        CartAction::Remove {
            product_id: product_id.into(),
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product again
///   increases its quantity)
/// - Every line has quantity ≥ 1
///
/// Serializes as a bare array of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from raw lines, restoring the invariants: duplicate
    /// product ids are merged and non-positive quantities dropped.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Cart::new();
        for item in items.into_iter().filter(|i| i.quantity > 0) {
            cart.add_in_place(item.product, item.quantity);
        }
        cart
    }

    /// Applies an action and returns the resulting cart.
    ///
    /// ## Errors
    /// - `Validation` when `Add` carries a quantity below 1
    /// - `InsufficientStock` when `UpdateQuantity` asks for more than the
    ///   line's product stock
    pub fn apply(&self, action: CartAction) -> CoreResult<Cart> {
        let mut next = self.clone();
        match action {
            CartAction::Add { product, quantity } => {
                validate_quantity(quantity)?;
                next.add_in_place(product, quantity);
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                if quantity <= 0 {
                    next.items.retain(|i| i.product_id() != product_id);
                } else if let Some(item) = next.find_mut(&product_id) {
                    ensure_within_stock(&item.product, quantity)?;
                    item.quantity = quantity;
                }
            }
            CartAction::Remove { product_id } => {
                next.items.retain(|i| i.product_id() != product_id);
            }
            CartAction::Clear => next.items.clear(),
        }
        Ok(next)
    }

    fn add_in_place(&mut self, product: Product, quantity: i64) {
        match self.find_mut(&product.id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem::new(product, quantity)),
        }
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.product_id() == product_id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the line for a product, if any.
    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    /// Units of a product already committed to the cart.
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines (the cart badge count).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::money::Money;

    fn test_product(id: &str, price: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::new(price),
            stock,
            description: None,
            is_recommended: false,
            discounts: Vec::new(),
        }
    }

    #[test]
    fn test_cart_add_item() {
        let product = test_product("1", 1_000, 50);
        let cart = Cart::new().apply(CartAction::add(&product, 2)).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let product = test_product("1", 1_000, 50);
        let cart = Cart::new()
            .apply(CartAction::add(&product, 1))
            .and_then(|c| c.apply(CartAction::add(&product, 1)))
            .unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_cart_add_rejects_non_positive_quantity() {
        let product = test_product("1", 1_000, 50);
        let result = Cart::new().apply(CartAction::add(&product, 0));
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let product = test_product("1", 1_000, 50);
        let cart = Cart::new()
            .apply(CartAction::add(&product, 3))
            .and_then(|c| c.apply(CartAction::update_quantity("1", 7)))
            .unwrap();
        assert_eq!(cart.quantity_of("1"), 7);
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let a = test_product("a", 1_000, 50);
        let b = test_product("b", 2_000, 50);
        let cart = Cart::new()
            .apply(CartAction::add(&a, 2))
            .and_then(|c| c.apply(CartAction::add(&b, 1)))
            .unwrap();

        let zeroed = cart.apply(CartAction::update_quantity("a", 0)).unwrap();
        let removed = cart.apply(CartAction::remove("a")).unwrap();
        assert_eq!(zeroed, removed);
        assert!(!zeroed.contains("a"));
        assert!(zeroed.contains("b"));
    }

    #[test]
    fn test_update_quantity_over_stock_leaves_cart_unchanged() {
        let product = test_product("1", 1_000, 50);
        let cart = Cart::new().apply(CartAction::add(&product, 2)).unwrap();

        let result = cart.apply(CartAction::update_quantity("1", 999));
        assert_eq!(
            result,
            Err(CoreError::InsufficientStock {
                product_id: "1".to_string(),
                name: "Product 1".to_string(),
                available: 50,
                requested: 999,
            })
        );
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_update_quantity_ceiling_ignores_other_lines() {
        let product = test_product("1", 1_000, 5);
        let cart = Cart::new().apply(CartAction::add(&product, 4)).unwrap();
        // 5 is the full stock, not stock minus what is already in the cart
        let cart = cart.apply(CartAction::update_quantity("1", 5)).unwrap();
        assert_eq!(cart.quantity_of("1"), 5);
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let product = test_product("1", 1_000, 50);
        let cart = Cart::new().apply(CartAction::add(&product, 1)).unwrap();
        let next = cart.apply(CartAction::update_quantity("missing", 3)).unwrap();
        assert_eq!(next, cart);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let cart = Cart::new();
        assert_eq!(cart.apply(CartAction::remove("nope")).unwrap(), cart);
    }

    #[test]
    fn test_cart_clear() {
        let product = test_product("1", 1_000, 50);
        let cart = Cart::new().apply(CartAction::add(&product, 2)).unwrap();
        assert!(!cart.is_empty());

        let cleared = cart.apply(CartAction::Clear).unwrap();
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_from_items_restores_invariants() {
        let product = test_product("1", 1_000, 50);
        let other = test_product("2", 1_000, 50);
        let cart = Cart::from_items(vec![
            CartItem::new(product.clone(), 1),
            CartItem::new(other, 0),
            CartItem::new(product, 2),
        ]);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of("1"), 3);
    }

    #[test]
    fn test_cart_serializes_as_array() {
        let product = test_product("1", 1_000, 50);
        let cart = Cart::new().apply(CartAction::add(&product, 2)).unwrap();
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["quantity"], 2);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}
