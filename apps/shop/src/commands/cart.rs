//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Coupon  │────►│  Order   │       │
//! │  │  Cart    │     │          │     │ selected │     │ complete │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       apply_coupon                       │
//! │                   update_item       (coupon.rs)    complete_order      │
//! │                   remove_item                      (order.rs)          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_core::stock::ensure_can_add;
use shopfront_core::validation::validate_quantity;
use shopfront_core::{
    Cart, CartAction, CartItem, CartTotal, CoreError, Coupon, LinePricing, NotificationKind,
};
use shopfront_store::KeyValueStore;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ShopState;

/// Cart response including lines, per-line pricing and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub lines: Vec<LinePricing>,
    pub totals: CartTotal,
    pub selected_coupon: Option<Coupon>,
    /// Units across all lines (the cart badge)
    pub total_quantity: i64,
}

impl<S: KeyValueStore> From<&ShopState<S>> for CartResponse {
    fn from(shop: &ShopState<S>) -> Self {
        CartResponse {
            items: shop.cart().items().to_vec(),
            lines: shop.lines(),
            totals: shop.totals(),
            selected_coupon: shop.selected_coupon().cloned(),
            total_quantity: shop.cart().total_quantity(),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart<S: KeyValueStore>(shop: &ShopState<S>) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(shop)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added with a snapshot of the product
/// - Rejected with a warning when the quantity exceeds remaining stock
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User clicks "Add to cart" on a product card                            │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  add_to_cart(shop, "p1", Some(1))                                       │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Look the product up in the catalog                         │    │
/// │  │  2. Stock guard: quantity ≤ stock − already in cart            │    │
/// │  │  3. Apply the Add action and persist                           │    │
/// │  │  4. Notify "Added to cart"                                     │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Arguments
/// * `product_id` - Product to add
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let next = try_add(shop, product_id, quantity);
    commit(shop, next)?;

    info!(product_id = %product_id, quantity = %quantity, "Added to cart");
    shop.notify("Added to cart", NotificationKind::Success);
    Ok(CartResponse::from(&*shop))
}

fn try_add<S: KeyValueStore>(
    shop: &ShopState<S>,
    product_id: &str,
    quantity: i64,
) -> Result<Cart, CoreError> {
    validate_quantity(quantity)?;
    let product = shop.catalog().require(product_id)?;
    ensure_can_add(product, shop.cart(), quantity)?;
    shop.cart().apply(CartAction::add(product, quantity))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Quantity above the product's stock: rejected with a warning, cart
///   unchanged
/// - Product not in the cart: no change
pub fn update_cart_item<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    let next = shop
        .cart()
        .apply(CartAction::update_quantity(product_id, quantity));
    commit(shop, next)?;

    Ok(CartResponse::from(&*shop))
}

/// Removes a line from the cart. Removing an absent line is not an error.
pub fn remove_from_cart<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    let next = shop.cart().apply(CartAction::remove(product_id));
    commit(shop, next)?;

    Ok(CartResponse::from(&*shop))
}

/// Clears all lines from the cart. The selected coupon stays selected.
pub fn clear_cart<S: KeyValueStore>(shop: &mut ShopState<S>) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    let next = shop.cart().apply(CartAction::Clear);
    commit(shop, next)?;

    Ok(CartResponse::from(&*shop))
}

/// Persists a reducer result, or reports why there is nothing to persist.
fn commit<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    next: Result<Cart, CoreError>,
) -> Result<(), ApiError> {
    let next = next.or_else(|err| shop.reject(err))?;
    shop.commit_cart(next).or_else(|err| shop.reject(err))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::NotificationCenter;
    use chrono::Utc;
    use shopfront_store::{MemoryStore, Store};
    use std::sync::Arc;

    fn shop_with_center() -> (ShopState<MemoryStore>, Arc<NotificationCenter>) {
        let center = Arc::new(NotificationCenter::new(60_000));
        let shop = ShopState::load(Store::in_memory(), Some(Box::new(center.clone()))).unwrap();
        (shop, center)
    }

    #[test]
    fn test_add_same_product_twice_merges_lines() {
        let (mut shop, _center) = shop_with_center();
        add_to_cart(&mut shop, "p1", Some(1)).unwrap();
        let response = add_to_cart(&mut shop, "p1", None).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.total_quantity, 2);
    }

    #[test]
    fn test_add_beyond_remaining_stock_is_rejected() {
        let (mut shop, center) = shop_with_center();
        // Seed stock for p1 is 20
        add_to_cart(&mut shop, "p1", Some(18)).unwrap();

        let err = add_to_cart(&mut shop, "p1", Some(3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(shop.cart().quantity_of("p1"), 18);

        let last = center.active(Utc::now()).pop().unwrap();
        assert_eq!(last.kind, NotificationKind::Warning);
    }

    #[test]
    fn test_add_unknown_product() {
        let (mut shop, _center) = shop_with_center();
        let err = add_to_cart(&mut shop, "missing", Some(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_zero_quantity_is_validation_error() {
        let (mut shop, _center) = shop_with_center();
        let err = add_to_cart(&mut shop, "p1", Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_update_over_stock_keeps_quantity_and_warns() {
        let (mut shop, center) = shop_with_center();
        add_to_cart(&mut shop, "p2", Some(2)).unwrap();
        center.clear();

        let err = update_cart_item(&mut shop, "p2", 999).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(shop.cart().quantity_of("p2"), 2);

        let active = center.active(Utc::now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, NotificationKind::Warning);
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let (mut shop, _center) = shop_with_center();
        add_to_cart(&mut shop, "p2", Some(2)).unwrap();
        let response = update_cart_item(&mut shop, "p2", 0).unwrap();
        assert!(response.items.is_empty());
        assert!(shop.store().cart().load().unwrap().is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let (mut shop, _center) = shop_with_center();
        add_to_cart(&mut shop, "p1", Some(1)).unwrap();
        add_to_cart(&mut shop, "p2", Some(1)).unwrap();

        let response = remove_from_cart(&mut shop, "p1").unwrap();
        assert_eq!(response.items.len(), 1);

        let response = clear_cart(&mut shop).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.totals, CartTotal::default());
    }

    #[test]
    fn test_get_cart_reports_line_pricing() {
        let (mut shop, _center) = shop_with_center();
        // p1: 10,000 with a 10% tier at 10 units; 10 units also triggers the bulk bonus
        add_to_cart(&mut shop, "p1", Some(10)).unwrap();

        let response = get_cart(&shop);
        assert_eq!(response.totals.total_before_discount.amount(), 100_000);
        assert_eq!(response.totals.total_after_discount.amount(), 85_000);
        assert_eq!(response.lines[0].discount_rate.bps(), 1_500);
    }
}
