//! # Stock Guard
//!
//! Derives how many units of a product can still be put in the cart.
//!
//! ```text
//! remaining = max(0, product.stock − quantity already in cart)
//! ```
//!
//! Catalog stock is never decremented by cart actions; it is a ceiling.
//! The guard is a pure read: it reports a violation as
//! [`CoreError::InsufficientStock`] and the caller skips the mutation.

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::Product;

/// Units of `product` still purchasable given what is already in `cart`.
///
/// ## Example
/// ```rust
/// use shopfront_core::cart::{Cart, CartAction};
/// use shopfront_core::money::Money;
/// use shopfront_core::stock::remaining_stock;
/// use shopfront_core::types::Product;
///
/// let product = Product {
///     id: "p1".to_string(),
///     name: "Pen".to_string(),
///     price: Money::new(500),
///     stock: 3,
///     description: None,
///     is_recommended: false,
///     discounts: vec![],
/// };
/// let cart = Cart::new().apply(CartAction::add(&product, 2)).unwrap();
/// assert_eq!(remaining_stock(&product, &cart), 1);
/// ```
pub fn remaining_stock(product: &Product, cart: &Cart) -> i64 {
    (product.stock - cart.quantity_of(&product.id)).max(0)
}

/// Whether the product can no longer be added at all.
pub fn is_sold_out(product: &Product, cart: &Cart) -> bool {
    remaining_stock(product, cart) <= 0
}

/// Gate for "add to cart".
///
/// Rejects when nothing remains, or when `quantity` is more than what
/// remains.
pub fn ensure_can_add(product: &Product, cart: &Cart, quantity: i64) -> CoreResult<()> {
    let available = remaining_stock(product, cart);
    if available <= 0 || quantity > available {
        return Err(CoreError::InsufficientStock {
            product_id: product.id.clone(),
            name: product.name.clone(),
            available,
            requested: quantity,
        });
    }
    Ok(())
}

/// Gate for "set quantity": the target may not exceed the product's full
/// stock, regardless of other cart lines.
pub fn ensure_within_stock(product: &Product, quantity: i64) -> CoreResult<()> {
    if quantity > product.stock {
        return Err(CoreError::InsufficientStock {
            product_id: product.id.clone(),
            name: product.name.clone(),
            available: product.stock,
            requested: quantity,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartAction;
    use crate::money::Money;

    fn test_product(id: &str, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::new(1_000),
            stock,
            description: None,
            is_recommended: false,
            discounts: Vec::new(),
        }
    }

    #[test]
    fn test_remaining_stock_subtracts_cart_quantity() {
        let product = test_product("1", 10);
        let cart = Cart::new().apply(CartAction::add(&product, 4)).unwrap();
        assert_eq!(remaining_stock(&product, &cart), 6);
        assert_eq!(remaining_stock(&product, &Cart::new()), 10);
    }

    #[test]
    fn test_remaining_stock_never_negative() {
        let product = test_product("1", 10);
        let cart = Cart::new().apply(CartAction::add(&product, 10)).unwrap();
        // Catalog stock lowered by an admin after the line was added
        let restocked = Product {
            stock: 4,
            ..product
        };
        assert_eq!(remaining_stock(&restocked, &cart), 0);
        assert!(is_sold_out(&restocked, &cart));
    }

    #[test]
    fn test_ensure_can_add() {
        let product = test_product("1", 2);
        let cart = Cart::new();
        assert!(ensure_can_add(&product, &cart, 1).is_ok());
        assert!(ensure_can_add(&product, &cart, 2).is_ok());
        assert!(ensure_can_add(&product, &cart, 3).is_err());

        let cart = cart.apply(CartAction::add(&product, 2)).unwrap();
        let err = ensure_can_add(&product, &cart, 1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 0,
                requested: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_ensure_can_add_zero_stock() {
        let product = test_product("1", 0);
        assert!(ensure_can_add(&product, &Cart::new(), 1).is_err());
    }

    #[test]
    fn test_ensure_within_stock_uses_full_stock() {
        let product = test_product("1", 50);
        assert!(ensure_within_stock(&product, 50).is_ok());
        assert!(ensure_within_stock(&product, 999).is_err());
    }
}
