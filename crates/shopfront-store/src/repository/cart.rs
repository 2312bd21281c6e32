//! # Cart Repository
//!
//! Persists the cart lines under the `cart` key. An empty cart is never
//! written; saving one removes the key instead.

use shopfront_core::Cart;
use tracing::debug;

use crate::error::StoreResult;
use crate::kv::KeyValueStore;

/// Storage key for the cart.
pub const CART_KEY: &str = "cart";

#[derive(Debug)]
pub struct CartRepository<'a, S> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> CartRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        CartRepository { store }
    }

    /// The stored cart, or an empty one.
    pub fn load(&self) -> StoreResult<Cart> {
        let cart = self.store.load_or(CART_KEY, Cart::new())?;
        debug!(lines = cart.item_count(), "Loaded cart");
        Ok(cart)
    }

    pub fn save(&self, cart: &Cart) -> StoreResult<()> {
        if cart.is_empty() {
            return self.store.remove(CART_KEY);
        }
        self.store.save(CART_KEY, cart)
    }
}
