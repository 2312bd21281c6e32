//! # Shop State
//!
//! The storefront session: the three persisted collections, the selected
//! coupon, and the notifier.
//!
//! ## Commit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command                                                                │
//! │     │                                                                   │
//! │     │  next = shop.cart().apply(action)?    (pure, may be rejected)     │
//! │     ▼                                                                   │
//! │  shop.commit_cart(next)?                                                │
//! │     ├── store.cart().save(&next)?   ← write first                       │
//! │     └── self.cart = next            ← then swap in memory               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed write leaves the in-memory session on the previous value, so
//! memory and disk never disagree after a rejected command.
//!
//! The selected coupon is session-only and is not persisted.

use shopfront_core::pricing::{self, calculate_cart_total};
use shopfront_core::{
    Cart, CartTotal, Catalog, Coupon, CouponBook, LinePricing, NotificationKind, Notifier,
};
use shopfront_store::{KeyValueStore, Store, StoreResult};
use tracing::{info, warn};

use crate::error::ApiError;

/// The storefront session.
pub struct ShopState<S> {
    store: Store<S>,
    catalog: Catalog,
    cart: Cart,
    coupons: CouponBook,
    selected_coupon: Option<Coupon>,
    notifier: Option<Box<dyn Notifier>>,
}

impl<S: KeyValueStore> ShopState<S> {
    /// Loads all collections from `store`. Missing or unreadable data falls
    /// back to the seed catalog, the seed coupons and an empty cart.
    pub fn load(store: Store<S>, notifier: Option<Box<dyn Notifier>>) -> StoreResult<Self> {
        let catalog = store.products().load()?;
        let cart = store.cart().load()?;
        let coupons = store.coupons().load()?;

        info!(
            products = catalog.len(),
            cart_lines = cart.item_count(),
            coupons = coupons.len(),
            "Shop state loaded"
        );

        Ok(ShopState {
            store,
            catalog,
            cart,
            coupons,
            selected_coupon: None,
            notifier,
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn coupons(&self) -> &CouponBook {
        &self.coupons
    }

    pub fn selected_coupon(&self) -> Option<&Coupon> {
        self.selected_coupon.as_ref()
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    /// Current totals, recomputed on every call.
    pub fn totals(&self) -> CartTotal {
        calculate_cart_total(&self.cart, self.selected_coupon.as_ref())
    }

    /// Per-line pricing breakdown.
    pub fn lines(&self) -> Vec<LinePricing> {
        pricing::price_lines(&self.cart)
    }

    // =========================================================================
    // Commits
    // =========================================================================

    pub fn commit_cart(&mut self, next: Cart) -> StoreResult<()> {
        self.store.cart().save(&next)?;
        self.cart = next;
        Ok(())
    }

    pub fn commit_catalog(&mut self, next: Catalog) -> StoreResult<()> {
        self.store.products().save(&next)?;
        self.catalog = next;
        Ok(())
    }

    pub fn commit_coupons(&mut self, next: CouponBook) -> StoreResult<()> {
        self.store.coupons().save(&next)?;
        self.coupons = next;
        Ok(())
    }

    pub fn select_coupon(&mut self, coupon: Option<Coupon>) {
        self.selected_coupon = coupon;
    }

    /// Writes every collection. Called on shutdown.
    pub fn save_all(&self) -> StoreResult<()> {
        self.store.products().save(&self.catalog)?;
        self.store.coupons().save(&self.coupons)?;
        self.store.cart().save(&self.cart)?;
        Ok(())
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Tells the user something. Without a notifier this does nothing.
    pub fn notify(&self, message: &str, kind: NotificationKind) {
        self.notifier.notify(message, kind);
    }

    /// Reports a failed command to the user and hands the error back.
    pub fn reject<T>(&self, err: impl Into<ApiError>) -> Result<T, ApiError> {
        let err = err.into();
        warn!(code = ?err.code, message = %err.message, "Command rejected");
        self.notify(&err.message, err.notification_kind());
        Err(err)
    }
}
