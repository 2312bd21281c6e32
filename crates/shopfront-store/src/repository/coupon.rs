//! # Coupon Repository
//!
//! Persists the coupon book under the `coupons` key.

use shopfront_core::CouponBook;
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::kv::KeyValueStore;
use crate::seed::default_coupon_book;

/// Storage key for the coupon book.
pub const COUPONS_KEY: &str = "coupons";

#[derive(Debug)]
pub struct CouponRepository<'a, S> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> CouponRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        CouponRepository { store }
    }

    /// The stored coupons, or the seed coupons on first run. Stored coupons
    /// that no longer validate are dropped.
    pub fn load(&self) -> StoreResult<CouponBook> {
        let mut book = self.store.load_or(COUPONS_KEY, default_coupon_book())?;
        for (code, reason) in book.retain_valid() {
            warn!(code = %code, reason = %reason, "Dropping invalid stored coupon");
        }
        debug!(count = book.len(), "Loaded coupons");
        Ok(book)
    }

    pub fn save(&self, book: &CouponBook) -> StoreResult<()> {
        self.store.save(COUPONS_KEY, book)
    }
}
