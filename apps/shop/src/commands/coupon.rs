//! # Coupon Commands
//!
//! Selecting a coupon for the cart, and coupon administration.
//!
//! ```text
//! apply_coupon(code)
//!   │
//!   ├── unknown code ─────────────────────► NOT_FOUND (error)
//!   ├── percentage && before < 10,000 ────► COUPON_INELIGIBLE (warning),
//!   │                                       selection unchanged
//!   └── ok ───────────────────────────────► selected, "Coupon applied"
//! ```

use shopfront_core::pricing::ensure_coupon_eligible;
use shopfront_core::{Coupon, CouponDraft, NotificationKind};
use shopfront_store::KeyValueStore;
use tracing::{debug, info};

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::ShopState;

/// Lists every coupon.
pub fn list_coupons<S: KeyValueStore>(shop: &ShopState<S>) -> Vec<Coupon> {
    debug!("list_coupons command");
    shop.coupons().coupons().to_vec()
}

/// Selects a coupon for the cart.
///
/// Percentage coupons are refused below the minimum pre-discount total;
/// the previous selection is kept.
pub fn apply_coupon<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    code: &str,
) -> Result<CartResponse, ApiError> {
    debug!(code = %code, "apply_coupon command");

    let coupon = match shop.coupons().require(code) {
        Ok(coupon) => coupon.clone(),
        Err(err) => return shop.reject(err),
    };
    if let Err(err) = ensure_coupon_eligible(&coupon, shop.cart()) {
        return shop.reject(err);
    }

    info!(code = %code, "Coupon applied");
    shop.select_coupon(Some(coupon));
    shop.notify("Coupon applied", NotificationKind::Success);
    Ok(CartResponse::from(&*shop))
}

/// Deselects the current coupon, if any.
pub fn clear_coupon<S: KeyValueStore>(shop: &mut ShopState<S>) -> CartResponse {
    debug!("clear_coupon command");
    shop.select_coupon(None);
    CartResponse::from(&*shop)
}

/// Adds a coupon.
///
/// ## Errors
/// - `VALIDATION_ERROR` for missing fields or an out-of-range value
/// - `DUPLICATE_COUPON` when the code is already used
pub fn add_coupon<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    draft: CouponDraft,
) -> Result<Coupon, ApiError> {
    debug!(code = %draft.code, "add_coupon command");

    let mut next = shop.coupons().clone();
    let coupon = match next.add(draft) {
        Ok(coupon) => coupon,
        Err(err) => return shop.reject(err),
    };
    if let Err(err) = shop.commit_coupons(next) {
        return shop.reject(err);
    }

    info!(code = %coupon.code, "Coupon added");
    shop.notify("Coupon added", NotificationKind::Success);
    Ok(coupon)
}

/// Deletes a coupon. If it was selected, the cart loses it too.
pub fn delete_coupon<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    code: &str,
) -> Result<Coupon, ApiError> {
    debug!(code = %code, "delete_coupon command");

    let mut next = shop.coupons().clone();
    let removed = match next.remove(code) {
        Ok(removed) => removed,
        Err(err) => return shop.reject(err),
    };
    if let Err(err) = shop.commit_coupons(next) {
        return shop.reject(err);
    }

    if shop.selected_coupon().is_some_and(|c| c.code == removed.code) {
        shop.select_coupon(None);
    }

    info!(code = %code, "Coupon deleted");
    shop.notify("Coupon deleted", NotificationKind::Success);
    Ok(removed)
}

/// A fresh unused code for the "new coupon" form.
pub fn suggest_coupon_code<S: KeyValueStore>(shop: &ShopState<S>) -> String {
    debug!("suggest_coupon_code command");
    shop.coupons().generate_unique_code()
}

// =============================================================================
// Unit Tests
// =============================================================================
