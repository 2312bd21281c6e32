//! # Order Commands
//!
//! Simulated checkout. No payment is taken: completing an order prices the
//! cart one last time, issues an order number, and empties the cart.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shopfront_core::{CartAction, CartTotal, CoreError, LinePricing, NotificationKind};
use shopfront_store::KeyValueStore;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ShopState;

/// What the customer gets back from checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// `ORD-` followed by the completion time in epoch milliseconds
    pub order_number: String,
    pub lines: Vec<LinePricing>,
    pub totals: CartTotal,
    pub coupon_code: Option<String>,
    pub completed_at: DateTime<Utc>,
}

/// Order number for an order completed at `at`.
pub fn order_number(at: DateTime<Utc>) -> String {
    format!("ORD-{}", at.timestamp_millis())
}

/// Completes the order.
///
/// ## Order Flow
/// ```text
/// complete_order
///   │
///   ├── cart empty ──► EMPTY_CART (warning)
///   │
///   ├── receipt ◄── lines + totals (with coupon) priced now
///   ├── cart cleared and persisted
///   ├── coupon deselected
///   └── "Order complete. Order number: ORD-…" (success)
/// ```
pub fn complete_order<S: KeyValueStore>(shop: &mut ShopState<S>) -> Result<OrderReceipt, ApiError> {
    complete_order_at(shop, Utc::now())
}

/// [`complete_order`] with an explicit completion time.
pub fn complete_order_at<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    now: DateTime<Utc>,
) -> Result<OrderReceipt, ApiError> {
    debug!("complete_order command");

    if shop.cart().is_empty() {
        return shop.reject(CoreError::EmptyCart);
    }

    let receipt = OrderReceipt {
        order_number: order_number(now),
        lines: shop.lines(),
        totals: shop.totals(),
        coupon_code: shop.selected_coupon().map(|c| c.code.clone()),
        completed_at: now,
    };

    let cleared = match shop.cart().apply(CartAction::Clear) {
        Ok(cleared) => cleared,
        Err(err) => return shop.reject(err),
    };
    if let Err(err) = shop.commit_cart(cleared) {
        return shop.reject(err);
    }
    shop.select_coupon(None);

    info!(
        order_number = %receipt.order_number,
        total = %receipt.totals.total_after_discount,
        "Order completed"
    );
    shop.notify(
        &format!("Order complete. Order number: {}", receipt.order_number),
        NotificationKind::Success,
    );
    Ok(receipt)
}
