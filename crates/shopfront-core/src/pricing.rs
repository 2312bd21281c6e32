//! # Pricing Engine
//!
//! Pure functions that price a cart: quantity tiers, the cart-wide bulk
//! bonus, and the selected coupon.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  per line                                                               │
//! │    tier rate  = max(tier.rate where qty ≥ tier.quantity) or 0           │
//! │    + 5%         if ANY line in the cart has qty ≥ 10                    │
//! │    min(…, 50%)                                                          │
//! │    line total = round(price × qty × (1 − rate))       ← rounded here    │
//! │                                                                         │
//! │  cart                                                                   │
//! │    before = Σ price × qty                                               │
//! │    after  = Σ line totals                                               │
//! │           − amount coupon (floored at 0)                                │
//! │           | × (1 − pct/100), rounded                 ← and again here   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens per line and again on the coupon step; it is not
//! deferred to a single final rounding. All arithmetic is integer, so
//! results are identical on every platform.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::{DiscountRate, Money};
use crate::types::{CartItem, Coupon, DiscountType};

/// Line quantity that unlocks the cart-wide bulk bonus.
pub const BULK_PURCHASE_THRESHOLD: i64 = 10;

/// Extra rate granted to every line once any line is a bulk purchase.
pub const BULK_PURCHASE_ADDITIONAL_DISCOUNT: DiscountRate = DiscountRate::from_bps(500);

/// Ceiling on the combined per-line rate.
pub const MAX_DISCOUNT_RATE: DiscountRate = DiscountRate::from_bps(5_000);

/// Minimum pre-discount total for percentage coupons.
pub const MIN_TOTAL_FOR_PERCENTAGE_COUPON: Money = Money::new(10_000);

// =============================================================================
// Totals
// =============================================================================

/// Derived cart totals. Recomputed on every read, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotal {
    #[ts(type = "number")]
    pub total_before_discount: Money,
    #[ts(type = "number")]
    pub total_after_discount: Money,
}

impl CartTotal {
    /// Amount saved by tiers, bulk bonus and coupon together.
    pub fn discount_amount(&self) -> Money {
        self.total_before_discount - self.total_after_discount
    }
}

/// Pricing breakdown for one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LinePricing {
    pub product_id: String,
    pub name: String,
    #[ts(type = "number")]
    pub unit_price: Money,
    #[ts(type = "number")]
    pub quantity: i64,
    #[ts(type = "number")]
    pub discount_rate: DiscountRate,
    #[ts(type = "number")]
    pub total_before_discount: Money,
    #[ts(type = "number")]
    pub total_after_discount: Money,
}

impl LinePricing {
    pub fn saved(&self) -> Money {
        self.total_before_discount - self.total_after_discount
    }
}

// =============================================================================
// Per-line Discounts
// =============================================================================

/// Whether any line in the cart reaches the bulk threshold.
pub fn has_bulk_purchase(cart: &Cart) -> bool {
    cart.items()
        .iter()
        .any(|item| item.quantity >= BULK_PURCHASE_THRESHOLD)
}

/// Resolves the rate applied to `item` within `cart`.
///
/// ## Steps
/// 1. Best tier reached by the line's own quantity (0 if none)
/// 2. Plus the bulk bonus when any line in the cart is a bulk purchase
/// 3. Capped at `MAX_DISCOUNT_RATE`
pub fn max_applicable_discount(item: &CartItem, cart: &Cart) -> DiscountRate {
    let base = item.product.tier_rate_for(item.quantity);
    let combined = if has_bulk_purchase(cart) {
        base.saturating_add(BULK_PURCHASE_ADDITIONAL_DISCOUNT)
    } else {
        base
    };
    combined.min(MAX_DISCOUNT_RATE)
}

/// `round(price × quantity × (1 − rate))` for one line.
///
/// ## Example
/// ```rust
/// use shopfront_core::cart::{Cart, CartAction};
/// use shopfront_core::money::{DiscountRate, Money};
/// use shopfront_core::pricing::calculate_item_total;
/// use shopfront_core::types::{DiscountTier, Product};
///
/// let product = Product {
///     id: "p1".to_string(),
///     name: "Notebook".to_string(),
///     price: Money::new(1_000),
///     stock: 50,
///     description: None,
///     is_recommended: false,
///     discounts: vec![DiscountTier::new(5, DiscountRate::from_bps(1_000))],
/// };
/// let cart = Cart::new().apply(CartAction::add(&product, 5)).unwrap();
/// let total = calculate_item_total(&cart.items()[0], &cart);
/// assert_eq!(total.amount(), 4_500);
/// ```
pub fn calculate_item_total(item: &CartItem, cart: &Cart) -> Money {
    let rate = max_applicable_discount(item, cart);
    item.line_total().apply_discount_rate(rate)
}

/// Breakdown of every line, in cart order.
pub fn price_lines(cart: &Cart) -> Vec<LinePricing> {
    cart.items()
        .iter()
        .map(|item| {
            let discount_rate = max_applicable_discount(item, cart);
            let total_before_discount = item.line_total();
            LinePricing {
                product_id: item.product.id.clone(),
                name: item.product.name.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                discount_rate,
                total_before_discount,
                total_after_discount: total_before_discount.apply_discount_rate(discount_rate),
            }
        })
        .collect()
}

// =============================================================================
// Coupons
// =============================================================================

/// Applies a coupon to an already line-discounted total.
pub fn apply_coupon(total: Money, coupon: &Coupon) -> Money {
    match coupon.discount_type {
        DiscountType::Amount => total.saturating_discount(Money::new(coupon.discount_value)),
        DiscountType::Percentage => total.apply_percentage_off(coupon.discount_value),
    }
}

/// Checks that `coupon` may be selected for `cart`.
///
/// Percentage coupons need a pre-discount total of at least
/// `MIN_TOTAL_FOR_PERCENTAGE_COUPON`. Amount coupons are always eligible.
pub fn ensure_coupon_eligible(coupon: &Coupon, cart: &Cart) -> CoreResult<()> {
    if coupon.discount_type != DiscountType::Percentage {
        return Ok(());
    }

    let current = calculate_cart_total(cart, None).total_before_discount;
    if current < MIN_TOTAL_FOR_PERCENTAGE_COUPON {
        return Err(CoreError::CouponIneligible {
            code: coupon.code.clone(),
            minimum: MIN_TOTAL_FOR_PERCENTAGE_COUPON.amount(),
            current: current.amount(),
        });
    }
    Ok(())
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Computes cart totals with the selected coupon, if any.
///
/// Pure and idempotent: the same cart and coupon always produce the same
/// totals.
pub fn calculate_cart_total(cart: &Cart, selected_coupon: Option<&Coupon>) -> CartTotal {
    let total_before_discount: Money = cart.items().iter().map(CartItem::line_total).sum();
    let lines_after_discount: Money = cart
        .items()
        .iter()
        .map(|item| calculate_item_total(item, cart))
        .sum();

    let total_after_discount = match selected_coupon {
        Some(coupon) => apply_coupon(lines_after_discount, coupon),
        None => lines_after_discount,
    };

    CartTotal {
        total_before_discount,
        total_after_discount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
