//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │     Coupon      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  product (snap) │   │  code (unique)  │       │
//! │  │  price, stock   │   │  quantity ≥ 1   │   │  discount_type  │       │
//! │  │  discounts[]    │   └─────────────────┘   │  discount_value │       │
//! │  └────────┬────────┘                         └─────────────────┘       │
//! │           │                                                             │
//! │  ┌────────▼────────┐                                                    │
//! │  │  DiscountTier   │   quantity threshold → rate                        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names serialize as camelCase to match the browser front-end.
//! Draft and patch types carry unvalidated admin form input; see
//! [`crate::validation`] for turning them into domain values.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{DiscountRate, Money};

// =============================================================================
// Discount Tier
// =============================================================================

/// A rate unlocked once a line's quantity reaches `quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountTier {
    /// Minimum line quantity (≥ 1).
    #[ts(type = "number")]
    pub quantity: i64,

    /// Rate applied when the threshold is met.
    #[ts(type = "number")]
    pub rate: DiscountRate,
}

impl DiscountTier {
    /// Creates a tier.
    pub const fn new(quantity: i64, rate: DiscountRate) -> Self {
        DiscountTier { quantity, rate }
    }

    /// Whether a line of `quantity` units reaches this tier.
    #[inline]
    pub const fn qualifies(&self, quantity: i64) -> bool {
        quantity >= self.quantity
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// `stock` is a displayed ceiling: cart actions never decrement it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price.
    #[ts(type = "number")]
    pub price: Money,

    /// Units available for purchase.
    #[ts(type = "number")]
    pub stock: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,

    /// Shown with a "recommended" badge in the catalog.
    #[serde(default)]
    pub is_recommended: bool,

    /// Quantity tiers, in no particular order.
    #[serde(default)]
    pub discounts: Vec<DiscountTier>,
}

impl Product {
    /// Highest rate among tiers reached by `quantity`, or zero.
    pub fn tier_rate_for(&self, quantity: i64) -> DiscountRate {
        self.discounts
            .iter()
            .filter(|tier| tier.qualifies(quantity))
            .map(|tier| tier.rate)
            .max()
            .unwrap_or_default()
    }

    /// Highest rate any tier can give (for "up to N% off" badges).
    pub fn best_tier_rate(&self) -> DiscountRate {
        self.discounts
            .iter()
            .map(|tier| tier.rate)
            .max()
            .unwrap_or_default()
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// Holds a snapshot of the product taken when it was first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub product: Product,

    #[ts(type = "number")]
    pub quantity: i64,
}

impl CartItem {
    /// Creates a line from a product snapshot.
    pub fn new(product: Product, quantity: i64) -> Self {
        CartItem { product, quantity }
    }

    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// `price × quantity` before any discount.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// How a coupon's `discount_value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Fixed amount off the cart total.
    Amount,
    /// Percent (0–100) off the cart total.
    Percentage,
}

/// A coupon definition. `code` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub name: String,
    pub code: String,
    pub discount_type: DiscountType,
    #[ts(type = "number")]
    pub discount_value: i64,
}

impl Coupon {
    /// Short label for coupon pickers ("5,000 off", "10% off").
    pub fn display_text(&self) -> String {
        match self.discount_type {
            DiscountType::Amount => format!("{} off", Money::new(self.discount_value)),
            DiscountType::Percentage => format!("{}% off", self.discount_value),
        }
    }
}

// =============================================================================
// Admin Input
// =============================================================================

/// A discount tier as typed into the admin form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountTierDraft {
    #[ts(type = "number")]
    pub quantity: i64,
    pub rate: f64,
}

impl From<DiscountTier> for DiscountTierDraft {
    fn from(tier: DiscountTier) -> Self {
        DiscountTierDraft {
            quantity: tier.quantity,
            rate: tier.rate.as_fraction(),
        }
    }
}

/// Unvalidated product form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub name: String,
    #[ts(type = "number")]
    pub price: i64,
    #[ts(type = "number")]
    pub stock: i64,
    #[ts(optional)]
    pub description: Option<String>,
    pub is_recommended: bool,
    pub discounts: Vec<DiscountTierDraft>,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        ProductDraft {
            name: product.name.clone(),
            price: product.price.amount(),
            stock: product.stock,
            description: product.description.clone(),
            is_recommended: product.is_recommended,
            discounts: product.discounts.iter().copied().map(Into::into).collect(),
        }
    }
}

/// A partial product edit. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    #[ts(optional)]
    pub name: Option<String>,
    #[ts(type = "number | null")]
    pub price: Option<i64>,
    #[ts(type = "number | null")]
    pub stock: Option<i64>,
    #[ts(optional)]
    pub description: Option<String>,
    #[ts(optional)]
    pub is_recommended: Option<bool>,
    #[ts(optional)]
    pub discounts: Option<Vec<DiscountTierDraft>>,
}

impl ProductPatch {
    /// Overlays the patch onto a draft of the current product.
    pub fn apply_to(self, mut draft: ProductDraft) -> ProductDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(stock) = self.stock {
            draft.stock = stock;
        }
        if let Some(description) = self.description {
            draft.description = Some(description);
        }
        if let Some(is_recommended) = self.is_recommended {
            draft.is_recommended = is_recommended;
        }
        if let Some(discounts) = self.discounts {
            draft.discounts = discounts;
        }
        draft
    }
}

/// Unvalidated coupon form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponDraft {
    pub name: String,
    pub code: String,
    #[ts(optional)]
    pub discount_type: Option<DiscountType>,
    #[ts(type = "number | null")]
    pub discount_value: Option<i64>,
}

impl From<&Coupon> for CouponDraft {
    fn from(coupon: &Coupon) -> Self {
        CouponDraft {
            name: coupon.name.clone(),
            code: coupon.code.clone(),
            discount_type: Some(coupon.discount_type),
            discount_value: Some(coupon.discount_value),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
