//! # Validation Module
//!
//! Turns admin form input into domain values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end form                                               │
//! │  ├── Digits-only inputs, clamp on blur                                 │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields, numeric bounds, rate range                       │
//! │  └── Draft → Product / Coupon                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Stores                                                       │
//! │  └── Uniqueness (duplicate coupon codes)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::types::{CouponDraft, DiscountType};
//! use shopfront_core::validation::validate_coupon;
//!
//! let coupon = validate_coupon(CouponDraft {
//!     name: "Welcome".to_string(),
//!     code: "WELCOME".to_string(),
//!     discount_type: Some(DiscountType::Amount),
//!     discount_value: Some(3_000),
//! })
//! .unwrap();
//! assert_eq!(coupon.code, "WELCOME");
//! ```

use crate::error::ValidationError;
use crate::money::{DiscountRate, Money};
use crate::types::{
    Coupon, CouponDraft, DiscountTier, DiscountTierDraft, DiscountType, Product, ProductDraft,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Smallest fixed-amount coupon.
pub const MIN_AMOUNT_DISCOUNT: i64 = 1_000;
/// Largest fixed-amount coupon.
pub const MAX_AMOUNT_DISCOUNT: i64 = 100_000;
/// Smallest percentage coupon.
pub const MIN_PERCENTAGE_DISCOUNT: i64 = 1;
/// Largest percentage coupon.
pub const MAX_PERCENTAGE_DISCOUNT: i64 = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name (non-blank).
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Notebook").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested quantity (must be ≥ 1).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a product price. Free products are not allowed.
pub fn validate_price(price: i64) -> ValidationResult<()> {
    if price <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a stock level (zero allowed).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Validates one discount tier.
///
/// ## Rules
/// - `quantity` ≥ 1
/// - `rate` within `[0, 1]`
pub fn validate_discount_tier(draft: DiscountTierDraft) -> ValidationResult<DiscountTier> {
    if draft.quantity < 1 {
        return Err(ValidationError::OutOfRange {
            field: "discounts.quantity".to_string(),
            min: 1,
            max: i64::MAX,
        });
    }
    let rate = DiscountRate::from_fraction(draft.rate)?;
    Ok(DiscountTier::new(draft.quantity, rate))
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates product form input and builds the product under `id`.
pub fn validate_product(id: impl Into<String>, draft: ProductDraft) -> ValidationResult<Product> {
    validate_product_name(&draft.name)?;
    validate_price(draft.price)?;
    validate_stock(draft.stock)?;

    let discounts = draft
        .discounts
        .into_iter()
        .map(validate_discount_tier)
        .collect::<ValidationResult<Vec<_>>>()?;

    let description = draft
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    Ok(Product {
        id: id.into(),
        name: draft.name.trim().to_string(),
        price: Money::new(draft.price),
        stock: draft.stock,
        description,
        is_recommended: draft.is_recommended,
        discounts,
    })
}

/// Validates coupon form input.
///
/// ## Rules
/// - `name`, `code`, `discountType`, `discountValue` are required
/// - amount coupons: `1000..=100000`
/// - percentage coupons: `1..=100`
///
/// Duplicate codes are checked by [`crate::coupons::CouponBook`], which
/// reports them with a distinct error.
pub fn validate_coupon(draft: CouponDraft) -> ValidationResult<Coupon> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    let code = draft.code.trim();
    if code.is_empty() {
        return Err(ValidationError::required("code"));
    }

    let discount_type = draft
        .discount_type
        .ok_or_else(|| ValidationError::required("discountType"))?;
    let discount_value = draft
        .discount_value
        .ok_or_else(|| ValidationError::required("discountValue"))?;

    let (min, max) = coupon_value_bounds(discount_type);
    if !(min..=max).contains(&discount_value) {
        return Err(ValidationError::OutOfRange {
            field: "discountValue".to_string(),
            min,
            max,
        });
    }

    Ok(Coupon {
        name: name.to_string(),
        code: code.to_string(),
        discount_type,
        discount_value,
    })
}

/// Inclusive bounds for a coupon's `discountValue`.
pub const fn coupon_value_bounds(discount_type: DiscountType) -> (i64, i64) {
    match discount_type {
        DiscountType::Amount => (MIN_AMOUNT_DISCOUNT, MAX_AMOUNT_DISCOUNT),
        DiscountType::Percentage => (MIN_PERCENTAGE_DISCOUNT, MAX_PERCENTAGE_DISCOUNT),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
