//! # Money Module
//!
//! Provides the `Money` and `DiscountRate` types used by the pricing engine.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    1 - (0.1 + 0.05) = 0.8499999999999999                                │
//! │    1000 × 10 × 0.8499999999999999 = 8499.999999999999                   │
//! │                                                                         │
//! │  OUR SOLUTION: integer units + basis-point rates                        │
//! │    rate = 1000 bps + 500 bps = 1500 bps                                 │
//! │    (10000 × (10000 - 1500) + 5000) / 10000 = 8500 exactly               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices are whole currency units (there is no minor unit), so `Money`
//! wraps a plain `i64`. Arithmetic saturates at the `i64` bounds instead of
//! overflowing. Rates arrive from the front-end as reals in `[0, 1]`
//! and are stored as basis points (1 bps = 0.0001).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::ValidationError;

/// Basis points in a whole (100%).
pub const BPS_SCALE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// Serializes as a bare JSON number so persisted catalogs stay readable by
/// the browser front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole units.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::new(10_000);
    /// assert_eq!(price.amount(), 10_000);
    /// ```
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in whole units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let unit_price = Money::new(1_500);
    /// assert_eq!(unit_price.multiply_quantity(3).amount(), 4_500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Applies a discount rate and returns the discounted amount, rounded
    /// half-up to a whole unit.
    ///
    /// ## Implementation
    /// `(amount × (10000 − bps) + 5000) / 10000`, floored. Uses `i128` so
    /// large line totals cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::{DiscountRate, Money};
    ///
    /// let line = Money::new(10_000);
    /// let discounted = line.apply_discount_rate(DiscountRate::from_bps(1_500));
    /// assert_eq!(discounted.amount(), 8_500);
    /// ```
    pub fn apply_discount_rate(&self, rate: DiscountRate) -> Money {
        let keep = i128::from(BPS_SCALE - rate.bps());
        let scaled = i128::from(self.0) * keep + i128::from(BPS_SCALE / 2);
        Money(scaled.div_euclid(i128::from(BPS_SCALE)) as i64)
    }

    /// Takes `percent`% off and rounds half-up to a whole unit.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::new(12_345).apply_percentage_off(10).amount(), 11_111);
    /// ```
    ///
    /// `percent` is clamped to `0..=100`, so the result never goes below
    /// zero or above the starting amount.
    pub fn apply_percentage_off(&self, percent: i64) -> Money {
        let percent = percent.clamp(0, 100);
        let scaled = i128::from(self.0) * i128::from(100 - percent) + 50;
        Money(scaled.div_euclid(100) as i64)
    }

    /// Subtracts a fixed amount without going below zero.
    #[inline]
    pub fn saturating_discount(&self, amount: Money) -> Money {
        Money(self.0.saturating_sub(amount.0).max(0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the amount with thousands separators (`12,345`).
///
/// The currency label is added by the app configuration, not here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}", sign, grouped)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount rate in basis points, always within `0..=10000`.
///
/// ## Wire Format
/// Serialized as a real number in `[0, 1]` (`0.1` = 10%), which is what the
/// front-end and stored catalogs carry. Deserializing rounds to the nearest
/// basis point and rejects anything outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points, capped at 100%.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        if bps > BPS_SCALE {
            DiscountRate(BPS_SCALE)
        } else {
            DiscountRate(bps)
        }
    }

    /// Creates a rate from a fraction (`0.05` = 5%).
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_fraction(0.1).unwrap().bps(), 1_000);
    /// assert!(DiscountRate::from_fraction(1.5).is_err());
    /// ```
    pub fn from_fraction(fraction: f64) -> Result<Self, ValidationError> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(ValidationError::InvalidFormat {
                field: "rate".to_string(),
                reason: format!("{} is not between 0 and 1", fraction),
            });
        }
        Ok(DiscountRate((fraction * f64::from(BPS_SCALE)).round() as u32))
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (for display and serialization).
    #[inline]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(BPS_SCALE)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two rates, capping at 100%.
    #[inline]
    pub const fn saturating_add(self, other: DiscountRate) -> DiscountRate {
        DiscountRate::from_bps(self.0 + other.0)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        DiscountRate::from_fraction(value)
    }
}

impl From<DiscountRate> for f64 {
    fn from(rate: DiscountRate) -> f64 {
        rate.as_fraction()
    }
}

/// Whole-percent display (`1250 bps` → `13%`).
impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 + 50) / 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
