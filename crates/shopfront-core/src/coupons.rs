//! # Coupons
//!
//! The coupon store. Codes are the unique key; the store rejects a second
//! coupon with a code already in use.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Coupon, CouponDraft};
use crate::validation::validate_coupon;

/// Length of generated coupon codes.
pub const COUPON_CODE_LEN: usize = 8;

/// Ordered coupon collection. Serializes as a bare array of coupons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        CouponBook { coupons }
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }

    pub fn exists(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn get(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.code == code)
    }

    /// Looks a coupon up by code, reporting a miss as an error.
    pub fn require(&self, code: &str) -> CoreResult<&Coupon> {
        self.get(code)
            .ok_or_else(|| CoreError::CouponNotFound(code.to_string()))
    }

    /// Validates and appends a coupon.
    ///
    /// ## Errors
    /// - `Validation` for missing fields or an out-of-range value
    /// - `DuplicateCouponCode` when the code is taken
    pub fn add(&mut self, draft: CouponDraft) -> CoreResult<Coupon> {
        let coupon = validate_coupon(draft)?;
        if self.exists(&coupon.code) {
            return Err(CoreError::DuplicateCouponCode(coupon.code));
        }
        self.coupons.push(coupon.clone());
        Ok(coupon)
    }

    /// Re-validates every coupon and drops the ones that fail, returning
    /// their codes with the reason. Used on data read back from storage.
    pub fn retain_valid(&mut self) -> Vec<(String, ValidationError)> {
        let mut dropped = Vec::new();
        self.coupons = std::mem::take(&mut self.coupons)
            .into_iter()
            .filter_map(|coupon| match validate_coupon(CouponDraft::from(&coupon)) {
                Ok(valid) => Some(valid),
                Err(err) => {
                    dropped.push((coupon.code, err));
                    None
                }
            })
            .collect();
        dropped
    }

    /// Deletes a coupon by code and returns it.
    pub fn remove(&mut self, code: &str) -> CoreResult<Coupon> {
        let index = self
            .coupons
            .iter()
            .position(|c| c.code == code)
            .ok_or_else(|| CoreError::CouponNotFound(code.to_string()))?;
        Ok(self.coupons.remove(index))
    }

    /// A random code not yet used in this book.
    pub fn generate_unique_code(&self) -> String {
        loop {
            let code = generate_coupon_code();
            if !self.exists(&code) {
                return code;
            }
        }
    }
}

/// Random code of [`COUPON_CODE_LEN`] uppercase letters and digits.
pub fn generate_coupon_code() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(COUPON_CODE_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::DiscountType;

    fn draft(code: &str, discount_type: DiscountType, value: i64) -> CouponDraft {
        CouponDraft {
            name: format!("{} coupon", code),
            code: code.to_string(),
            discount_type: Some(discount_type),
            discount_value: Some(value),
        }
    }

    #[test]
    fn test_add_and_lookup() {
        let mut book = CouponBook::default();
        book.add(draft("AMOUNT5000", DiscountType::Amount, 5_000))
            .unwrap();
        book.add(draft("PERCENT10", DiscountType::Percentage, 10))
            .unwrap();

        assert_eq!(book.len(), 2);
        assert!(book.exists("PERCENT10"));
        assert_eq!(book.require("AMOUNT5000").unwrap().discount_value, 5_000);
        assert!(matches!(
            book.require("NOPE"),
            Err(CoreError::CouponNotFound(_))
        ));
    }

    #[test]
    fn test_retain_valid_drops_out_of_range_coupons() {
        let mut book = CouponBook::new(vec![
            Coupon {
                name: "Too generous".to_string(),
                code: "HUGE".to_string(),
                discount_type: DiscountType::Percentage,
                discount_value: 250,
            },
            Coupon {
                name: "5,000 off".to_string(),
                code: "AMOUNT5000".to_string(),
                discount_type: DiscountType::Amount,
                discount_value: 5_000,
            },
        ]);

        let dropped = book.retain_valid();
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].0, "HUGE");
        assert!(matches!(dropped[0].1, ValidationError::OutOfRange { .. }));
        assert!(!book.exists("HUGE"));
        assert!(book.exists("AMOUNT5000"));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut book = CouponBook::default();
        book.add(draft("SPRING", DiscountType::Amount, 5_000))
            .unwrap();

        let result = book.add(draft("SPRING", DiscountType::Percentage, 20));
        assert_eq!(
            result,
            Err(CoreError::DuplicateCouponCode("SPRING".to_string()))
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_invalid_draft_rejected_before_duplicate_check() {
        let mut book = CouponBook::default();
        let result = book.add(draft("LOW", DiscountType::Amount, 10));
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut book = CouponBook::default();
        book.add(draft("SPRING", DiscountType::Amount, 5_000))
            .unwrap();
        let removed = book.remove("SPRING").unwrap();
        assert_eq!(removed.code, "SPRING");
        assert!(book.is_empty());
        assert!(book.remove("SPRING").is_err());
    }

    #[test]
    fn test_generated_code_shape() {
        let code = generate_coupon_code();
        assert_eq!(code.len(), COUPON_CODE_LEN);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_unique_code_not_in_book() {
        let mut book = CouponBook::default();
        book.add(draft("SPRING", DiscountType::Amount, 5_000))
            .unwrap();
        let code = book.generate_unique_code();
        assert!(!book.exists(&code));
    }
}
