//! # Seed Data
//!
//! The data a fresh installation starts with. Repositories fall back to
//! these when their key has never been written.

use shopfront_core::{
    Catalog, Coupon, CouponBook, DiscountRate, DiscountTier, DiscountType, Money, Product,
};

fn tier(quantity: i64, bps: u32) -> DiscountTier {
    DiscountTier::new(quantity, DiscountRate::from_bps(bps))
}

/// Starter products.
pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "Product 1".to_string(),
            price: Money::new(10_000),
            stock: 20,
            description: Some("Premium quality everyday item".to_string()),
            is_recommended: false,
            discounts: vec![tier(10, 1_000), tier(20, 2_000)],
        },
        Product {
            id: "p2".to_string(),
            name: "Product 2".to_string(),
            price: Money::new(20_000),
            stock: 20,
            description: Some("Practical item with many features".to_string()),
            is_recommended: true,
            discounts: vec![tier(10, 1_500)],
        },
        Product {
            id: "p3".to_string(),
            name: "Product 3".to_string(),
            price: Money::new(30_000),
            stock: 20,
            description: Some("High capacity, high performance".to_string()),
            is_recommended: false,
            discounts: vec![tier(10, 2_000), tier(30, 2_500)],
        },
    ]
}

/// Starter coupons: one fixed amount, one percentage.
pub fn default_coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            name: "5,000 off".to_string(),
            code: "AMOUNT5000".to_string(),
            discount_type: DiscountType::Amount,
            discount_value: 5_000,
        },
        Coupon {
            name: "10% off".to_string(),
            code: "PERCENT10".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
        },
    ]
}

pub fn default_catalog() -> Catalog {
    Catalog::new(default_products())
}

pub fn default_coupon_book() -> CouponBook {
    CouponBook::new(default_coupons())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::validation::{validate_coupon, validate_product};
    use shopfront_core::{CouponDraft, ProductDraft};

    #[test]
    fn test_seed_products_pass_validation() {
        for product in default_products() {
            let revalidated = validate_product(product.id.clone(), ProductDraft::from(&product));
            assert_eq!(revalidated, Ok(product));
        }
    }

    #[test]
    fn test_seed_coupons_pass_validation() {
        for coupon in default_coupons() {
            let draft = CouponDraft {
                name: coupon.name.clone(),
                code: coupon.code.clone(),
                discount_type: Some(coupon.discount_type),
                discount_value: Some(coupon.discount_value),
            };
            assert_eq!(validate_coupon(draft), Ok(coupon));
        }
    }

    #[test]
    fn test_seed_codes_unique() {
        let book = default_coupon_book();
        assert!(book.exists("AMOUNT5000"));
        assert!(book.exists("PERCENT10"));
        assert_eq!(book.len(), 2);
    }
}
