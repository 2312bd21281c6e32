//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront. It contains the cart pricing
//! and discount engine plus the stock bookkeeping that guards it, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser Front-end                            │   │
//! │  │    Catalog UI ──► Cart UI ──► Coupon UI ──► Checkout           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopfront-app commands                       │   │
//! │  │    add_to_cart, apply_coupon, complete_order, etc.             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ catalog │ │  cart   │ │ coupons │ │ pricing │ │  stock  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TIMERS • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                shopfront-store (Persistence)                    │   │
//! │  │              key-value store, typed repositories                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, DiscountTier, Coupon, CartItem)
//! - [`money`] - Money and DiscountRate with integer arithmetic
//! - [`cart`] - Cart state and its reducer
//! - [`stock`] - Stock guard (remaining stock checks)
//! - [`pricing`] - Tier/bulk discounts, coupon application, cart totals
//! - [`catalog`] - Product catalog store and search filtering
//! - [`coupons`] - Coupon store
//! - [`notify`] - Notifier capability used by the session layer
//! - [`validation`] - Admin input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::cart::{Cart, CartAction};
//! use shopfront_core::money::{DiscountRate, Money};
//! use shopfront_core::pricing::calculate_cart_total;
//! use shopfront_core::types::{DiscountTier, Product};
//!
//! let product = Product {
//!     id: "p1".to_string(),
//!     name: "Notebook".to_string(),
//!     price: Money::new(1000),
//!     stock: 20,
//!     description: None,
//!     is_recommended: false,
//!     discounts: vec![DiscountTier::new(10, DiscountRate::from_bps(1000))],
//! };
//!
//! let cart = Cart::new()
//!     .apply(CartAction::add(&product, 10))
//!     .unwrap();
//!
//! let totals = calculate_cart_total(&cart, None);
//! assert_eq!(totals.total_before_discount.amount(), 10_000);
//! // 10 units reach the tier (10%) and the bulk bonus (5%)
//! assert_eq!(totals.total_after_discount.amount(), 8_500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod coupons;
pub mod error;
pub mod money;
pub mod notify;
pub mod pricing;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartAction};
pub use catalog::{Catalog, ProductListing, SearchTermSource};
pub use coupons::CouponBook;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{DiscountRate, Money};
pub use notify::{NotificationKind, Notifier};
pub use pricing::{CartTotal, LinePricing};
pub use types::*;
