//! # Commands Module
//!
//! Every operation the storefront front-end can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports)
//! ├── product.rs       ◄─── Listings, search, product CRUD
//! ├── cart.rs          ◄─── Cart manipulation
//! ├── coupon.rs        ◄─── Coupon selection and CRUD
//! ├── order.rs         ◄─── Checkout
//! ├── notification.rs  ◄─── Toast polling
//! └── config.rs        ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  add_to_cart(&mut shop, "p1", Some(2))                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  shopfront-core: validate, stock guard, Cart::apply                     │
//! │         │                                                               │
//! │         ├── Err ──► ShopState::reject ──► notifier + ApiError           │
//! │         ▼                                                               │
//! │  ShopState::commit_cart ──► store.cart().save() then swap in memory     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CartResponse (serialized camelCase for the front-end)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that change state take `&mut ShopState`, read-only ones take
//! `&ShopState`. Failures are always both returned and notified.

pub mod cart;
pub mod config;
pub mod coupon;
pub mod notification;
pub mod order;
pub mod product;
