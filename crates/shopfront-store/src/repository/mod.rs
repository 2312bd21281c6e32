//! # Repository Module
//!
//! Typed access to each persisted collection.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session state                                                          │
//! │       │                                                                 │
//! │       │  store.cart().save(&cart)                                       │
//! │       ▼                                                                 │
//! │  CartRepository                                                         │
//! │  ├── load(&self)        → Cart (empty when nothing stored)              │
//! │  └── save(&self, cart)  → empty cart removes the key                    │
//! │       │                                                                 │
//! │       │  JSON document                                                  │
//! │       ▼                                                                 │
//! │  KeyValueStore ("products" | "cart" | "coupons")                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`] - The catalog
//! - [`CartRepository`] - The cart lines
//! - [`CouponRepository`] - The coupon book

pub mod cart;
pub mod coupon;
pub mod product;

pub use cart::CartRepository;
pub use coupon::CouponRepository;
pub use product::ProductRepository;
