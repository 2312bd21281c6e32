//! # shopfront-store: Persistence Layer for Shopfront
//!
//! Keeps the catalog, the cart and the coupon book across restarts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Data Flow                              │
//! │                                                                         │
//! │  Command (add_to_cart)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shopfront-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Repositories │    │     Seed     │  │   │
//! │  │   │  (store.rs)   │    │               │    │  (seed.rs)   │  │   │
//! │  │   │               │    │ ProductRepo   │    │              │  │   │
//! │  │   │ KeyValueStore │◄───│ CartRepo      │    │ 3 products   │  │   │
//! │  │   │ backend       │    │ CouponRepo    │    │ 2 coupons    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/{products,cart,coupons}.json                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - The `KeyValueStore` trait and the in-memory backend
//! - [`file`] - One-JSON-file-per-key backend
//! - [`store`] - Store handle handing out repositories
//! - [`repository`] - Typed repositories (products, cart, coupons)
//! - [`seed`] - First-run data
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use shopfront_store::Store;
//!
//! let store = Store::in_memory();
//! let catalog = store.products().load().unwrap();
//! assert!(catalog.get("p1").is_some());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod kv;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use store::Store;

// Repository re-exports for convenience
pub use repository::cart::CartRepository;
pub use repository::coupon::CouponRepository;
pub use repository::product::ProductRepository;
