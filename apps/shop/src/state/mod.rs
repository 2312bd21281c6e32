//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────────┐  ┌──────────────────┐  │
//! │  │    ShopState     │  │  NotificationCenter  │  │   ConfigState    │  │
//! │  │                  │  │                      │  │                  │  │
//! │  │  Catalog         │  │  Arc, Mutex<Vec<..>> │  │  store_name      │  │
//! │  │  Cart            │◄─┤  (the session's      │  │  data_dir        │  │
//! │  │  CouponBook      │  │   notifier)          │  │  currency_unit   │  │
//! │  │  selected coupon │  │                      │  │                  │  │
//! │  └──────────────────┘  └──────────────────────┘  └──────────────────┘  │
//! │                                                                         │
//! │  • ShopState: owned by the caller, commands take `&mut`                │
//! │  • NotificationCenter: shared, polled by the front-end                 │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod notifications;
mod shop;

pub use config::ConfigState;
pub use notifications::{Notification, NotificationCenter, TracingNotifier};
pub use shop::ShopState;
