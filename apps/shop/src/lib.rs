//! # Shopfront App Library
//!
//! Session layer for the Shopfront storefront: state, commands and startup.
//!
//! ## Module Organization
//! ```text
//! shopfront_app/
//! ├── lib.rs              ◄─── You are here (logging setup & run)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── shop.rs         ◄─── Catalog, cart, coupons, selected coupon
//! │   ├── notifications.rs◄─── Toast queue and notifiers
//! │   └── config.rs       ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs          ◄─── Command exports
//! │   ├── product.rs      ◄─── Listing/search/CRUD commands
//! │   ├── cart.rs         ◄─── Cart manipulation commands
//! │   ├── coupon.rs       ◄─── Coupon selection/CRUD commands
//! │   ├── order.rs        ◄─── Checkout
//! │   ├── notification.rs ◄─── Toast polling
//! │   └── config.rs       ◄─── Configuration retrieval
//! └── error.rs            ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use shopfront_store::{JsonFileStore, Store};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{cart, product};
use state::{ConfigState, ShopState, TracingNotifier};

/// Opens the shop, prints the storefront listing, and saves on the way out.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • SHOPFRONT_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Open Data Directory ──────────────────────────────────────────────► │
/// │     • One JSON document per collection                                  │
/// │     • Missing documents fall back to the seed data                      │
/// │                                                                         │
/// │  4. Load Session ─────────────────────────────────────────────────────► │
/// │     • Catalog, cart, coupon book                                        │
/// │                                                                         │
/// │  5. Print listing and cart, then save all collections                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(search: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Shopfront");

    let config = ConfigState::from_env();
    info!(data_dir = ?config.data_dir, store = %config.store_name, "Configuration loaded");

    let store = Store::<JsonFileStore>::open(config.data_dir.clone())?;
    let shop = ShopState::load(store, Some(Box::new(TracingNotifier)))?;

    println!("{}", config.store_name);
    for listing in product::list_products(&shop, search.as_deref()) {
        let best = if listing.best_rate.is_zero() {
            String::new()
        } else {
            format!("  (up to {} off)", config.format_rate(listing.best_rate))
        };
        println!(
            "  {:<6} {:<24} {:>12}  stock {:>3}{}",
            listing.product.id,
            listing.product.name,
            config.display_price(&listing),
            listing.remaining_stock,
            best
        );
    }

    let response = cart::get_cart(&shop);
    println!();
    println!(
        "Cart: {} item(s), {} → {}",
        response.total_quantity,
        config.format_price(response.totals.total_before_discount),
        config.format_price(response.totals.total_after_discount)
    );
    info!(cart = %serde_json::to_string(&response)?, "Cart snapshot");

    shop.save_all()?;
    info!("Shopfront state saved");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront=trace` - Show trace for shopfront crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopfront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
