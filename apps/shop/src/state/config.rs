//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shopfront_core::{DiscountRate, Money, ProductListing};

/// Fallback data directory when the platform has no app data folder.
const FALLBACK_DATA_DIR: &str = "./shopfront_data";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Where the JSON documents live
    pub data_dir: PathBuf,

    /// Unit label appended to prices, e.g. "10,000원"
    pub currency_unit: String,

    /// Shown instead of a price when nothing can be added
    pub sold_out_label: String,

    /// How long a notification stays visible
    pub notification_lifetime_ms: u64,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Shopfront"
    /// - Data: platform app data directory
    /// - Currency unit: 원
    /// - Notifications: 3 seconds
    fn default() -> Self {
        ConfigState {
            store_name: "Shopfront".to_string(),
            data_dir: default_data_dir(),
            currency_unit: "원".to_string(),
            sold_out_label: "SOLD OUT".to_string(),
            notification_lifetime_ms: 3_000,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPFRONT_STORE_NAME`: Override store name
    /// - `SHOPFRONT_DATA_DIR`: Override the data directory
    /// - `SHOPFRONT_CURRENCY_UNIT`: Override the price unit label
    /// - `SHOPFRONT_NOTIFICATION_MS`: Override notification lifetime
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("SHOPFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(data_dir) = std::env::var("SHOPFRONT_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(unit) = std::env::var("SHOPFRONT_CURRENCY_UNIT") {
            config.currency_unit = unit;
        }

        if let Ok(ms) = std::env::var("SHOPFRONT_NOTIFICATION_MS") {
            if let Ok(ms) = ms.parse::<u64>() {
                config.notification_lifetime_ms = ms;
            }
        }

        config
    }

    /// Formats an amount with separators and the unit label.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_app::state::ConfigState;
    /// use shopfront_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(Money::new(12_345)), "12,345원");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        format!("{}{}", amount, self.currency_unit)
    }

    /// Price cell for a catalog listing; sold-out products show the label.
    pub fn display_price(&self, listing: &ProductListing) -> String {
        if listing.sold_out {
            return self.sold_out_label.clone();
        }
        self.format_price(listing.product.price)
    }

    /// Rate as a whole percentage, e.g. "15%".
    pub fn format_rate(&self, rate: DiscountRate) -> String {
        rate.to_string()
    }
}

/// Platform app data directory.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.shopfront.shop`
/// - **Windows**: `%APPDATA%\shopfront\shop\data`
/// - **Linux**: `~/.local/share/shop`
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "shopfront", "shop")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Product;

    fn listing(sold_out: bool) -> ProductListing {
        ProductListing {
            product: Product {
                id: "p1".to_string(),
                name: "Pen".to_string(),
                price: Money::new(20_000),
                stock: 5,
                description: None,
                is_recommended: false,
                discounts: Vec::new(),
            },
            remaining_stock: if sold_out { 0 } else { 5 },
            sold_out,
            best_rate: DiscountRate::zero(),
        }
    }

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(Money::new(0)), "0원");
        assert_eq!(config.format_price(Money::new(1_234_567)), "1,234,567원");
    }

    #[test]
    fn test_display_price_sold_out() {
        let config = ConfigState::default();
        assert_eq!(config.display_price(&listing(false)), "20,000원");
        assert_eq!(config.display_price(&listing(true)), "SOLD OUT");
    }

    #[test]
    fn test_format_rate() {
        let config = ConfigState::default();
        assert_eq!(config.format_rate(DiscountRate::from_bps(1_500)), "15%");
    }

    #[test]
    fn test_default_notification_lifetime() {
        assert_eq!(ConfigState::default().notification_lifetime_ms, 3_000);
    }
}
