//! # Config Commands
//!
//! Retrieval of the storefront configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (store name in the header)
/// - Price formatting (currency unit, sold-out label)
/// - Notification timeouts
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_returns_copy() {
        let config = ConfigState {
            store_name: "Corner Shop".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(get_config(&config), config);
    }
}
