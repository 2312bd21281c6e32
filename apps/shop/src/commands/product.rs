//! # Product Commands
//!
//! Catalog browsing for the storefront and product administration.

use shopfront_core::{NotificationKind, Product, ProductDraft, ProductListing, ProductPatch};
use shopfront_store::KeyValueStore;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ShopState;

/// Storefront listings matching `search` (empty or absent lists everything).
///
/// ## Returns
/// Each product with its remaining stock, sold-out flag and best tier rate
pub fn list_products<S: KeyValueStore>(
    shop: &ShopState<S>,
    search: Option<&str>,
) -> Vec<ProductListing> {
    let search = search.unwrap_or_default();
    debug!(search = %search, "list_products command");
    shop.catalog().listings(shop.cart(), search)
}

/// Gets a product by id.
pub fn get_product<S: KeyValueStore>(shop: &ShopState<S>, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");
    match shop.catalog().require(id) {
        Ok(product) => Ok(product.clone()),
        Err(err) => shop.reject(err),
    }
}

/// Adds a product under a generated id.
pub fn add_product<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    draft: ProductDraft,
) -> Result<Product, ApiError> {
    debug!(name = %draft.name, "add_product command");

    let mut next = shop.catalog().clone();
    let product = match next.add_product(draft) {
        Ok(product) => product,
        Err(err) => return shop.reject(err),
    };
    if let Err(err) = shop.commit_catalog(next) {
        return shop.reject(err);
    }

    info!(id = %product.id, name = %product.name, "Product added");
    shop.notify("Product added", NotificationKind::Success);
    Ok(product)
}

/// Applies a partial edit to a product.
///
/// Cart lines keep the snapshot taken when they were added.
pub fn update_product<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    id: &str,
    patch: ProductPatch,
) -> Result<Product, ApiError> {
    debug!(id = %id, "update_product command");

    let mut next = shop.catalog().clone();
    let product = match next.update_product(id, patch) {
        Ok(product) => product,
        Err(err) => return shop.reject(err),
    };
    if let Err(err) = shop.commit_catalog(next) {
        return shop.reject(err);
    }

    info!(id = %id, "Product updated");
    shop.notify("Product updated", NotificationKind::Success);
    Ok(product)
}

/// Deletes a product from the catalog.
pub fn delete_product<S: KeyValueStore>(
    shop: &mut ShopState<S>,
    id: &str,
) -> Result<Product, ApiError> {
    debug!(id = %id, "delete_product command");

    let mut next = shop.catalog().clone();
    let removed = match next.remove_product(id) {
        Ok(removed) => removed,
        Err(err) => return shop.reject(err),
    };
    if let Err(err) = shop.commit_catalog(next) {
        return shop.reject(err);
    }

    info!(id = %id, "Product deleted");
    shop.notify("Product deleted", NotificationKind::Success);
    Ok(removed)
}

// =============================================================================
// Unit Tests
// =============================================================================
