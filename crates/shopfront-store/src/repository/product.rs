//! # Product Repository
//!
//! Persists the catalog under the `products` key.

use shopfront_core::Catalog;
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::kv::KeyValueStore;
use crate::seed::default_catalog;

/// Storage key for the catalog.
pub const PRODUCTS_KEY: &str = "products";

#[derive(Debug)]
pub struct ProductRepository<'a, S> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> ProductRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        ProductRepository { store }
    }

    /// The stored catalog, or the seed catalog on first run. Stored products
    /// that no longer validate are dropped.
    pub fn load(&self) -> StoreResult<Catalog> {
        let mut catalog = self.store.load_or(PRODUCTS_KEY, default_catalog())?;
        for (id, reason) in catalog.retain_valid() {
            warn!(id = %id, reason = %reason, "Dropping invalid stored product");
        }
        debug!(count = catalog.len(), "Loaded products");
        Ok(catalog)
    }

    pub fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        self.store.save(PRODUCTS_KEY, catalog)
    }

    /// Whether a catalog has ever been written.
    pub fn is_stored(&self) -> StoreResult<bool> {
        Ok(self.store.get_raw(PRODUCTS_KEY)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use shopfront_core::ProductPatch;

    #[test]
    fn test_first_load_returns_seed() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);
        assert!(!repo.is_stored().unwrap());
        assert_eq!(repo.load().unwrap(), default_catalog());
    }

    #[test]
    fn test_save_persists_edits() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);

        let mut catalog = repo.load().unwrap();
        catalog
            .update_product(
                "p1",
                ProductPatch {
                    stock: Some(3),
                    ..ProductPatch::default()
                },
            )
            .unwrap();
        repo.save(&catalog).unwrap();

        let reloaded = repo.load().unwrap();
        assert_eq!(reloaded.require("p1").unwrap().stock, 3);
    }

    #[test]
    fn test_saved_empty_catalog_stays_empty() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);
        repo.save(&Catalog::default()).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_drops_products_that_fail_validation() {
        let store = MemoryStore::new();
        store
            .set_raw(
                PRODUCTS_KEY,
                r#"[
                    {"id": "ok", "name": "Pen", "price": 500, "stock": 3},
                    {"id": "free", "name": "Ghost", "price": 0, "stock": 3},
                    {"id": "blank", "name": "  ", "price": 500, "stock": 3}
                ]"#,
            )
            .unwrap();

        let catalog = ProductRepository::new(&store).load().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("ok").is_some());
    }
}
