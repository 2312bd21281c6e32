//! # Store Handle
//!
//! Owns a [`KeyValueStore`] and hands out repositories over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  App startup                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::open(data_dir) ← JsonFileStore                                 │
//! │  Store::in_memory()    ← MemoryStore (tests)                           │
//! │       │                                                                 │
//! │       ├── store.products()  → ProductRepository                        │
//! │       ├── store.cart()      → CartRepository                           │
//! │       └── store.coupons()   → CouponRepository                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use crate::error::StoreResult;
use crate::file::JsonFileStore;
use crate::kv::{KeyValueStore, MemoryStore};
use crate::repository::{CartRepository, CouponRepository, ProductRepository};

/// Repository access over a key-value backend.
#[derive(Debug)]
pub struct Store<S> {
    kv: S,
}

impl<S: KeyValueStore> Store<S> {
    pub fn new(kv: S) -> Self {
        Store { kv }
    }

    pub fn products(&self) -> ProductRepository<'_, S> {
        ProductRepository::new(&self.kv)
    }

    pub fn cart(&self) -> CartRepository<'_, S> {
        CartRepository::new(&self.kv)
    }

    pub fn coupons(&self) -> CouponRepository<'_, S> {
        CouponRepository::new(&self.kv)
    }

    /// The underlying backend.
    pub fn kv(&self) -> &S {
        &self.kv
    }
}

impl Store<JsonFileStore> {
    /// Opens a directory-backed store.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        Ok(Store::new(JsonFileStore::open(dir)?))
    }
}

impl Store<MemoryStore> {
    /// An isolated store that lives as long as the handle.
    pub fn in_memory() -> Self {
        Store::new(MemoryStore::new())
    }
}
