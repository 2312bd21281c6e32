//! # JSON File Store
//!
//! Keeps each key in its own file under a data directory:
//!
//! ```text
//! <data_dir>/
//! ├── products.json
//! ├── coupons.json
//! └── cart.json        (absent while the cart is empty)
//! ```
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crash mid-write leaves the previous value intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

/// Directory-backed [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.display().to_string(), e))?;
        info!(path = %dir.display(), "Opened data directory");
        Ok(JsonFileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

/// Keys become file names, so anything that could escape the directory is
/// refused.
fn validate_key(key: &str) -> StoreResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl KeyValueStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StoreError::io(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(key, e))?;
        debug!(key = %key, bytes = value.len(), "Wrote key");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key = %key, "Removed key");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("data")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_creates_directory() {
        let (_dir, store) = open_temp();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_round_trip_through_file() {
        let (_dir, store) = open_temp();
        store.save("coupons", &vec!["A", "B"]).unwrap();

        assert!(store.path_for("coupons").unwrap().is_file());
        let back: Vec<String> = store.load_or("coupons", Vec::new()).unwrap();
        assert_eq!(back, vec!["A", "B"]);
    }

    #[test]
    fn test_missing_file_is_none() {
        let (_dir, store) = open_temp();
        assert_eq!(store.get_raw("cart").unwrap(), None);
        store.remove("cart").unwrap();
    }

    #[test]
    fn test_remove_deletes_file() {
        let (_dir, store) = open_temp();
        store.set_raw("cart", "[]").unwrap();
        store.remove("cart").unwrap();
        assert!(!store.path_for("cart").unwrap().exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (_dir, store) = open_temp();
        assert!(matches!(
            store.set_raw("../escape", "{}"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(store.get_raw("").is_err());
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let (_dir, store) = open_temp();
        fs::write(store.path_for("products").unwrap(), "not json").unwrap();
        let products: Vec<String> = store.load_or("products", vec!["seed".to_string()]).unwrap();
        assert_eq!(products, vec!["seed"]);
    }
}
