//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the key and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in shopfront-app) ← Serialized for the front-end            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    ///
    /// ## When This Occurs
    /// - Data directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("Serialization failed for key '{key}': {message}")]
    Serialization { key: String, message: String },

    /// Keys are file names; only `[A-Za-z0-9_-]` is accepted.
    #[error("Invalid key: '{0}'")]
    InvalidKey(String),

    /// Internal store error (e.g. a poisoned lock).
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }

    pub fn serialization(key: impl Into<String>, err: serde_json::Error) -> Self {
        StoreError::Serialization {
            key: key.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::InvalidKey("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid key: '../etc'");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::io("cart", io);
        assert_eq!(err.to_string(), "I/O error for key 'cart': denied");
    }
}
