//! # API Error Type
//!
//! Unified error type for command handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shopfront                              │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ├── StoreError ──────────────► STORAGE_ERROR      (error)      │
//! │         ├── CoreError::Validation ───► VALIDATION_ERROR   (error)      │
//! │         ├── CoreError::InsufficientStock ► INSUFFICIENT_STOCK (warning)│
//! │         ├── CoreError::CouponIneligible ─► COUPON_INELIGIBLE (warning) │
//! │         └── ... ─────────────────────► ApiError                         │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                         notification (kind from the code)               │
//! │                         + serialized error to the front-end             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_core::{CoreError, Money, NotificationKind};
use shopfront_store::StoreError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Only 3 of Product 1 left in stock"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or coupon not found
    NotFound,

    /// Admin input validation failed
    ValidationError,

    /// Reading or writing the data directory failed
    StorageError,

    /// Requested quantity exceeds stock
    InsufficientStock,

    /// Percentage coupon below the minimum cart total
    CouponIneligible,

    /// Coupon code already taken
    DuplicateCoupon,

    /// Checkout with nothing in the cart
    EmptyCart,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// How the failure is shown to the user. Rejections the user can fix by
    /// adjusting the cart are warnings.
    pub fn notification_kind(&self) -> NotificationKind {
        match self.code {
            ErrorCode::InsufficientStock | ErrorCode::CouponIneligible | ErrorCode::EmptyCart => {
                NotificationKind::Warning
            }
            _ => NotificationKind::Error,
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidKey(key) => {
                tracing::error!("Invalid store key: {}", key);
                ApiError::internal("Storage key rejected")
            }
            StoreError::Io { key, source } => {
                tracing::error!(key = %key, "Store I/O failed: {}", source);
                ApiError::new(ErrorCode::StorageError, "Could not save your changes")
            }
            StoreError::Serialization { key, message } => {
                tracing::error!(key = %key, "Serialization failed: {}", message);
                ApiError::new(ErrorCode::StorageError, "Could not save your changes")
            }
            StoreError::Internal(e) => {
                tracing::error!("Internal store error: {}", e);
                ApiError::new(ErrorCode::StorageError, "Storage operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::CouponNotFound(code) => ApiError::not_found("Coupon", &code),
            CoreError::InsufficientStock {
                name, available, ..
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!("Only {} of {} left in stock", available, name),
            ),
            CoreError::CouponIneligible { minimum, .. } => ApiError::new(
                ErrorCode::CouponIneligible,
                format!(
                    "Percentage coupons need a cart total of at least {}",
                    Money::new(minimum)
                ),
            ),
            CoreError::DuplicateCouponCode(code) => ApiError::new(
                ErrorCode::DuplicateCoupon,
                format!("Coupon code {} already exists", code),
            ),
            CoreError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, "Your cart is empty"),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::ValidationError;

    #[test]
    fn test_stock_error_is_warning() {
        let err = ApiError::from(CoreError::InsufficientStock {
            product_id: "p1".to_string(),
            name: "Product 1".to_string(),
            available: 3,
            requested: 5,
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.message, "Only 3 of Product 1 left in stock");
        assert_eq!(err.notification_kind(), NotificationKind::Warning);
    }

    #[test]
    fn test_coupon_ineligible_message() {
        let err = ApiError::from(CoreError::CouponIneligible {
            code: "PERCENT10".to_string(),
            minimum: 10_000,
            current: 9_999,
        });
        assert_eq!(
            err.message,
            "Percentage coupons need a cart total of at least 10,000"
        );
        assert_eq!(err.notification_kind(), NotificationKind::Warning);
    }

    #[test]
    fn test_validation_is_error() {
        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "code".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.notification_kind(), NotificationKind::Error);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::from(CoreError::DuplicateCouponCode("SPRING".to_string()));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "DUPLICATE_COUPON");
        assert_eq!(json["message"], "Coupon code SPRING already exists");
    }

    #[test]
    fn test_store_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = ApiError::from(StoreError::io("cart", io));
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
