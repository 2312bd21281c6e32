//! # Notification Commands
//!
//! Polled by the front-end to render toasts. Expired entries are dropped on
//! read.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::state::{Notification, NotificationCenter};

/// Notifications still visible at `now`, oldest first.
pub fn get_notifications(center: &NotificationCenter, now: DateTime<Utc>) -> Vec<Notification> {
    debug!("get_notifications command");
    center.active(now)
}

/// Closes one notification. Returns false if it had already gone.
pub fn dismiss_notification(center: &NotificationCenter, id: &str) -> bool {
    debug!(id = %id, "dismiss_notification command");
    center.dismiss(id)
}

pub fn clear_notifications(center: &NotificationCenter) {
    debug!("clear_notifications command");
    center.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shopfront_core::NotificationKind;

    #[test]
    fn test_notifications_expire_and_dismiss() {
        let center = NotificationCenter::new(3_000);
        let now = Utc::now();
        let first = center.push("Added to cart", NotificationKind::Success, now);
        center.push("Coupon applied", NotificationKind::Success, now + Duration::seconds(2));

        assert_eq!(get_notifications(&center, now).len(), 2);
        assert!(dismiss_notification(&center, &first));
        assert!(!dismiss_notification(&center, &first));

        let later = now + Duration::seconds(6);
        assert!(get_notifications(&center, later).is_empty());
    }

    #[test]
    fn test_clear_notifications() {
        let center = NotificationCenter::new(3_000);
        center.push("Product added", NotificationKind::Success, Utc::now());
        clear_notifications(&center);
        assert!(center.is_empty());
    }
}
