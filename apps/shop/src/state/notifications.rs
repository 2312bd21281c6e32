//! # Notification State
//!
//! User-facing toasts.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  notify("Coupon applied", Success)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  push ──► { id, kind, message, created_at, expires_at }                │
//! │       │                                                                 │
//! │       ├── dismiss(id) ──► gone                                          │
//! │       ├── clear()     ──► all gone                                      │
//! │       └── active(now) ──► expired entries pruned, rest returned         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no timer: expiry is a timestamp checked whenever the list is
//! read.
//!
//! ## Thread Safety
//! The queue sits behind a `Mutex` so one `Arc<NotificationCenter>` can be
//! handed to the session as its notifier while the front-end polls it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use shopfront_core::{NotificationKind, Notifier};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// A queued notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// In-memory notification queue.
#[derive(Debug)]
pub struct NotificationCenter {
    entries: Mutex<Vec<Notification>>,
    lifetime: Duration,
}

impl NotificationCenter {
    /// Creates a center whose notifications live for `lifetime_ms`.
    pub fn new(lifetime_ms: u64) -> Self {
        let lifetime_ms = i64::try_from(lifetime_ms).unwrap_or(i64::MAX);
        NotificationCenter {
            entries: Mutex::new(Vec::new()),
            lifetime: Duration::milliseconds(lifetime_ms),
        }
    }

    // A poisoned lock still guards a valid Vec.
    fn entries(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queues a notification created at `now` and returns its id.
    pub fn push(&self, message: &str, kind: NotificationKind, now: DateTime<Utc>) -> String {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            kind,
            message: message.to_string(),
            created_at: now,
            expires_at: now + self.lifetime,
        };
        let id = notification.id.clone();
        debug!(id = %id, kind = kind.as_str(), "Notification queued");
        self.entries().push(notification);
        id
    }

    /// Notifications still visible at `now`, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Notification> {
        let mut entries = self.entries();
        entries.retain(|n| !n.is_expired(now));
        entries.clone()
    }

    /// Removes one notification. Returns whether it was present.
    pub fn dismiss(&self, id: &str) -> bool {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|n| n.id != id);
        entries.len() != before
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    /// Queued count, including entries that have expired but not yet been
    /// pruned.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.push(message, kind, Utc::now());
    }
}

/// Notifier that only writes to the log. Used by the command-line binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Success => info!(notification = %message),
            NotificationKind::Warning => warn!(notification = %message),
            NotificationKind::Error => error!(notification = %message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
    }

    #[test]
    fn test_notifications_expire_after_lifetime() {
        let center = NotificationCenter::new(3_000);
        center.push("Added to cart", NotificationKind::Success, at(0));
        center.push("Only 2 left", NotificationKind::Warning, at(1_000));

        assert_eq!(center.active(at(2_999)).len(), 2);

        let remaining = center.active(at(3_000));
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "Only 2 left");

        assert!(center.active(at(4_000)).is_empty());
        assert!(center.is_empty());
    }

    #[test]
    fn test_dismiss_and_clear() {
        let center = NotificationCenter::new(3_000);
        let id = center.push("one", NotificationKind::Error, at(0));
        center.push("two", NotificationKind::Error, at(0));

        assert!(center.dismiss(&id));
        assert!(!center.dismiss(&id));
        assert_eq!(center.len(), 1);

        center.clear();
        assert!(center.is_empty());
    }

    #[test]
    fn test_center_as_notifier() {
        let center = NotificationCenter::new(60_000);
        center.notify("Coupon applied", NotificationKind::Success);
        let active = center.active(Utc::now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, NotificationKind::Success);
    }

    #[test]
    fn test_notification_json_shape() {
        let center = NotificationCenter::new(3_000);
        center.push("hi", NotificationKind::Warning, at(0));
        let json = serde_json::to_value(&center.active(at(0))[0]).unwrap();
        assert_eq!(json["kind"], "warning");
        assert!(json.get("expiresAt").is_some());
    }
}
