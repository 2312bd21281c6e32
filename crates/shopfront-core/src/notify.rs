//! # Notifications
//!
//! The notifier capability the session layer is handed. Core code never
//! knows how messages reach the user; it only says what happened and how
//! serious it is.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
    Success,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Error => "error",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
        }
    }
}

/// Sink for user-facing messages.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind)
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind)
    }
}

/// An absent notifier drops messages.
impl<N: Notifier> Notifier for Option<N> {
    fn notify(&self, message: &str, kind: NotificationKind) {
        if let Some(inner) = self {
            inner.notify(message, kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(String, NotificationKind)>>);

    impl Notifier for Recorder {
        fn notify(&self, message: &str, kind: NotificationKind) {
            self.0.borrow_mut().push((message.to_string(), kind));
        }
    }

    #[test]
    fn test_optional_notifier() {
        let none: Option<Recorder> = None;
        none.notify("dropped", NotificationKind::Error);

        let some = Some(Recorder::default());
        some.notify("kept", NotificationKind::Success);
        let recorded = some.as_ref().map(|r| r.0.borrow().len());
        assert_eq!(recorded, Some(1));
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        assert_eq!(NotificationKind::Error.as_str(), "error");
    }
}
