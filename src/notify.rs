//! User-facing notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store reports every use-case outcome here. Presentation is
//! up to the front end: a UI drains [`NotificationLog`] into toasts, the CLI
//! prints it after each command.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Positive,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

impl Notification {
    pub fn positive(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Positive }
    }

    pub fn negative(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Negative }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Queue of notifications waiting to be shown.
#[derive(Clone, Debug, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notification, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Copy of the pending notifications without consuming them.
    #[must_use]
    pub fn pending(&self) -> Vec<Notification> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Positive => tracing::info!(message = %notification.message, "notify"),
            NotificationKind::Negative => tracing::warn!(message = %notification.message, "notify"),
        }
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).push(notification);
    }
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
