// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `NotificationKind` enum
//! used throughout the notification system.

use crate::config::{BANNER_SECS, CONFIRMATION_SECS, UNDO_TOAST_SECS};
use crate::domain::photo::PhotoId;
use crate::domain::ui::NotificationTtl;
use crate::i18n::I18n;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind determines display duration and which surfaces show the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Reversible action; shown as toast and banner for 10s.
    Undo,
    /// Completed batch action (4s).
    #[default]
    Confirmation,
    /// Short status line in the system banner only (3s).
    Banner,
}

impl NotificationKind {
    #[must_use]
    pub fn default_ttl(self) -> NotificationTtl {
        match self {
            NotificationKind::Undo => NotificationTtl::from_secs(UNDO_TOAST_SECS),
            NotificationKind::Confirmation => NotificationTtl::from_secs(CONFIRMATION_SECS),
            NotificationKind::Banner => NotificationTtl::from_secs(BANNER_SECS),
        }
    }

    /// Whether the message also appears as the bottom toast.
    #[must_use]
    pub fn shows_toast(self) -> bool {
        matches!(self, NotificationKind::Undo)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Undo => "undo",
            NotificationKind::Confirmation => "confirmation",
            NotificationKind::Banner => "banner",
        }
    }
}

/// Action performed when the user taps "Undo" on a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// Put soft-deleted photos back into the library.
    Restore(Vec<PhotoId>),
}

/// An ephemeral message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    /// The i18n key for the notification message.
    message_key: String,
    message_args: Vec<(String, String)>,
    undo: Option<UndoAction>,
    ttl: NotificationTtl,
}

impl Notification {
    /// Creates a notification with the kind's default display duration.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(kind: NotificationKind, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message_key: message_key.into(),
            message_args: Vec::new(),
            undo: None,
            ttl: kind.default_ttl(),
        }
    }

    /// Creates an undo notification carrying the action to revert.
    pub fn undo(message_key: impl Into<String>, action: UndoAction) -> Self {
        let mut notification = Self::new(NotificationKind::Undo, message_key);
        notification.undo = Some(action);
        notification
    }

    pub fn confirmation(message_key: impl Into<String>) -> Self {
        Self::new(NotificationKind::Confirmation, message_key)
    }

    pub fn banner(message_key: impl Into<String>) -> Self {
        Self::new(NotificationKind::Banner, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the kind's default display duration.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.ttl = NotificationTtl::new(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Looks up a single interpolation argument.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.message_args
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn undo_action(&self) -> Option<&UndoAction> {
        self.undo.as_ref()
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl.as_duration()
    }

    /// Resolves the message through the active locale.
    #[must_use]
    pub fn render(&self, i18n: &I18n) -> String {
        if self.message_args.is_empty() {
            return i18n.tr(&self.message_key);
        }
        let args: Vec<(&str, &str)> = self
            .message_args
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(&self.message_key, &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::banner("test");
        let n2 = Notification::banner("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn kinds_have_expected_durations() {
        assert_eq!(Notification::undo("k", UndoAction::Restore(vec![])).ttl(), Duration::from_secs(10));
        assert_eq!(Notification::confirmation("k").ttl(), Duration::from_secs(4));
        assert_eq!(Notification::banner("k").ttl(), Duration::from_secs(3));
    }

    #[test]
    fn only_undo_kind_shows_toast() {
        assert!(NotificationKind::Undo.shows_toast());
        assert!(!NotificationKind::Confirmation.shows_toast());
        assert!(!NotificationKind::Banner.shows_toast());
    }

    #[test]
    fn auto_dismiss_overrides_and_clamps_duration() {
        let n = Notification::banner("k").auto_dismiss(Duration::from_millis(5));
        assert_eq!(n.ttl(), Duration::from_secs(1));
    }

    #[test]
    fn args_are_kept_in_order_and_searchable() {
        let n = Notification::confirmation("k")
            .with_arg("count", "2")
            .with_arg("album", "New Album");
        assert_eq!(n.message_args().len(), 2);
        assert_eq!(n.arg("count"), Some("2"));
        assert_eq!(n.arg("missing"), None);
    }

    #[test]
    fn render_resolves_message_and_arguments() {
        let i18n = I18n::default();
        let n = Notification::undo(
            "notification-moved-to-recently-deleted",
            UndoAction::Restore(vec![PhotoId::new("3")]),
        )
        .with_arg("days", "40");
        assert_eq!(n.render(&i18n), "Moved to Recently Deleted (40 days)");

        let n = Notification::banner("notification-pro-pipeline-enabled");
        assert_eq!(n.render(&i18n), "Pro Pipeline Enabled (No AI)");
    }
}
