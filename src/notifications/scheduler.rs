// SPDX-License-Identifier: MPL-2.0
//! Single-slot notification lifecycle.
//!
//! The scheduler holds at most one active notification. Every `post` and
//! every `dismiss` advances a generation counter; an expiry only clears the
//! slot when it carries the token of the notification currently shown, so a
//! timer started for a superseded message can never clear a newer one.

use super::notification::{Notification, UndoAction};
use std::time::Duration;
use tokio::time::Instant;

/// Identity of one scheduled expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpiryToken(u64);

/// What the caller must arrange after a `post`: deliver `token` back to
/// [`NotificationScheduler::expire`] once `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledExpiry {
    pub token: ExpiryToken,
    pub after: Duration,
}

/// The notification currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotification {
    notification: Notification,
    token: ExpiryToken,
    posted_at: Instant,
    expires_at: Instant,
}

impl ActiveNotification {
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn token(&self) -> ExpiryToken {
        self.token
    }

    #[must_use]
    pub fn posted_at(&self) -> Instant {
        self.posted_at
    }

    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Time left before expiry, saturating at zero.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

/// Single-slot timer: `Idle` or `Active(message, expiry)`.
#[derive(Debug, Default)]
pub struct NotificationScheduler {
    generation: u64,
    active: Option<ActiveNotification>,
}

impl NotificationScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, replacing and invalidating any active one.
    pub fn post(&mut self, notification: Notification, now: Instant) -> ScheduledExpiry {
        let token = self.next_token();
        let after = notification.ttl();
        self.active = Some(ActiveNotification {
            notification,
            token,
            posted_at: now,
            expires_at: now + after,
        });
        ScheduledExpiry { token, after }
    }

    /// Clears the slot if `token` still identifies the active notification.
    ///
    /// Returns the expired notification, or `None` for a stale token.
    pub fn expire(&mut self, token: ExpiryToken) -> Option<Notification> {
        if self.active.as_ref().map(ActiveNotification::token) != Some(token) {
            return None;
        }
        self.active.take().map(|active| active.notification)
    }

    /// Clears the slot early. Any pending expiry becomes stale.
    pub fn dismiss(&mut self) -> Option<Notification> {
        // Bumping the generation keeps a later expire() from matching anything.
        self.generation = self.generation.wrapping_add(1);
        self.active.take().map(|active| active.notification)
    }

    /// Takes the undo action of the active notification, dismissing it.
    ///
    /// Leaves the slot untouched if the active notification has no undo action.
    pub fn take_undo(&mut self) -> Option<UndoAction> {
        let action = self
            .active
            .as_ref()
            .and_then(|active| active.notification.undo_action())
            .cloned()?;
        self.dismiss();
        Some(action)
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveNotification> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// The system banner shows every active notification.
    #[must_use]
    pub fn banner(&self) -> Option<&Notification> {
        self.active.as_ref().map(ActiveNotification::notification)
    }

    /// The toast only shows undo-style notifications.
    #[must_use]
    pub fn toast(&self) -> Option<&Notification> {
        self.banner().filter(|n| n.kind().shows_toast())
    }

    fn next_token(&mut self) -> ExpiryToken {
        self.generation = self.generation.wrapping_add(1);
        ExpiryToken(self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::PhotoId;

    #[test]
    fn post_activates_and_matching_expiry_returns_to_idle() {
        let mut scheduler = NotificationScheduler::new();
        let now = Instant::now();
        let scheduled = scheduler.post(Notification::banner("a"), now);

        assert!(!scheduler.is_idle());
        assert_eq!(scheduled.after, Duration::from_secs(3));
        assert!(scheduler.expire(scheduled.token).is_some());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn superseded_token_does_not_clear_newer_message() {
        let mut scheduler = NotificationScheduler::new();
        let now = Instant::now();
        let first = scheduler.post(
            Notification::undo("a", UndoAction::Restore(vec![PhotoId::new("1")])),
            now,
        );
        let second = scheduler.post(Notification::banner("b"), now);

        assert_ne!(first.token, second.token);
        assert!(scheduler.expire(first.token).is_none());
        assert_eq!(scheduler.banner().map(Notification::message_key), Some("b"));
        assert!(scheduler.expire(second.token).is_some());
    }

    #[test]
    fn dismiss_invalidates_pending_expiry() {
        let mut scheduler = NotificationScheduler::new();
        let scheduled = scheduler.post(Notification::banner("a"), Instant::now());

        assert!(scheduler.dismiss().is_some());
        assert!(scheduler.expire(scheduled.token).is_none());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn dismiss_when_idle_is_noop() {
        let mut scheduler = NotificationScheduler::new();
        assert!(scheduler.dismiss().is_none());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn stale_token_after_dismiss_and_repost_is_ignored() {
        let mut scheduler = NotificationScheduler::new();
        let now = Instant::now();
        let old = scheduler.post(Notification::banner("a"), now);
        scheduler.dismiss();
        let fresh = scheduler.post(Notification::banner("b"), now);

        assert!(scheduler.expire(old.token).is_none());
        assert!(!scheduler.is_idle());
        assert!(scheduler.expire(fresh.token).is_some());
    }

    #[test]
    fn toast_only_shows_undo_kind() {
        let mut scheduler = NotificationScheduler::new();
        let now = Instant::now();
        scheduler.post(Notification::banner("a"), now);
        assert!(scheduler.banner().is_some());
        assert!(scheduler.toast().is_none());

        scheduler.post(Notification::undo("b", UndoAction::Restore(vec![])), now);
        assert!(scheduler.toast().is_some());
    }

    #[test]
    fn take_undo_dismisses_only_undoable_notifications() {
        let mut scheduler = NotificationScheduler::new();
        let now = Instant::now();
        scheduler.post(Notification::banner("a"), now);
        assert!(scheduler.take_undo().is_none());
        assert!(!scheduler.is_idle());

        let ids = vec![PhotoId::new("4")];
        scheduler.post(Notification::undo("b", UndoAction::Restore(ids.clone())), now);
        assert_eq!(scheduler.take_undo(), Some(UndoAction::Restore(ids)));
        assert!(scheduler.is_idle());
    }

    #[test]
    fn active_records_post_time_and_remaining() {
        let mut scheduler = NotificationScheduler::new();
        let now = Instant::now();
        scheduler.post(Notification::banner("a"), now);
        let active = scheduler.active().expect("active");
        assert_eq!(active.posted_at(), now);
        assert_eq!(active.remaining(now + Duration::from_secs(1)), Duration::from_secs(2));
        assert_eq!(active.remaining(now + Duration::from_secs(9)), Duration::ZERO);
    }
}
