// SPDX-License-Identifier: MPL-2.0
//! Ephemeral notification system.
//!
//! At most one notification is active at a time. It is rendered in the
//! system banner and, for undo-style messages, also as the toast. Posting a
//! new notification replaces the current one and cancels its expiry.
//!
//! # Usage
//!
//! ```
//! use photon::notifications::{Notification, NotificationScheduler};
//! use tokio::time::Instant;
//!
//! let mut scheduler = NotificationScheduler::new();
//! let expiry = scheduler.post(
//!     Notification::confirmation("notification-added-to-new-album")
//!         .with_arg("count", "2")
//!         .with_arg("album", "New Album"),
//!     Instant::now(),
//! );
//! // ... after `expiry.after` has elapsed:
//! scheduler.expire(expiry.token);
//! assert!(scheduler.is_idle());
//! ```

mod notification;
mod scheduler;

pub use notification::{Notification, NotificationId, NotificationKind, UndoAction};
pub use scheduler::{ActiveNotification, ExpiryToken, NotificationScheduler, ScheduledExpiry};
