// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Display duration per notification kind
//! - **Recently Deleted**: Retention window for soft-deleted photos
//! - **Search**: Delegate timeout and recent-search history
//! - **Diagnostics**: Activity buffer capacity

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Display duration of undo-style toasts (in seconds).
pub const UNDO_TOAST_SECS: u64 = 10;

/// Display duration of batch confirmations (in seconds).
pub const CONFIRMATION_SECS: u64 = 4;

/// Display duration of banner-only status messages (in seconds).
pub const BANNER_SECS: u64 = 3;

// ==========================================================================
// Recently Deleted Defaults
// ==========================================================================

/// Days a soft-deleted photo is kept before it is purged.
pub const RECENTLY_DELETED_RETENTION_DAYS: i64 = 40;

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Default time budget for the delegated ranking call (in seconds).
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 8;

/// Minimum delegate timeout (in seconds).
pub const MIN_SEARCH_TIMEOUT_SECS: u64 = 1;

/// Maximum delegate timeout (in seconds).
pub const MAX_SEARCH_TIMEOUT_SECS: u64 = 60;

/// Number of distinct queries kept in the recent-search list.
pub const RECENT_SEARCH_CAPACITY: usize = 10;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of activity events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum activity buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum activity buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Notification ordering: undo toasts outlive confirmations, which outlive banners
    assert!(BANNER_SECS > 0);
    assert!(CONFIRMATION_SECS >= BANNER_SECS);
    assert!(UNDO_TOAST_SECS > CONFIRMATION_SECS);

    assert!(RECENTLY_DELETED_RETENTION_DAYS > 0);

    // Search timeout validation
    assert!(MIN_SEARCH_TIMEOUT_SECS > 0);
    assert!(MAX_SEARCH_TIMEOUT_SECS >= MIN_SEARCH_TIMEOUT_SECS);
    assert!(DEFAULT_SEARCH_TIMEOUT_SECS >= MIN_SEARCH_TIMEOUT_SECS);
    assert!(DEFAULT_SEARCH_TIMEOUT_SECS <= MAX_SEARCH_TIMEOUT_SECS);
    assert!(RECENT_SEARCH_CAPACITY > 0);

    // Diagnostics buffer validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults_are_valid() {
        assert_eq!(UNDO_TOAST_SECS, 10);
        assert!((3..=4).contains(&CONFIRMATION_SECS));
        assert!((3..=4).contains(&BANNER_SECS));
    }

    #[test]
    fn search_timeout_defaults_are_valid() {
        assert!(DEFAULT_SEARCH_TIMEOUT_SECS >= MIN_SEARCH_TIMEOUT_SECS);
        assert!(DEFAULT_SEARCH_TIMEOUT_SECS <= MAX_SEARCH_TIMEOUT_SECS);
    }

    #[test]
    fn retention_matches_recently_deleted_copy() {
        assert_eq!(RECENTLY_DELETED_RETENTION_DAYS, 40);
    }
}
