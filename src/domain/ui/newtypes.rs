// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Dynamic Type Bounds
// =============================================================================

/// Dynamic type scale bounds (1 to 5).
pub mod type_scale_bounds {
    /// Smallest text scale.
    pub const MIN: u8 = 1;
    /// Largest text scale.
    pub const MAX: u8 = 5;
    /// Default text scale.
    pub const DEFAULT: u8 = 1;
}

// =============================================================================
// DynamicTypeScale
// =============================================================================

/// Accessibility text scale, guaranteed to be within 1–5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DynamicTypeScale(u8);

impl DynamicTypeScale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(type_scale_bounds::MIN, type_scale_bounds::MAX))
    }

    /// Returns the raw scale value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= type_scale_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= type_scale_bounds::MAX
    }
}

impl Default for DynamicTypeScale {
    fn default() -> Self {
        Self(type_scale_bounds::DEFAULT)
    }
}

// =============================================================================
// Notification TTL Bounds
// =============================================================================

/// Notification time-to-live bounds (1 to 30 seconds).
pub mod ttl_bounds {
    /// Shortest display duration in milliseconds.
    pub const MIN_MS: u64 = 1_000;
    /// Longest display duration in milliseconds.
    pub const MAX_MS: u64 = 30_000;
}

// =============================================================================
// NotificationTtl
// =============================================================================

/// How long an ephemeral notification stays visible, within 1–30 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NotificationTtl(Duration);

impl NotificationTtl {
    /// Creates a TTL, clamping it to the valid range.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration.clamp(
            Duration::from_millis(ttl_bounds::MIN_MS),
            Duration::from_millis(ttl_bounds::MAX_MS),
        ))
    }

    /// Creates a TTL from whole seconds.
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_scale_clamps() {
        assert_eq!(DynamicTypeScale::new(0).value(), type_scale_bounds::MIN);
        assert_eq!(DynamicTypeScale::new(9).value(), type_scale_bounds::MAX);
        assert_eq!(DynamicTypeScale::new(3).value(), 3);
    }

    #[test]
    fn type_scale_default_is_smallest() {
        let scale = DynamicTypeScale::default();
        assert_eq!(scale.value(), type_scale_bounds::DEFAULT);
        assert!(scale.is_min());
        assert!(!scale.is_max());
    }

    #[test]
    fn ttl_clamps_to_bounds() {
        assert_eq!(
            NotificationTtl::new(Duration::from_millis(10)).as_duration(),
            Duration::from_millis(ttl_bounds::MIN_MS)
        );
        assert_eq!(
            NotificationTtl::from_secs(120).as_duration(),
            Duration::from_millis(ttl_bounds::MAX_MS)
        );
        assert_eq!(
            NotificationTtl::from_secs(10).as_duration(),
            Duration::from_secs(10)
        );
    }
}
