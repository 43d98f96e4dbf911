// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related value objects that are independent
//! of any presentation framework.

pub mod newtypes;
pub mod view;

// Re-export commonly used types
pub use newtypes::{DynamicTypeScale, NotificationTtl};
pub use view::View;
