// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Notification and error texts are stored as message keys plus named arguments and
//! only resolved to strings here, at render time.
//!
//! # Features
//!
//! - Locale selection from an explicit override or the config file
//! - Translation files embedded at build time
//! - Runtime language switching
//! - Fallback to `en-US` when the requested locale is unavailable

pub mod fluent;

pub use fluent::I18n;
