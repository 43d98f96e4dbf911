// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`album`]: Album types ([`AlbumId`](album::AlbumId), [`Album`](album::Album))
//! - [`error`]: Command rejection types ([`CommandError`](error::CommandError))
//! - [`photo`]: Photo records ([`Photo`](photo::Photo), [`PhotoId`](photo::PhotoId))
//! - [`ui`]: UI value objects ([`View`](ui::View),
//!   [`DynamicTypeScale`](ui::DynamicTypeScale), [`NotificationTtl`](ui::NotificationTtl))

pub mod album;
pub mod error;
pub mod photo;
pub mod ui;
