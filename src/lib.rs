// SPDX-License-Identifier: MPL-2.0
//! `photon` is the headless state core of a photo library application.
//!
//! It owns the photo collection, albums, navigation, multi-select, the
//! single-slot notification system and search, and exposes them through one
//! message-driven state container ([`app::App`]) that any rendering layer can
//! drive. Time-based work (notification expiry, delegated ranking) runs on
//! tokio through [`app::Runtime`].

#![doc(html_root_url = "https://docs.rs/photon/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod library;
pub mod notifications;
