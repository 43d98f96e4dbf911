// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`ranking`]: Delegated ranking over HTTP (implements [`RankingService`])
//!
//! [`RankingService`]: crate::application::port::RankingService

pub mod ranking;

pub use ranking::{resolver_from_config, HttpRankingService};
