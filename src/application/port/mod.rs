// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`ranking`]: Delegated query-to-photo ranking
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` for use from spawned tasks
//! - Async methods return boxed `'static` futures so callers can spawn them

pub mod ranking;

pub use ranking::{
    PhotoSummary, RankingError, RankingFuture, RankingRequest, RankingResponse, RankingService,
};
