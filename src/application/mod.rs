// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`navigation`]: View state machine and focused photo
//! - [`selection`]: Multi-select state for batch actions
//! - [`search`]: Delegate-first search with local fallback
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The [`crate::app`] state container composes these services

pub mod navigation;
pub mod port;
pub mod search;
pub mod selection;
