// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting activity reports.
//!
//! Every command handled by the application, every notable state change and
//! every recoverable rejection is recorded as a [`DiagnosticEvent`] in a
//! memory-bounded circular buffer, and can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer; logs directly or drains handles
//! - [`DiagnosticsHandle`]: Cheap-clone sender usable from async tasks

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction, WarningEvent, WarningType,
};
