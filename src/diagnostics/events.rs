// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events captured while the library state is being
//! driven: user commands, state transitions and recoverable warnings.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::error::CommandError;

/// User-initiated commands that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Navigation Actions
    // ==========================================================================
    SetView { view: String },
    OpenPhoto,
    EditPhoto,
    FinishEdit,
    ClosePhoto,

    // ==========================================================================
    // Library Actions
    // ==========================================================================
    ToggleFavorite,
    DeletePhotos { count: usize },
    RestorePhotos { count: usize },
    Undo,
    KeepBest { removed: usize },
    KeepAll,

    // ==========================================================================
    // Selection Actions
    // ==========================================================================
    EnterSelection,
    ExitSelection,
    ClearSelection,
    AddToNewAlbum { count: usize },
    AddToExistingAlbum { count: usize },

    // ==========================================================================
    // Search, Edit and Settings Actions
    // ==========================================================================
    SubmitSearch,
    ClearSearch,
    TogglePipeline,
    UpdateSettings,
    DismissNotification,
}

/// Application state changes worth correlating with user actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    ViewChanged { from: String, to: String },
    NotificationPosted { kind: String },
    NotificationExpired,
    SearchResolved { source: String, matches: usize },
    PhotosPurged { count: usize },
}

/// Categories of recoverable warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    PhotoNotFound,
    AlbumNotFound,
    InvalidTransition,
    EmptyBatch,
    SelectionInactive,
    /// The ranking delegate failed and the local index answered instead.
    DelegateFailure,
    ConfigurationIssue,
    Other,
}

impl From<&CommandError> for WarningType {
    fn from(err: &CommandError) -> Self {
        match err {
            CommandError::NotFound(_) => WarningType::PhotoNotFound,
            CommandError::AlbumNotFound(_) => WarningType::AlbumNotFound,
            CommandError::InvalidTransition { .. } | CommandError::NoFocusedPhoto => {
                WarningType::InvalidTransition
            }
            CommandError::EmptyBatch => WarningType::EmptyBatch,
            CommandError::SelectionInactive => WarningType::SelectionInactive,
        }
    }
}

/// A categorized warning with a short description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

impl From<&CommandError> for WarningEvent {
    fn from(err: &CommandError) -> Self {
        Self::new(WarningType::from(err), err.to_string())
    }
}

/// A diagnostic event captured during application execution.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    AppState {
        state: AppStateEvent,
    },
    Warning {
        event: WarningEvent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::PhotoId;

    #[test]
    fn user_action_serializes_with_tag() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::AddToNewAlbum { count: 2 },
            details: None,
        };
        let json = serde_json::to_string(&kind).expect("serialize");
        assert_eq!(
            json,
            r#"{"type":"user_action","action":{"action":"add_to_new_album","count":2}}"#
        );
    }

    #[test]
    fn warning_round_trips_through_json() {
        let kind = DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::DelegateFailure, "timed out"),
        };
        let json = serde_json::to_string(&kind).expect("serialize");
        let back: DiagnosticEventKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, kind);
    }

    #[test]
    fn command_errors_map_to_warning_types() {
        let err = CommandError::NotFound(PhotoId::new("7"));
        let event = WarningEvent::from(&err);
        assert_eq!(event.warning_type, WarningType::PhotoNotFound);
        assert_eq!(event.message, "photo 7 not found");
        assert_eq!(
            WarningType::from(&CommandError::EmptyBatch),
            WarningType::EmptyBatch
        );
    }
}
