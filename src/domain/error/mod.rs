// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns. Every variant is
//! recoverable: the component that detects it leaves its state unchanged.

use crate::domain::album::AlbumId;
use crate::domain::photo::PhotoId;
use crate::domain::ui::View;
use std::fmt;

/// Navigation commands, used to describe a rejected transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    Open,
    Edit,
    FinishEdit,
    Close,
    SetView(View),
}

impl fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationCommand::Open => f.write_str("open"),
            NavigationCommand::Edit => f.write_str("edit"),
            NavigationCommand::FinishEdit => f.write_str("finish-edit"),
            NavigationCommand::Close => f.write_str("close"),
            NavigationCommand::SetView(view) => write!(f, "set-view({view})"),
        }
    }
}

/// Reasons a user command was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command referenced a photo that is not in the active collection.
    NotFound(PhotoId),

    /// The command referenced an album that does not exist.
    AlbumNotFound(AlbumId),

    /// The navigation command is not legal from the current view.
    InvalidTransition {
        from: View,
        command: NavigationCommand,
    },

    /// A batch action was invoked with an empty selection.
    EmptyBatch,

    /// A selection command was issued outside selection mode.
    SelectionInactive,

    /// The command needs a focused photo but none is open.
    NoFocusedPhoto,
}

impl CommandError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CommandError::NotFound(_) => "error-photo-not-found",
            CommandError::AlbumNotFound(_) => "error-album-not-found",
            CommandError::InvalidTransition { .. } => "error-invalid-transition",
            CommandError::EmptyBatch => "error-empty-batch",
            CommandError::SelectionInactive => "error-selection-inactive",
            CommandError::NoFocusedPhoto => "error-no-focused-photo",
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NotFound(id) => write!(f, "photo {id} not found"),
            CommandError::AlbumNotFound(id) => write!(f, "{id} not found"),
            CommandError::InvalidTransition { from, command } => {
                write!(f, "cannot {command} from {from}")
            }
            CommandError::EmptyBatch => write!(f, "batch action on an empty selection"),
            CommandError::SelectionInactive => write!(f, "selection mode is not active"),
            CommandError::NoFocusedPhoto => write!(f, "no photo is open"),
        }
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_transition() {
        let err = CommandError::InvalidTransition {
            from: View::Library,
            command: NavigationCommand::Edit,
        };
        assert_eq!(err.to_string(), "cannot edit from library");
    }

    #[test]
    fn display_names_the_missing_photo() {
        let err = CommandError::NotFound(PhotoId::new("42"));
        assert_eq!(err.to_string(), "photo 42 not found");
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            CommandError::NotFound(PhotoId::new("1")).i18n_key(),
            CommandError::AlbumNotFound(AlbumId::new(1)).i18n_key(),
            CommandError::EmptyBatch.i18n_key(),
            CommandError::SelectionInactive.i18n_key(),
            CommandError::NoFocusedPhoto.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
