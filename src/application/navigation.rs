// SPDX-License-Identifier: MPL-2.0
//! View navigation state machine.
//!
//! Root views are reachable from the tab bar and from each other. `detail`
//! and `edit` are overlays on top of a focused photo:
//!
//! ```text
//!  root ──open(id)──▶ detail ──edit──▶ edit
//!   ▲                   │  ▲             │
//!   └──close / setView──┘  └─finish_edit─┘
//! ```
//!
//! The focused photo is an identity; callers look it up in the store, so
//! changes to the record are always visible through it.

use crate::domain::error::{CommandError, NavigationCommand};
use crate::domain::photo::PhotoId;
use crate::domain::ui::View;

/// A completed view change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: View,
    pub to: View,
}

/// Current view plus the focused photo.
///
/// Invariant: `focused` is `Some` exactly when `current` is an overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    current: View,
    focused: Option<PhotoId>,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_view(&self) -> View {
        self.current
    }

    #[must_use]
    pub fn focused(&self) -> Option<&PhotoId> {
        self.focused.as_ref()
    }

    /// Opens `id` in the detail overlay. Valid from any root view.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTransition`] from an overlay.
    pub fn open(&mut self, id: PhotoId) -> Result<Transition, CommandError> {
        self.require(self.current.is_root(), NavigationCommand::Open)?;
        self.focused = Some(id);
        Ok(self.go(View::Detail))
    }

    /// Switches from `detail` to the editor.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTransition`] unless the detail overlay
    /// is showing a photo.
    pub fn edit(&mut self) -> Result<Transition, CommandError> {
        self.require(
            self.current == View::Detail && self.focused.is_some(),
            NavigationCommand::Edit,
        )?;
        Ok(self.go(View::Edit))
    }

    /// Leaves the editor back to `detail`, keeping the focused photo.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTransition`] outside the editor.
    pub fn finish_edit(&mut self) -> Result<Transition, CommandError> {
        self.require(self.current == View::Edit, NavigationCommand::FinishEdit)?;
        Ok(self.go(View::Detail))
    }

    /// Closes an overlay. Always returns to `library`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTransition`] from a root view.
    pub fn close(&mut self) -> Result<Transition, CommandError> {
        self.require(self.current.is_overlay(), NavigationCommand::Close)?;
        self.focused = None;
        Ok(self.go(View::Library))
    }

    /// Jumps to a root view, discarding any focused photo.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTransition`] if `view` is an overlay.
    pub fn set_view(&mut self, view: View) -> Result<Transition, CommandError> {
        self.require(view.is_root(), NavigationCommand::SetView(view))?;
        self.focused = None;
        Ok(self.go(view))
    }

    /// Closes the overlay if its photo is among `ids`.
    pub fn forget(&mut self, ids: &[PhotoId]) -> Option<Transition> {
        let focused = self.focused.as_ref()?;
        if !ids.contains(focused) {
            return None;
        }
        self.close().ok()
    }

    fn require(&self, legal: bool, command: NavigationCommand) -> Result<(), CommandError> {
        if legal {
            Ok(())
        } else {
            Err(CommandError::InvalidTransition {
                from: self.current,
                command,
            })
        }
    }

    fn go(&mut self, to: View) -> Transition {
        let from = std::mem::replace(&mut self.current, to);
        Transition { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invariant_holds(nav: &NavigationState) -> bool {
        nav.current_view().is_overlay() == nav.focused().is_some()
    }

    #[test]
    fn starts_in_library_without_focus() {
        let nav = NavigationState::new();
        assert_eq!(nav.current_view(), View::Library);
        assert!(nav.focused().is_none());
    }

    #[test]
    fn open_edit_close_round_trip() {
        let mut nav = NavigationState::new();
        let id = PhotoId::new("3");

        nav.open(id.clone()).unwrap();
        assert_eq!(nav.current_view(), View::Detail);

        let transition = nav.edit().unwrap();
        assert_eq!(transition, Transition { from: View::Detail, to: View::Edit });
        assert_eq!(nav.focused(), Some(&id));

        nav.close().unwrap();
        assert_eq!(nav.current_view(), View::Library);
        assert!(nav.focused().is_none());
    }

    #[test]
    fn edit_without_focus_is_rejected_and_state_unchanged() {
        let mut nav = NavigationState::new();
        let before = nav.clone();

        let err = nav.edit().unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidTransition {
                from: View::Library,
                command: NavigationCommand::Edit
            }
        );
        assert_eq!(nav, before);
    }

    #[test]
    fn finish_edit_returns_to_detail_with_same_photo() {
        let mut nav = NavigationState::new();
        nav.open(PhotoId::new("6")).unwrap();
        nav.edit().unwrap();
        nav.finish_edit().unwrap();
        assert_eq!(nav.current_view(), View::Detail);
        assert_eq!(nav.focused(), Some(&PhotoId::new("6")));
    }

    #[test]
    fn set_view_library_always_clears_focus() {
        for setup in [0, 1, 2] {
            let mut nav = NavigationState::new();
            if setup >= 1 {
                nav.open(PhotoId::new("1")).unwrap();
            }
            if setup == 2 {
                nav.edit().unwrap();
            }
            nav.set_view(View::Library).unwrap();
            assert!(nav.focused().is_none());
            assert!(invariant_holds(&nav));
        }
    }

    #[test]
    fn set_view_rejects_overlays() {
        let mut nav = NavigationState::new();
        assert!(nav.set_view(View::Detail).is_err());
        assert!(nav.set_view(View::Edit).is_err());
        assert_eq!(nav.current_view(), View::Library);
    }

    #[test]
    fn open_from_overlay_and_close_from_root_are_rejected() {
        let mut nav = NavigationState::new();
        assert!(nav.close().is_err());

        nav.open(PhotoId::new("1")).unwrap();
        assert!(nav.open(PhotoId::new("2")).is_err());
        assert_eq!(nav.focused(), Some(&PhotoId::new("1")));
    }

    #[test]
    fn every_root_view_can_open_a_photo() {
        for view in View::ALL.into_iter().filter(|v| v.is_root()) {
            let mut nav = NavigationState::new();
            nav.set_view(view).unwrap();
            nav.open(PhotoId::new("1")).unwrap();
            assert!(invariant_holds(&nav));
        }
    }

    #[test]
    fn forget_closes_only_when_focused_photo_is_removed() {
        let mut nav = NavigationState::new();
        nav.open(PhotoId::new("1")).unwrap();

        assert!(nav.forget(&[PhotoId::new("2")]).is_none());
        assert_eq!(nav.current_view(), View::Detail);

        assert!(nav.forget(&[PhotoId::new("1")]).is_some());
        assert_eq!(nav.current_view(), View::Library);
        assert!(invariant_holds(&nav));
    }
}
