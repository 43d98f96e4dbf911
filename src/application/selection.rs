// SPDX-License-Identifier: MPL-2.0
//! Multi-select state for batch actions.

use crate::domain::error::CommandError;
use crate::domain::photo::PhotoId;

/// Selected photo ids, valid only while selection mode is active.
///
/// Ids keep the order in which they were tapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    active: bool,
    ids: Vec<PhotoId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.active = true;
    }

    /// Leaves selection mode, discarding the selected ids.
    pub fn exit(&mut self) {
        self.active = false;
        self.ids.clear();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Adds `id` if absent, removes it if present. Returns whether it is now selected.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::SelectionInactive`] outside selection mode.
    pub fn toggle(&mut self, id: &PhotoId) -> Result<bool, CommandError> {
        if !self.active {
            return Err(CommandError::SelectionInactive);
        }
        if let Some(index) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(index);
            Ok(false)
        } else {
            self.ids.push(id.clone());
            Ok(true)
        }
    }

    #[must_use]
    pub fn contains(&self, id: &PhotoId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn ids(&self) -> &[PhotoId] {
        &self.ids
    }

    /// Deselects everything while staying in selection mode.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether batch actions are available.
    #[must_use]
    pub fn can_batch(&self) -> bool {
        self.active && !self.ids.is_empty()
    }

    /// Returns the ids a batch action should operate on, without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::SelectionInactive`] outside selection mode and
    /// [`CommandError::EmptyBatch`] when nothing is selected.
    pub fn batch(&self) -> Result<Vec<PhotoId>, CommandError> {
        if !self.active {
            return Err(CommandError::SelectionInactive);
        }
        if self.ids.is_empty() {
            return Err(CommandError::EmptyBatch);
        }
        Ok(self.ids.clone())
    }

    /// Drops ids for photos that no longer exist. Returns how many were dropped.
    pub fn prune(&mut self, mut exists: impl FnMut(&PhotoId) -> bool) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| exists(id));
        before - self.ids.len()
    }
}
