// SPDX-License-Identifier: MPL-2.0
//! Update logic and command handlers for the application.
//!
//! Every handler either applies its whole change and returns `Ok`, or
//! rejects the command with a [`CommandError`] before touching any state.

use super::{App, Effect, Message, SearchState, SearchTicket};
use crate::application::navigation::Transition;
use crate::application::port::RankingRequest;
use crate::application::search::{normalize_query, RankOutcome, SearchResults};
use crate::config::{SettingsPatch, RECENTLY_DELETED_RETENTION_DAYS};
use crate::diagnostics::{AppStateEvent, UserAction, WarningEvent};
use crate::domain::album::AlbumId;
use crate::domain::error::CommandError;
use crate::domain::photo::{format_file_size, PhotoId};
use crate::domain::ui::View;
use crate::notifications::{ExpiryToken, Notification, UndoAction};
use chrono::{DateTime, Utc};
use tokio::time::Instant;

impl App {
    /// Handles one message and returns the follow-up work.
    ///
    /// Rejections are absorbed here: the state is unchanged and
    /// [`App::last_rejection`] reports why until the next message.
    pub fn update(&mut self, message: Message) -> Effect {
        self.diagnostics.process_pending();
        self.last_rejection = None;
        match self.handle(message) {
            Ok(effect) => effect,
            Err(err) => {
                self.reject(err);
                Effect::None
            }
        }
    }

    fn handle(&mut self, message: Message) -> Result<Effect, CommandError> {
        match message {
            Message::SetView(view) => self.set_view(view),
            Message::Open(id) => self.open(id),
            Message::Tap(id) => self.tap(id),
            Message::Edit => self.edit(),
            Message::FinishEdit => self.finish_edit(),
            Message::Close => self.close(),
            Message::ToggleFavorite(id) => self.toggle_favorite(&id),
            Message::DeleteFocused => self.delete_focused(),
            Message::Restore(ids) => self.restore(&ids),
            Message::PurgeExpired => Ok(self.purge_expired_at(Utc::now())),
            Message::KeepBest { group, keep } => self.keep_best(&group, keep),
            Message::KeepAll => self.keep_all(),
            Message::EnterSelection => Ok(self.enter_selection()),
            Message::ExitSelection => Ok(self.exit_selection()),
            Message::ToggleSelection(id) => self.toggle_selection(id),
            Message::ClearSelection => self.clear_selection(),
            Message::AddToNewAlbum => self.add_to_new_album(),
            Message::AddToExistingAlbum(album) => self.add_to_existing_album(album),
            Message::DeleteSelection => self.delete_selection(),
            Message::Undo => Ok(self.undo()),
            Message::DismissNotification => Ok(self.dismiss_notification()),
            Message::TogglePipeline => self.toggle_pipeline(),
            Message::UpdateSettings(patch) => Ok(self.update_settings(&patch)),
            Message::SubmitSearch(query) => Ok(self.submit_search(&query)),
            Message::ClearSearch => Ok(self.clear_search()),
            Message::NotificationExpired(token) => Ok(self.notification_expired(token)),
            Message::SearchCompleted { ticket, outcome } => {
                Ok(self.search_completed(ticket, outcome))
            }
        }
    }

    fn reject(&mut self, err: CommandError) {
        tracing::debug!(error = %err, "command rejected");
        self.diagnostics.log_warning(WarningEvent::from(&err));
        self.last_rejection = Some(err);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Jumps to a root view. Leaving the current view ends selection mode.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTransition`] for overlay views.
    pub fn set_view(&mut self, view: View) -> Result<Effect, CommandError> {
        self.switch_root(view)?;
        self.diagnostics.log_action(UserAction::SetView {
            view: view.as_str().to_string(),
        });
        Ok(Effect::None)
    }

    fn switch_root(&mut self, view: View) -> Result<(), CommandError> {
        let transition = self.navigation.set_view(view)?;
        if transition.from != transition.to {
            self.selection.exit();
        }
        self.record_transition(transition);
        Ok(())
    }

    /// Opens an active photo in `detail`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NotFound`] for unknown ids and
    /// [`CommandError::InvalidTransition`] from an overlay.
    pub fn open(&mut self, id: PhotoId) -> Result<Effect, CommandError> {
        if !self.photos.contains(&id) {
            return Err(CommandError::NotFound(id));
        }
        let transition = self.navigation.open(id)?;
        self.diagnostics.log_action(UserAction::OpenPhoto);
        self.record_transition(transition);
        Ok(Effect::None)
    }

    /// A tap on a grid cell: toggles membership in selection mode, opens
    /// the photo otherwise.
    ///
    /// # Errors
    ///
    /// See [`App::toggle_selection`] and [`App::open`].
    pub fn tap(&mut self, id: PhotoId) -> Result<Effect, CommandError> {
        if self.selection.is_active() {
            self.toggle_selection(id)
        } else {
            self.open(id)
        }
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTransition`] unless `detail` shows a photo.
    pub fn edit(&mut self) -> Result<Effect, CommandError> {
        let transition = self.navigation.edit()?;
        self.diagnostics.log_action(UserAction::EditPhoto);
        self.record_transition(transition);
        Ok(Effect::None)
    }

    /// Saves or cancels the edit, returning to `detail`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTransition`] outside the editor.
    pub fn finish_edit(&mut self) -> Result<Effect, CommandError> {
        let transition = self.navigation.finish_edit()?;
        self.diagnostics.log_action(UserAction::FinishEdit);
        self.record_transition(transition);
        Ok(Effect::None)
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidTransition`] from a root view.
    pub fn close(&mut self) -> Result<Effect, CommandError> {
        let transition = self.navigation.close()?;
        self.diagnostics.log_action(UserAction::ClosePhoto);
        self.record_transition(transition);
        Ok(Effect::None)
    }

    fn record_transition(&mut self, transition: Transition) {
        if transition.from == transition.to {
            return;
        }
        tracing::debug!(from = %transition.from, to = %transition.to, "view changed");
        self.diagnostics.log_state(AppStateEvent::ViewChanged {
            from: transition.from.as_str().to_string(),
            to: transition.to.as_str().to_string(),
        });
    }

    // =========================================================================
    // Library
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`CommandError::NotFound`] if no active photo has this id.
    pub fn toggle_favorite(&mut self, id: &PhotoId) -> Result<Effect, CommandError> {
        self.photos.toggle_favorite(id)?;
        self.diagnostics.log_action(UserAction::ToggleFavorite);
        Ok(Effect::None)
    }

    /// Soft-deletes the photo open in `detail` and returns to `library`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NoFocusedPhoto`] when no photo is open.
    pub fn delete_focused(&mut self) -> Result<Effect, CommandError> {
        let id = self
            .navigation
            .focused()
            .cloned()
            .ok_or(CommandError::NoFocusedPhoto)?;
        self.delete(&[id])
    }

    fn delete(&mut self, ids: &[PhotoId]) -> Result<Effect, CommandError> {
        let removed = self.photos.delete(ids, Utc::now())?;
        self.diagnostics.log_action(UserAction::DeletePhotos {
            count: removed.len(),
        });
        self.after_removal(&removed);

        let count = removed.len();
        Ok(self.post(
            Notification::undo(
                "notification-moved-to-recently-deleted",
                UndoAction::Restore(removed),
            )
            .with_arg("days", RECENTLY_DELETED_RETENTION_DAYS.to_string())
            .with_arg("count", count.to_string()),
        ))
    }

    /// Drops references to photos that left the active collection.
    fn after_removal(&mut self, ids: &[PhotoId]) {
        self.selection.prune(|id| !ids.contains(id));
        if let Some(transition) = self.navigation.forget(ids) {
            self.record_transition(transition);
        }
    }

    /// Puts recently-deleted photos back into the library.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyBatch`] for an empty list and
    /// [`CommandError::NotFound`] if none of the ids is recently deleted.
    pub fn restore(&mut self, ids: &[PhotoId]) -> Result<Effect, CommandError> {
        let Some(first) = ids.first() else {
            return Err(CommandError::EmptyBatch);
        };
        if !ids.iter().any(|id| self.photos.is_deleted(id)) {
            return Err(CommandError::NotFound(first.clone()));
        }
        let restored = self.photos.restore(ids);
        self.diagnostics.log_action(UserAction::RestorePhotos {
            count: restored.len(),
        });
        Ok(self.post(
            Notification::confirmation("notification-restored")
                .with_arg("count", restored.len().to_string()),
        ))
    }

    /// Permanently drops photos past the retention window.
    pub fn purge_expired_at(&mut self, now: DateTime<Utc>) -> Effect {
        let purged = self.photos.purge_expired(now);
        if !purged.is_empty() {
            self.albums.forget(&purged);
            tracing::debug!(count = purged.len(), "purged recently deleted photos");
            self.diagnostics.log_state(AppStateEvent::PhotosPurged {
                count: purged.len(),
            });
        }
        Effect::None
    }

    // =========================================================================
    // Duplicates
    // =========================================================================

    /// Keeps `keep` and soft-deletes the other members of `group`, then
    /// shows `albums`. The reclaimed size is announced with an undo toast.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NotFound`] if `keep` is not a member of an
    /// active duplicate group named `group`.
    pub fn keep_best(&mut self, group: &str, keep: PhotoId) -> Result<Effect, CommandError> {
        let members: Vec<PhotoId> = self
            .photos
            .duplicate_group(group)
            .into_iter()
            .map(|p| p.id().clone())
            .collect();
        if !members.contains(&keep) {
            return Err(CommandError::NotFound(keep));
        }
        let others: Vec<PhotoId> = members.into_iter().filter(|id| *id != keep).collect();

        let reclaimed = self.photos.reclaimable_bytes(group, &keep);
        let removed = self.photos.delete(&others, Utc::now())?;
        self.diagnostics.log_action(UserAction::KeepBest {
            removed: removed.len(),
        });
        self.after_removal(&removed);

        let effect = self.post(
            Notification::undo(
                "notification-duplicates-cleaned",
                UndoAction::Restore(removed),
            )
            .with_arg("size", format_file_size(reclaimed)),
        );
        self.switch_root(View::Albums)?;
        Ok(effect)
    }

    /// Leaves every duplicate in place and shows `albums`.
    ///
    /// # Errors
    ///
    /// Never fails in practice; `albums` is a root view.
    pub fn keep_all(&mut self) -> Result<Effect, CommandError> {
        self.switch_root(View::Albums)?;
        self.diagnostics.log_action(UserAction::KeepAll);
        Ok(Effect::None)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn enter_selection(&mut self) -> Effect {
        self.selection.enter();
        self.diagnostics.log_action(UserAction::EnterSelection);
        Effect::None
    }

    /// Leaves selection mode, discarding the selection.
    pub fn exit_selection(&mut self) -> Effect {
        self.selection.exit();
        self.diagnostics.log_action(UserAction::ExitSelection);
        Effect::None
    }

    /// Deselects every photo and stays in selection mode.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::SelectionInactive`] outside selection mode.
    pub fn clear_selection(&mut self) -> Result<Effect, CommandError> {
        if !self.selection.is_active() {
            return Err(CommandError::SelectionInactive);
        }
        self.selection.clear();
        self.diagnostics.log_action(UserAction::ClearSelection);
        Ok(Effect::None)
    }

    /// # Errors
    ///
    /// Returns [`CommandError::SelectionInactive`] outside selection mode and
    /// [`CommandError::NotFound`] for unknown ids.
    pub fn toggle_selection(&mut self, id: PhotoId) -> Result<Effect, CommandError> {
        if !self.selection.is_active() {
            return Err(CommandError::SelectionInactive);
        }
        if !self.photos.contains(&id) {
            return Err(CommandError::NotFound(id));
        }
        self.selection.toggle(&id)?;
        Ok(Effect::None)
    }

    /// Adds the selection to a freshly created album.
    ///
    /// On success the confirmation is posted and selection mode ends.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyBatch`] or
    /// [`CommandError::SelectionInactive`]; nothing is created.
    pub fn add_to_new_album(&mut self) -> Result<Effect, CommandError> {
        let batch = self.selection.batch()?;
        let album = self.albums.create_untitled();
        self.albums.add(album, &batch)?;
        self.diagnostics.log_action(UserAction::AddToNewAlbum {
            count: batch.len(),
        });
        Ok(self.finish_album_batch("notification-added-to-new-album", album, batch.len()))
    }

    /// Adds the selection to an existing album.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::AlbumNotFound`] for unknown albums, keeping
    /// the selection, and the errors of [`App::add_to_new_album`].
    pub fn add_to_existing_album(&mut self, album: AlbumId) -> Result<Effect, CommandError> {
        let batch = self.selection.batch()?;
        self.albums.add(album, &batch)?;
        self.diagnostics.log_action(UserAction::AddToExistingAlbum {
            count: batch.len(),
        });
        Ok(self.finish_album_batch("notification-added-to-album", album, batch.len()))
    }

    fn finish_album_batch(&mut self, key: &str, album: AlbumId, count: usize) -> Effect {
        let name = self
            .albums
            .get(album)
            .map(|a| a.name.clone())
            .unwrap_or_default();
        self.selection.exit();
        self.post(
            Notification::confirmation(key)
                .with_arg("count", count.to_string())
                .with_arg("album", name),
        )
    }

    /// Soft-deletes the selection and ends selection mode.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyBatch`] or
    /// [`CommandError::SelectionInactive`].
    pub fn delete_selection(&mut self) -> Result<Effect, CommandError> {
        let batch = self.selection.batch()?;
        let effect = self.delete(&batch)?;
        self.selection.exit();
        Ok(effect)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Shows `notification`, superseding the active one.
    pub(super) fn post(&mut self, notification: Notification) -> Effect {
        self.diagnostics.log_state(AppStateEvent::NotificationPosted {
            kind: notification.kind().as_str().to_string(),
        });
        let expiry = self.notifications.post(notification, Instant::now());
        Effect::ExpireNotification(expiry)
    }

    /// Reverts the action of the active undo toast, if there is one.
    pub fn undo(&mut self) -> Effect {
        self.diagnostics.log_action(UserAction::Undo);
        match self.notifications.take_undo() {
            Some(UndoAction::Restore(ids)) => {
                let restored = self.photos.restore(&ids);
                tracing::debug!(count = restored.len(), "undo restored photos");
            }
            None => tracing::debug!("nothing to undo"),
        }
        Effect::None
    }

    pub fn dismiss_notification(&mut self) -> Effect {
        self.notifications.dismiss();
        self.diagnostics.log_action(UserAction::DismissNotification);
        Effect::None
    }

    fn notification_expired(&mut self, token: ExpiryToken) -> Effect {
        if self.notifications.expire(token).is_some() {
            self.diagnostics.log_state(AppStateEvent::NotificationExpired);
        } else {
            tracing::debug!(?token, "ignoring stale notification expiry");
        }
        Effect::None
    }

    // =========================================================================
    // Editor and Settings
    // =========================================================================

    /// Switches between the pro and standard pipelines for the open photo.
    ///
    /// ProRAW photos are always bit-perfect, so for them the setting is left
    /// alone and a banner explains why.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NoFocusedPhoto`] when no photo is open.
    pub fn toggle_pipeline(&mut self) -> Result<Effect, CommandError> {
        let is_pro_raw = self
            .focused_photo()
            .map(|p| p.is_pro_raw)
            .ok_or(CommandError::NoFocusedPhoto)?;
        self.diagnostics.log_action(UserAction::TogglePipeline);

        let key = if is_pro_raw {
            "notification-proraw-bit-perfect"
        } else {
            let prefs = &mut self.config.preferences;
            prefs.pro_mode = !prefs.pro_mode;
            if prefs.pro_mode {
                "notification-pro-pipeline-enabled"
            } else {
                "notification-standard-pipeline"
            }
        };
        Ok(self.post(Notification::banner(key)))
    }

    /// Merges `patch` into the preferences.
    pub fn update_settings(&mut self, patch: &SettingsPatch) -> Effect {
        if !patch.is_empty() {
            self.config.preferences.apply(patch);
        }
        self.diagnostics.log_action(UserAction::UpdateSettings);
        Effect::None
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Starts a search over the active photos. An empty query clears the
    /// search instead. Any earlier pending search is superseded.
    pub fn submit_search(&mut self, query: &str) -> Effect {
        let Some(query) = normalize_query(query).map(str::to_owned) else {
            return self.clear_search();
        };
        self.diagnostics.log_action(UserAction::SubmitSearch);
        self.recent_searches.record(&query);

        let ticket = self.supersede_search();
        let request = RankingRequest::new(query.clone(), self.photos.list());
        self.search = SearchState::Pending { ticket, query };
        Effect::Rank { ticket, request }
    }

    pub fn clear_search(&mut self) -> Effect {
        self.supersede_search();
        self.search = SearchState::Inactive;
        self.diagnostics.log_action(UserAction::ClearSearch);
        Effect::None
    }

    fn supersede_search(&mut self) -> SearchTicket {
        self.last_ticket = self.last_ticket.next();
        self.last_ticket
    }

    fn search_completed(&mut self, ticket: SearchTicket, outcome: RankOutcome) -> Effect {
        let SearchState::Pending { ticket: pending, query } = &self.search else {
            tracing::debug!(?ticket, "ignoring search result with nothing pending");
            return Effect::None;
        };
        if *pending != ticket {
            tracing::debug!(?ticket, "ignoring superseded search result");
            return Effect::None;
        }

        let results = SearchResults::from_outcome(query.clone(), outcome, &self.photos);
        self.diagnostics.log_state(AppStateEvent::SearchResolved {
            source: results.source.as_str().to_string(),
            matches: results.matches.len(),
        });
        self.search = SearchState::Ready(results);
        Effect::None
    }
}
