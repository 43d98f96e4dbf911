// SPDX-License-Identifier: MPL-2.0
//! Application root state and the command protocol that mutates it.
//!
//! The [`App`] struct is the single source of truth every view reads. Views
//! never mutate it directly: they send a [`Message`] to [`App::update`], which
//! runs the matching command and returns an [`Effect`] describing any waiting
//! the caller has to do (notification timers, ranking calls). The
//! [`Runtime`] executes those effects on tokio and feeds the results back.
//!
//! Rejected commands leave the state unchanged. They are logged through
//! `tracing`, recorded as diagnostics warnings and exposed through
//! [`App::last_rejection`].

mod effect;
mod message;
pub mod paths;
mod runtime;
mod update;

pub use effect::{Effect, SearchTicket};
pub use message::{Flags, Message};
pub use runtime::Runtime;

use crate::application::navigation::NavigationState;
use crate::application::search::{RecentSearches, SearchOutcome, SearchResults};
use crate::application::selection::Selection;
use crate::config::{self, Config, Settings};
use crate::diagnostics::{
    DiagnosticsCollector, DiagnosticsHandle, WarningEvent, WarningType,
};
use crate::domain::error::CommandError;
use crate::domain::photo::Photo;
use crate::domain::ui::View;
use crate::i18n::fluent::I18n;
use crate::library::{fixtures, AlbumStore, DeletedPhoto, PhotoStore};
use crate::notifications::{ActiveNotification, Notification, NotificationScheduler};
use chrono::Utc;
use std::fmt;
use std::path::{Path, PathBuf};

/// Search projection shown by the search view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No search submitted, or the last one was cleared.
    #[default]
    Inactive,
    /// Waiting for the ranking call of `ticket`.
    Pending { ticket: SearchTicket, query: String },
    Ready(SearchResults),
}

impl SearchState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, SearchState::Pending { .. })
    }

    #[must_use]
    pub fn results(&self) -> Option<&SearchResults> {
        match self {
            SearchState::Ready(results) => Some(results),
            SearchState::Inactive | SearchState::Pending { .. } => None,
        }
    }

    /// The query being searched or last answered.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchState::Inactive => None,
            SearchState::Pending { query, .. } => Some(query),
            SearchState::Ready(results) => Some(&results.query),
        }
    }
}

/// Root application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    photos: PhotoStore,
    albums: AlbumStore,
    navigation: NavigationState,
    selection: Selection,
    notifications: NotificationScheduler,
    search: SearchState,
    recent_searches: RecentSearches,
    /// Ticket of the most recent submission; older completions are dropped.
    last_ticket: SearchTicket,
    diagnostics: DiagnosticsCollector,
    last_rejection: Option<CommandError>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("view", &self.navigation.current_view())
            .field("focused", &self.navigation.focused())
            .field("photos", &self.photos.len())
            .field("selection", &self.selection.count())
            .field("search", &self.search)
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_library(fixtures::sample_library(), Config::default())
    }
}

impl App {
    /// Loads the user's config and seeds the sample library.
    ///
    /// Returns the effect of the startup notification, if the config could
    /// not be read.
    pub fn new(flags: Flags) -> (Self, Effect) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::with_library(fixtures::sample_library(), config);
        app.i18n = i18n;

        let effect = match config_warning {
            Some(key) => {
                app.diagnostics.log_warning(WarningEvent::new(
                    WarningType::ConfigurationIssue,
                    key.clone(),
                ));
                app.post(Notification::banner(key))
            }
            None => Effect::None,
        };
        (app, effect)
    }

    /// Builds an app over an explicit library and config.
    #[must_use]
    pub fn with_library(photos: PhotoStore, config: Config) -> Self {
        Self {
            i18n: I18n::new(None, &config),
            config,
            photos,
            albums: AlbumStore::new(),
            navigation: NavigationState::new(),
            selection: Selection::new(),
            notifications: NotificationScheduler::new(),
            search: SearchState::Inactive,
            recent_searches: RecentSearches::default(),
            last_ticket: SearchTicket::default(),
            diagnostics: DiagnosticsCollector::default(),
            last_rejection: None,
        }
    }

    /// Writes the current config, including preferences, to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be serialized or written.
    pub fn save_settings(&self, path: &Path) -> crate::error::Result<()> {
        config::save_to_path(&self.config, path)
    }

    // =========================================================================
    // Projections
    // =========================================================================

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.config.preferences
    }

    #[must_use]
    pub fn photos(&self) -> &PhotoStore {
        &self.photos
    }

    #[must_use]
    pub fn albums(&self) -> &AlbumStore {
        &self.albums
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    #[must_use]
    pub fn current_view(&self) -> View {
        self.navigation.current_view()
    }

    /// The photo open in `detail` or `edit`, looked up in the store.
    #[must_use]
    pub fn focused_photo(&self) -> Option<&Photo> {
        self.navigation
            .focused()
            .and_then(|id| self.photos.get(id))
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn notification(&self) -> Option<&ActiveNotification> {
        self.notifications.active()
    }

    #[must_use]
    pub fn banner(&self) -> Option<&Notification> {
        self.notifications.banner()
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Notification> {
        self.notifications.toast()
    }

    /// Banner text in the active locale.
    #[must_use]
    pub fn banner_text(&self) -> Option<String> {
        self.banner().map(|n| n.render(&self.i18n))
    }

    #[must_use]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Completed search outcome; a pending search still reads as inactive.
    #[must_use]
    pub fn search_outcome(&self) -> SearchOutcome {
        match &self.search {
            SearchState::Ready(results) => SearchOutcome::Ready(results.clone()),
            SearchState::Inactive | SearchState::Pending { .. } => SearchOutcome::Inactive,
        }
    }

    /// Matching photos of the completed search that are still active.
    #[must_use]
    pub fn search_results(&self) -> Vec<&Photo> {
        self.search
            .results()
            .map(|results| results.photos(&self.photos))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn recent_searches(&self) -> &RecentSearches {
        &self.recent_searches
    }

    #[must_use]
    pub fn recently_deleted(&self) -> Vec<DeletedPhoto<'_>> {
        self.photos.recently_deleted(Utc::now())
    }

    /// Whether the editor renders without AI processing.
    #[must_use]
    pub fn is_bit_perfect(&self) -> bool {
        self.config.preferences.pro_mode || self.focused_photo().is_some_and(|p| p.is_pro_raw)
    }

    /// The most recent rejected command.
    #[must_use]
    pub fn last_rejection(&self) -> Option<&CommandError> {
        self.last_rejection.as_ref()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// A sender for diagnostics produced outside `update`.
    #[must_use]
    pub fn diagnostics_handle(&self) -> DiagnosticsHandle {
        self.diagnostics.handle()
    }

    /// Exports the activity log as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_diagnostics(&mut self) -> serde_json::Result<String> {
        self.diagnostics.process_pending();
        self.diagnostics.export_json()
    }
}
