// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags for the application.

use crate::application::search::RankOutcome;
use crate::config::SettingsPatch;
use crate::domain::album::AlbumId;
use crate::domain::photo::PhotoId;
use crate::domain::ui::View;
use crate::notifications::ExpiryToken;

use super::effect::SearchTicket;

/// Messages consumed by `App::update`.
///
/// Most variants are user commands issued by the rendering layer. The last
/// two are produced by the runtime when a scheduled effect completes.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    SetView(View),
    Open(PhotoId),
    /// Opens the photo, or toggles it while selection mode is active.
    Tap(PhotoId),
    Edit,
    FinishEdit,
    Close,

    // Library
    ToggleFavorite(PhotoId),
    DeleteFocused,
    /// Restores photos from the recently-deleted view.
    Restore(Vec<PhotoId>),
    PurgeExpired,
    KeepBest {
        group: String,
        keep: PhotoId,
    },
    KeepAll,

    // Selection
    EnterSelection,
    ExitSelection,
    ToggleSelection(PhotoId),
    /// Deselects everything, staying in selection mode.
    ClearSelection,
    AddToNewAlbum,
    AddToExistingAlbum(AlbumId),
    DeleteSelection,

    // Notifications
    Undo,
    DismissNotification,

    // Editor and settings
    TogglePipeline,
    UpdateSettings(SettingsPatch),

    // Search
    SubmitSearch(String),
    ClearSearch,

    /// A notification's display time elapsed.
    NotificationExpired(ExpiryToken),
    /// A ranking request finished.
    SearchCompleted {
        ticket: SearchTicket,
        outcome: RankOutcome,
    },
}

/// Runtime flags passed in from the embedding launcher.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PHOTON_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
