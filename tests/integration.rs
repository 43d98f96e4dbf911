// SPDX-License-Identifier: MPL-2.0
use futures_util::FutureExt;
use photon::app::{App, Message, Runtime, SearchState};
use photon::application::port::{RankingError, RankingFuture, RankingRequest, RankingService};
use photon::application::search::{SearchOutcome, SearchResolver, LOCAL_EXPLANATION};
use photon::config::{self, Config, GeneralConfig, SettingsPatch};
use photon::domain::error::CommandError;
use photon::domain::photo::{Photo, PhotoId};
use photon::domain::ui::View;
use photon::i18n::fluent::I18n;
use photon::library::PhotoStore;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;
use tokio::time::Instant;

struct Unavailable;

impl RankingService for Unavailable {
    fn rank(&self, _request: RankingRequest) -> RankingFuture {
        async { Err(RankingError::Malformed("missing matchingIds".into())) }.boxed()
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

fn id(raw: &str) -> PhotoId {
    PhotoId::new(raw)
}

#[tokio::test(start_paused = true)]
async fn later_notification_supersedes_earlier_timer() {
    let mut runtime = Runtime::new(App::default(), SearchResolver::local_only());
    let start = Instant::now();

    // A: undo toast, 10 s.
    runtime.dispatch(Message::Open(id("8")));
    runtime.dispatch(Message::DeleteFocused);
    // B: banner, 3 s, posted back-to-back with A.
    runtime.dispatch(Message::Open(id("1")));
    runtime.dispatch(Message::Edit);
    runtime.dispatch(Message::TogglePipeline);
    let b = runtime.app().banner().map(|n| n.id());
    assert!(b.is_some());
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(2_900)).await;
    assert_eq!(runtime.drain(), 0);
    assert_eq!(runtime.app().banner().map(|n| n.id()), b);

    // B expires at 3 s.
    runtime.next().await;
    assert!(runtime.app().notification().is_none());
    assert!(start.elapsed() >= Duration::from_secs(3));

    // C: undo toast posted at 3 s, due at 13 s. A's stale timer fires at
    // 10 s and must leave C on screen.
    runtime.dispatch(Message::DeleteFocused);
    let c = runtime.app().banner().map(|n| n.id());
    runtime.next().await;
    assert!(start.elapsed() >= Duration::from_secs(10));
    assert!(start.elapsed() < Duration::from_secs(13));
    assert_eq!(runtime.app().banner().map(|n| n.id()), c);

    runtime.next().await;
    assert!(runtime.app().notification().is_none());
    assert!(start.elapsed() >= Duration::from_secs(13));
}

#[tokio::test]
async fn open_edit_close_flow() {
    let mut app = App::default();

    app.update(Message::Open(id("3")));
    assert_eq!(app.current_view(), View::Detail);

    app.update(Message::Edit);
    assert_eq!(app.current_view(), View::Edit);
    assert_eq!(app.focused_photo().map(Photo::id), Some(&id("3")));

    app.update(Message::Close);
    assert_eq!(app.current_view(), View::Library);
    assert!(app.focused_photo().is_none());
}

#[tokio::test]
async fn edit_without_focus_is_rejected() {
    let mut app = App::default();
    app.update(Message::SetView(View::ForYou));

    app.update(Message::Edit);
    assert_eq!(app.current_view(), View::ForYou);
    assert!(matches!(
        app.last_rejection(),
        Some(CommandError::InvalidTransition { from: View::ForYou, .. })
    ));
}

#[tokio::test]
async fn set_view_library_clears_focus_from_anywhere() {
    let mut app = App::default();
    app.update(Message::Open(id("7")));
    app.update(Message::Edit);

    app.update(Message::SetView(View::Library));
    assert!(app.focused_photo().is_none());
    assert!(app.navigation().focused().is_none());
}

#[tokio::test]
async fn batch_album_scenario() {
    let mut app = App::default();
    app.update(Message::EnterSelection);
    app.update(Message::Tap(id("1")));
    app.update(Message::Tap(id("5")));
    assert_eq!(app.selection().count(), 2);

    app.update(Message::AddToNewAlbum);

    let notification = app.notification().expect("a notification is active");
    assert_eq!(notification.notification().arg("count"), Some("2"));
    assert!(!app.selection().is_active());
    assert_eq!(app.selection().count(), 0);
}

#[tokio::test]
async fn delegate_failure_falls_back_to_local_matching() {
    let store = PhotoStore::new([
        Photo::new("3", "Oct 12, 2025").with_location("Paris"),
        Photo::new("5", "Oct 10, 2025").with_location("Tokyo"),
    ]);
    let mut runtime = Runtime::new(
        App::with_library(store, Config::default()),
        SearchResolver::local_only().with_delegate(Arc::new(Unavailable)),
    );

    runtime.dispatch(Message::SubmitSearch("paris".into()));
    runtime.next().await;

    let SearchOutcome::Ready(results) = runtime.app().search_outcome() else {
        panic!("search should have completed");
    };
    assert_eq!(results.matches, vec![id("3")]);
    assert_eq!(results.explanation, LOCAL_EXPLANATION);
}

#[tokio::test]
async fn empty_query_is_distinct_from_no_matches() {
    let mut runtime = Runtime::new(App::default(), SearchResolver::local_only());

    runtime.dispatch(Message::SubmitSearch(String::new()));
    assert_eq!(runtime.app().search(), &SearchState::Inactive);
    assert_eq!(runtime.app().search_outcome(), SearchOutcome::Inactive);

    runtime.dispatch(Message::SubmitSearch("antarctica".into()));
    runtime.next().await;
    match runtime.app().search_outcome() {
        SearchOutcome::Ready(results) => assert!(results.is_empty()),
        SearchOutcome::Inactive => panic!("a zero-match search is still a search"),
    }
}

#[test]
fn toggle_favorite_on_unknown_id_leaves_collection_unchanged() {
    let mut app = App::default();
    let before = app.photos().list().to_vec();

    app.update(Message::ToggleFavorite(id("404")));
    assert_eq!(app.photos().list(), before.as_slice());
    assert_eq!(app.last_rejection(), Some(&CommandError::NotFound(id("404"))));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(
        i18n.tr("notification-standard-pipeline"),
        "Pipeline standard (Smart HDR)"
    );
}

#[test]
fn settings_survive_a_save_and_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut app = App::default();
    app.update(Message::UpdateSettings(SettingsPatch {
        high_visibility_mode: Some(true),
        dynamic_type_scale: Some(4),
        ..SettingsPatch::default()
    }));
    app.save_settings(&path).expect("Failed to save settings");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(&loaded.preferences, app.settings());
}

#[tokio::test]
async fn startup_with_unreadable_config_posts_a_banner() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "preferences = [").unwrap();

    let runtime = Runtime::start(photon::app::Flags {
        lang: None,
        config_dir: Some(dir.path().to_string_lossy().into_owned()),
    });
    assert_eq!(
        runtime.app().banner().map(|n| n.message_key()),
        Some("notification-config-load-error")
    );
    assert_eq!(runtime.app().photos().len(), 11);
}
