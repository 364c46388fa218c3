// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the loading screen and
//! the gallery.
//!
//! The `App` struct wires the preload tracker, the slide navigator, and the
//! playback registry together and translates messages into timer tasks. The
//! domain state machines stay pure; every timer (probe timeout, settling
//! delay, transition unlock) is executed here as an Iced `Task`, which keeps
//! the timing-dependent behavior out of the testable core.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::domain::media::MediaItem;
use crate::domain::navigation::{Navigator, TransitionWindow, WheelCooldown};
use crate::domain::playback::PlaybackRegistry;
use crate::input::{SwipeTracker, WheelGate};
use crate::manifest;
use crate::media::{self, PreloadTracker, PROBE_TIMEOUT, SETTLING_DELAY};
use iced::{window, Task, Theme};
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    preload: PreloadTracker,
    navigator: Navigator,
    playback: PlaybackRegistry,
    wheel_gate: WheelGate,
    swipe: SwipeTracker,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("current_index", &self.navigator.current_index())
            .field("preload_complete", &self.preload.is_complete())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants Fn, not FnOnce, so the one-shot flags go through a
    // RefCell<Option<_>> and are taken on the first (only) call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state, loads the gallery manifest, and kicks
    /// off one preload probe per item.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app_config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load config: {err}");
            config::Config::default()
        });

        let items = gallery_items(flags, &app_config);

        let window = app_config
            .transition_ms
            .map_or_else(TransitionWindow::default, TransitionWindow::new);
        let cooldown = app_config
            .wheel_cooldown_ms
            .map_or_else(WheelCooldown::default, WheelCooldown::new);

        let total = items.len();
        let mut app = App {
            screen: Screen::Loading,
            preload: PreloadTracker::new(total),
            navigator: Navigator::new(items, window),
            playback: PlaybackRegistry::new(total),
            wheel_gate: WheelGate::new(cooldown),
            swipe: SwipeTracker::default(),
        };

        if app_config.skip_preload.unwrap_or(false) || app.preload.is_complete() {
            // Nothing to probe; still settle once so the handoff stays smooth.
            app.preload = PreloadTracker::new(0);
            return (app, Self::settling_task());
        }

        let probes = app
            .navigator
            .items()
            .iter()
            .cloned()
            .map(|item| {
                let id = item.id;
                Task::perform(media::probe(item, PROBE_TIMEOUT), move |outcome| {
                    Message::ProbeResolved { id, outcome }
                })
            })
            .collect::<Vec<_>>();

        (app, Task::batch(probes))
    }

    fn settling_task() -> Task<Message> {
        Task::perform(tokio::time::sleep(SETTLING_DELAY), |()| {
            Message::PreloadSettled
        })
    }

    fn title(&self) -> String {
        match self.navigator.current_item() {
            Some(item) if self.screen == Screen::Gallery => {
                format!("Keepsake — {}", item.title)
            }
            _ => "Keepsake".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Resolves the gallery sequence from the startup inputs.
///
/// A `--manifest` flag wins over the positional media directory, which wins
/// over the configured manifest. Any failure falls back to the demo gallery
/// with a diagnostic on stderr.
fn gallery_items(flags: Flags, app_config: &config::Config) -> Vec<MediaItem> {
    if let Some(path) = flags.manifest {
        return manifest_items(&path);
    }
    if let Some(dir) = flags.directory {
        return manifest::from_directory(&dir).unwrap_or_else(|err| {
            eprintln!("Failed to scan media directory {}: {err}", dir.display());
            manifest::default_items()
        });
    }
    match app_config.manifest.clone() {
        Some(path) => manifest_items(&path),
        None => manifest::default_items(),
    }
}

fn manifest_items(path: &Path) -> Vec<MediaItem> {
    manifest::load_from_path(path).unwrap_or_else(|err| {
        eprintln!("Failed to load manifest {}: {err}", path.display());
        manifest::default_items()
    })
}
