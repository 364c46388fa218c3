// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios over the public gallery API: preload accounting,
//! navigation locking, input gating, and playback handoff.

use keepsake::domain::media::{MediaItem, MediaKind};
use keepsake::domain::navigation::{
    Direction, NavCommand, Navigator, TransitionWindow, WheelCooldown,
};
use keepsake::domain::playback::PlaybackRegistry;
use keepsake::input::{SwipeTracker, WheelGate};
use keepsake::media::{probe, PreloadTracker, ProbeOutcome, PROBE_TIMEOUT, SETTLING_DELAY};
use std::time::{Duration, Instant};

/// The canonical eight-slide gallery: one video at index 3, images elsewhere.
fn demo_gallery() -> Vec<MediaItem> {
    (0..8u32)
        .map(|i| {
            let source = if i == 3 {
                format!("images/{}.mov", i + 1)
            } else {
                format!("images/{}.jpeg", i + 1)
            };
            MediaItem::new(i + 1, source, format!("slide {}", i + 1))
        })
        .collect()
}

fn navigator() -> Navigator {
    Navigator::new(demo_gallery(), TransitionWindow::new(1400))
}

#[test]
fn preload_reaches_one_hundred_percent_for_any_outcome_mix() {
    let mut tracker = PreloadTracker::new(8);
    let outcomes = [
        ProbeOutcome::Loaded,
        ProbeOutcome::Loaded,
        ProbeOutcome::Failed,
        ProbeOutcome::TimedOut, // the video that never fires a callback
        ProbeOutcome::Loaded,
        ProbeOutcome::Failed,
        ProbeOutcome::Loaded,
        ProbeOutcome::Loaded,
    ];

    let mut final_edge = 0;
    for outcome in outcomes {
        if tracker.record(outcome) {
            final_edge += 1;
        }
    }

    assert_eq!(tracker.completed(), 8);
    assert_eq!(tracker.progress_percent(), 100.0);
    assert!(tracker.is_complete());
    // The settling delay is armed exactly once.
    assert_eq!(final_edge, 1);
}

#[tokio::test]
async fn a_stalled_probe_is_bounded_by_the_timeout() {
    // A probe whose callbacks never fire resolves as a timeout, so overall
    // readiness is reached within timeout + settling delay.
    let started = Instant::now();
    let outcome = keepsake::media::probe::resolve(
        std::future::pending(),
        Duration::from_millis(50),
    )
    .await;
    assert_eq!(outcome, ProbeOutcome::TimedOut);
    assert!(started.elapsed() < Duration::from_millis(50) + SETTLING_DELAY);

    let mut tracker = PreloadTracker::new(1);
    tracker.record(outcome);
    assert_eq!(tracker.progress_percent(), 100.0);
}

#[tokio::test]
async fn probing_the_default_gallery_paths_fails_but_completes() {
    // None of the demo paths exist on disk; every probe must still resolve.
    let mut tracker = PreloadTracker::new(8);
    for item in demo_gallery() {
        let outcome = probe(item, PROBE_TIMEOUT).await;
        assert_eq!(outcome, ProbeOutcome::Failed);
        tracker.record(outcome);
    }
    assert!(tracker.is_complete());
}

#[test]
fn go_to_current_index_is_a_no_op() {
    let mut nav = navigator();
    assert!(nav.go_to(0).is_empty());
    assert_eq!(nav.current_index(), 0);
    assert!(!nav.is_transitioning());
}

#[test]
fn navigation_requests_mid_transition_are_dropped() {
    // N=8, start at 0: step(forward) moves to 1 and locks; goTo(0) before
    // the window elapses is a no-op.
    let mut nav = navigator();
    let commands = nav.step(Direction::Forward);
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.last_direction(), Direction::Forward);
    assert!(nav.is_transitioning());
    assert!(commands.contains(&NavCommand::ScheduleUnlock(Duration::from_millis(1400))));

    assert!(nav.go_to(0).is_empty());
    assert_eq!(nav.current_index(), 1);

    nav.finish_transition();
    assert!(!nav.is_transitioning());
    assert_eq!(nav.current_index(), 1);
}

#[test]
fn steps_clamp_at_both_boundaries() {
    let mut nav = navigator();
    assert!(nav.step(Direction::Backward).is_empty());
    assert_eq!(nav.current_index(), 0);

    nav.go_to(7);
    nav.finish_transition();
    assert!(nav.step(Direction::Forward).is_empty());
    assert_eq!(nav.current_index(), 7);
}

#[test]
fn exactly_one_video_plays_after_navigating_to_it() {
    let mut nav = navigator();
    let mut playback = PlaybackRegistry::new(nav.len());

    playback.apply_all(&nav.go_to(3));
    assert_eq!(playback.playing_index(), Some(3));
    assert_eq!(playback.playing_count(), 1);

    let slot = playback.slot(3).unwrap();
    assert!(slot.state.is_playing());
    assert_eq!(slot.position_secs, 0.0);

    nav.finish_transition();
    playback.apply_all(&nav.go_to(6));
    assert_eq!(playback.playing_count(), 0);
    assert!(playback.slot(3).unwrap().state.is_paused());
}

#[test]
fn returning_to_a_video_restarts_it_from_zero() {
    let mut nav = navigator();
    let mut playback = PlaybackRegistry::new(nav.len());

    playback.apply_all(&nav.go_to(3));
    nav.finish_transition();
    playback.apply_all(&nav.go_to(5));
    nav.finish_transition();
    playback.apply_all(&nav.go_to(3));

    let slot = playback.slot(3).unwrap();
    assert!(slot.state.is_playing());
    assert_eq!(slot.position_secs, 0.0);
    assert_eq!(playback.playing_count(), 1);
}

#[test]
fn wheel_below_threshold_never_navigates() {
    let mut gate = WheelGate::new(WheelCooldown::new(1200));
    let mut nav = navigator();

    // |deltaY| = 10 is under the threshold of 30.
    assert_eq!(gate.accept(10.0, Instant::now()), None);
    assert_eq!(nav.current_index(), 0);

    // A deliberate scroll passes and steps the gallery.
    if let Some(direction) = gate.accept(120.0, Instant::now()) {
        nav.step(direction);
    }
    assert_eq!(nav.current_index(), 1);
}

#[test]
fn wheel_cooldown_limits_navigation_rate() {
    let mut gate = WheelGate::new(WheelCooldown::new(1200));
    let mut nav = navigator();
    let t0 = Instant::now();

    for ms in [0u64, 100, 300, 700, 1100, 1300] {
        if let Some(direction) = gate.accept(120.0, t0 + Duration::from_millis(ms)) {
            let commands = nav.step(direction);
            if !commands.is_empty() {
                nav.finish_transition();
            }
        }
    }

    // Only the events at 0ms and 1300ms clear the cooldown.
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn swipe_and_keyboard_share_the_same_lock() {
    let mut nav = navigator();
    let mut swipe = SwipeTracker::default();

    swipe.begin(600.0);
    let direction = swipe.finish(300.0).expect("swipe should register");
    nav.step(direction);
    assert_eq!(nav.current_index(), 1);

    // Keyboard input mid-transition is dropped like everything else.
    assert!(nav.step(Direction::Forward).is_empty());
    assert_eq!(nav.current_index(), 1);
}

#[test]
fn manifest_round_trip_through_a_real_file() {
    use std::io::Write;

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("gallery.toml");
    let mut file = std::fs::File::create(&path).expect("failed to create manifest");
    write!(
        file,
        r#"
        [[item]]
        id = 2
        source = "images/second.png"
        title = "second"

        [[item]]
        id = 1
        source = "images/first.mov"
        title = "first"
        transition = "elastic"
        "#
    )
    .expect("failed to write manifest");

    let items = keepsake::manifest::load_from_path(&path).expect("manifest should load");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].kind, MediaKind::Video);
    assert_eq!(items[1].id, 2);

    let nav = Navigator::new(items, TransitionWindow::default());
    assert_eq!(nav.len(), 2);
    assert_eq!(nav.current_item().unwrap().title, "first");
}
