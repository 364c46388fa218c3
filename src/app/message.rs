// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::ProbeOutcome;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Raw input events are mapped
/// to these in the subscription so the update loop only sees semantic input.
#[derive(Debug, Clone)]
pub enum Message {
    /// One preload probe resolved (success, error, or timeout).
    ProbeResolved {
        /// Manifest id of the probed item.
        id: u32,
        /// How the probe resolved. All outcomes count towards progress.
        outcome: ProbeOutcome,
    },
    /// The settling delay after the final probe elapsed; the gallery may
    /// become interactive.
    PreloadSettled,
    /// The transition window elapsed; the navigation lock clears.
    TransitionElapsed,
    /// A key was pressed while no widget captured it.
    KeyPressed(iced::keyboard::Key),
    /// Wheel displacement in down-positive pixels.
    WheelScrolled(f32),
    /// A finger touched down at this y coordinate.
    TouchStarted(f32),
    /// A finger lifted at this y coordinate.
    TouchEnded(f32),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional gallery manifest path, overriding the configured one.
    pub manifest: Option<PathBuf>,
    /// Optional media directory to scan when no manifest is given.
    pub directory: Option<PathBuf>,
}
