// SPDX-License-Identifier: MPL-2.0
//! Wheel input gate.
//!
//! A wheel event only becomes a navigation step when the displacement is
//! large enough to be deliberate and the cooldown since the last accepted
//! event has elapsed. The gate takes `now` as a parameter so tests drive it
//! with constructed instants instead of waiting on the wall clock.

use crate::domain::navigation::{Direction, WheelCooldown};
use std::time::Instant;

/// Minimum wheel displacement magnitude, in down-positive pixels, below
/// which an event is treated as scroll noise.
pub const WHEEL_DELTA_THRESHOLD: f32 = 30.0;

/// Approximate pixels represented by one wheel line tick.
pub const PIXELS_PER_LINE: f32 = 40.0;

/// Rate limiter for wheel-driven navigation.
#[derive(Debug, Clone, Copy)]
pub struct WheelGate {
    cooldown: WheelCooldown,
    last_accepted: Option<Instant>,
}

impl WheelGate {
    /// Creates a gate with the given cooldown between accepted events.
    #[must_use]
    pub fn new(cooldown: WheelCooldown) -> Self {
        Self {
            cooldown,
            last_accepted: None,
        }
    }

    /// Offers a wheel displacement to the gate.
    ///
    /// `delta_y` is down-positive pixels. Returns the navigation direction
    /// when the event is accepted, recording `now` as the new cooldown
    /// anchor; returns `None` for sub-threshold or too-frequent events,
    /// which leave the anchor untouched.
    pub fn accept(&mut self, delta_y: f32, now: Instant) -> Option<Direction> {
        if delta_y.abs() <= WHEEL_DELTA_THRESHOLD {
            return None;
        }
        if let Some(last) = self.last_accepted {
            if now.duration_since(last) < self.cooldown.as_duration() {
                return None;
            }
        }
        self.last_accepted = Some(now);
        Some(if delta_y > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }
}

impl Default for WheelGate {
    fn default() -> Self {
        Self::new(WheelCooldown::default())
    }
}

/// Converts an Iced scroll delta into down-positive pixels.
///
/// Iced reports upward scrolls as positive `y`; the gallery counts downward
/// as forward, so the sign flips here. Line deltas are scaled to pixels.
#[must_use]
pub fn scroll_pixels(delta: &iced::mouse::ScrollDelta) -> f32 {
    match delta {
        iced::mouse::ScrollDelta::Lines { y, .. } => -y * PIXELS_PER_LINE,
        iced::mouse::ScrollDelta::Pixels { y, .. } => -y,
    }
}
