// SPDX-License-Identifier: MPL-2.0
//! Touch input: vertical swipe detection.

use crate::domain::navigation::Direction;

/// Minimum vertical displacement, in logical pixels, for a press/lift pair
/// to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Tracks one in-flight touch gesture.
///
/// Only the vertical axis matters: the gallery scrolls vertically, so a
/// swipe up (finger moves towards smaller y) navigates forward, matching
/// the scroll metaphor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_y: Option<f32>,
}

impl SwipeTracker {
    /// Records where a finger touched down.
    pub fn begin(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Records where the finger lifted and returns the resulting navigation
    /// direction, if the displacement clears the threshold.
    ///
    /// A lift without a matching press is absorbed.
    pub fn finish(&mut self, y: f32) -> Option<Direction> {
        let start = self.start_y.take()?;
        let diff = start - y;
        if diff.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        Some(if diff > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }
}
