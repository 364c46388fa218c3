// SPDX-License-Identifier: MPL-2.0
//! Slide navigation state machine.
//!
//! The [`Navigator`] owns the current slide index, the transition lock, and
//! the last navigation direction. Index-changing operations return a small
//! list of [`NavCommand`]s describing the side effects the caller must carry
//! out (play/pause videos, schedule the unlock timer). The navigator itself
//! never touches a timer or a widget, which keeps the transition rules
//! deterministically testable.
//!
//! Requests arriving while a transition is in flight are dropped, never
//! queued: rapid input is lossy, not reordering-prone. Boundary steps clamp
//! rather than wrap.

mod timings;

pub use timings::{
    TransitionWindow, WheelCooldown, DEFAULT_TRANSITION_WINDOW_MS, DEFAULT_WHEEL_COOLDOWN_MS,
    MAX_TRANSITION_WINDOW_MS, MAX_WHEEL_COOLDOWN_MS, MIN_TRANSITION_WINDOW_MS,
    MIN_WHEEL_COOLDOWN_MS,
};

use crate::domain::media::MediaItem;
use std::time::Duration;

/// Direction of the last accepted navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards higher indices.
    #[default]
    Forward,
    /// Towards lower indices.
    Backward,
}

/// Side effect requested by an accepted navigation.
///
/// Commands are data; the app layer executes them (spinning timers, driving
/// the playback registry). An empty command list means the request was a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Restart the video at this index from time zero and play it.
    RestartVideo(usize),
    /// Pause the video at this index.
    PauseVideo(usize),
    /// Clear the transition lock after this duration.
    ScheduleUnlock(Duration),
}

/// Owns the gallery sequence and the navigation state.
///
/// Invariant: `current_index` only changes while `is_transitioning` is false
/// at request time; the flag is set for the duration of the transition
/// window, then cleared by [`Navigator::finish_transition`].
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    items: Vec<MediaItem>,
    current_index: usize,
    is_transitioning: bool,
    last_direction: Direction,
    window: TransitionWindow,
}

impl Navigator {
    /// Creates a navigator over a fixed ordered sequence, starting at index 0.
    #[must_use]
    pub fn new(items: Vec<MediaItem>, window: TransitionWindow) -> Self {
        Self {
            items,
            current_index: 0,
            is_transitioning: false,
            last_direction: Direction::default(),
            window,
        }
    }

    /// Requests a jump to an absolute index.
    ///
    /// Returns the side-effect commands for an accepted request, or an empty
    /// list when the request is silently absorbed: same index, transition in
    /// flight, or index out of bounds.
    pub fn go_to(&mut self, index: usize) -> Vec<NavCommand> {
        if self.is_transitioning || index == self.current_index || index >= self.items.len() {
            return Vec::new();
        }

        self.last_direction = if index > self.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current_index = index;
        self.is_transitioning = true;

        let mut commands = self.playback_commands();
        commands.push(NavCommand::ScheduleUnlock(self.window.as_duration()));
        commands
    }

    /// Requests a single step in the given direction.
    ///
    /// Clamps at the gallery boundaries: stepping forward on the last slide
    /// or backward on the first is a no-op, never a wrap-around.
    pub fn step(&mut self, direction: Direction) -> Vec<NavCommand> {
        let target = match direction {
            Direction::Forward => self.current_index.checked_add(1),
            Direction::Backward => self.current_index.checked_sub(1),
        };
        match target {
            Some(index) if index < self.items.len() => self.go_to(index),
            _ => Vec::new(),
        }
    }

    /// Clears the transition lock. Called when the transition window elapses.
    pub fn finish_transition(&mut self) {
        self.is_transitioning = false;
    }

    /// Computes the playback commands for the current index without changing
    /// any state: pause every non-current video, restart the current item if
    /// it is a video.
    ///
    /// Used on its own when the gallery first becomes interactive, so a video
    /// on the opening slide starts playing.
    #[must_use]
    pub fn playback_commands(&self) -> Vec<NavCommand> {
        let mut commands = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            if !item.kind.is_video() {
                continue;
            }
            if index == self.current_index {
                commands.push(NavCommand::RestartVideo(index));
            } else {
                commands.push(NavCommand::PauseVideo(index));
            }
        }
        commands
    }

    /// Returns the current slide index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns true while a transition window is open.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    /// Returns the direction of the last accepted navigation.
    #[must_use]
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Returns the item at the current index, if the gallery is non-empty.
    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.items.get(self.current_index)
    }

    /// Returns the full ordered sequence.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the gallery is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks if the current slide is the last one.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        !self.items.is_empty() && self.current_index == self.items.len() - 1
    }

    /// Checks if the current slide is the first one.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current_index == 0
    }
}
