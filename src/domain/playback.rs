// SPDX-License-Identifier: MPL-2.0
//! Video playback bookkeeping.
//!
//! [`PlaybackRegistry`] tracks the playback state of every video slide and
//! applies the navigator's playback commands. The single "currently playing"
//! slot moves atomically within one [`PlaybackRegistry::apply`] call, so no
//! two videos are ever marked playing at the same time.

use crate::domain::navigation::NavCommand;

/// Represents the current playback state of a video slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Video is stopped (never started or reset).
    #[default]
    Stopped,
    /// Video is currently playing.
    Playing,
    /// Video is paused at its current position.
    Paused,
}

impl PlaybackState {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the video is stopped.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

/// Per-slide playback slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackSlot {
    /// Current playback state.
    pub state: PlaybackState,
    /// Playback position in seconds. Reset to zero on every restart.
    pub position_secs: f64,
}

/// Tracks playback state for every slide index.
///
/// Non-video slides carry a slot too; it simply never leaves `Stopped`.
/// Indexing by slide position keeps command application O(1).
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRegistry {
    slots: Vec<PlaybackSlot>,
}

impl PlaybackRegistry {
    /// Creates a registry for a gallery of `len` slides, all stopped.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![PlaybackSlot::default(); len],
        }
    }

    /// Applies one navigation command. Unlock scheduling is not a playback
    /// concern and is ignored here.
    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::RestartVideo(index) => {
                if let Some(slot) = self.slots.get_mut(index) {
                    slot.state = PlaybackState::Playing;
                    slot.position_secs = 0.0;
                }
            }
            NavCommand::PauseVideo(index) => {
                if let Some(slot) = self.slots.get_mut(index) {
                    if slot.state.is_playing() {
                        slot.state = PlaybackState::Paused;
                    }
                }
            }
            NavCommand::ScheduleUnlock(_) => {}
        }
    }

    /// Applies a batch of commands in order.
    pub fn apply_all(&mut self, commands: &[NavCommand]) {
        for command in commands {
            self.apply(*command);
        }
    }

    /// Returns the slot for a slide index.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<PlaybackSlot> {
        self.slots.get(index).copied()
    }

    /// Returns the index of the playing video, if any.
    #[must_use]
    pub fn playing_index(&self) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.state.is_playing())
    }

    /// Counts slides currently marked playing. By contract this is 0 or 1.
    #[must_use]
    pub fn playing_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.state.is_playing())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_stopped() {
        assert_eq!(PlaybackState::default(), PlaybackState::Stopped);
        assert!(PlaybackRegistry::new(3).playing_index().is_none());
    }

    #[test]
    fn restart_marks_playing_and_resets_position() {
        let mut registry = PlaybackRegistry::new(3);
        registry.apply(NavCommand::RestartVideo(1));
        let slot = registry.slot(1).unwrap();
        assert!(slot.state.is_playing());
        assert_eq!(slot.position_secs, 0.0);
    }

    #[test]
    fn pause_only_affects_playing_slots() {
        let mut registry = PlaybackRegistry::new(3);
        registry.apply(NavCommand::PauseVideo(0));
        assert!(registry.slot(0).unwrap().state.is_stopped());

        registry.apply(NavCommand::RestartVideo(0));
        registry.apply(NavCommand::PauseVideo(0));
        assert!(registry.slot(0).unwrap().state.is_paused());
    }

    #[test]
    fn switching_slides_transfers_the_playing_slot() {
        let mut registry = PlaybackRegistry::new(4);
        registry.apply_all(&[NavCommand::RestartVideo(1)]);
        assert_eq!(registry.playing_index(), Some(1));

        registry.apply_all(&[NavCommand::PauseVideo(1), NavCommand::RestartVideo(3)]);
        assert_eq!(registry.playing_index(), Some(3));
        assert_eq!(registry.playing_count(), 1);
        assert!(registry.slot(1).unwrap().state.is_paused());
    }

    #[test]
    fn out_of_range_commands_are_absorbed() {
        let mut registry = PlaybackRegistry::new(2);
        registry.apply(NavCommand::RestartVideo(9));
        registry.apply(NavCommand::PauseVideo(9));
        assert_eq!(registry.playing_count(), 0);
    }

    #[test]
    fn unlock_commands_are_ignored() {
        let mut registry = PlaybackRegistry::new(2);
        registry.apply(NavCommand::ScheduleUnlock(std::time::Duration::from_millis(1400)));
        assert_eq!(registry, PlaybackRegistry::new(2));
    }
}
