// SPDX-License-Identifier: MPL-2.0
//! Keyboard bindings for gallery navigation.
//!
//! Keys map to discrete intents; no throttling is applied here because the
//! transition lock already absorbs repeats.

use crate::domain::navigation::Direction;
use iced::keyboard::{key::Named, Key};

/// What a key press asks the gallery to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Step one slide in the given direction.
    Step(Direction),
    /// Jump to the first slide.
    First,
    /// Jump to the last slide.
    Last,
}

/// Maps a pressed key to a navigation intent.
///
/// ArrowDown, ArrowRight, and Space step forward; ArrowUp and ArrowLeft step
/// backward; Home and End jump to the ends of the sequence. Everything else
/// is ignored.
#[must_use]
pub fn intent_for_key(key: &Key) -> Option<Intent> {
    match key {
        Key::Named(Named::ArrowDown | Named::ArrowRight | Named::Space) => {
            Some(Intent::Step(Direction::Forward))
        }
        Key::Named(Named::ArrowUp | Named::ArrowLeft) => Some(Intent::Step(Direction::Backward)),
        Key::Named(Named::Home) => Some(Intent::First),
        Key::Named(Named::End) => Some(Intent::Last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_keys_step_forward() {
        for named in [Named::ArrowDown, Named::ArrowRight, Named::Space] {
            assert_eq!(
                intent_for_key(&Key::Named(named)),
                Some(Intent::Step(Direction::Forward))
            );
        }
    }

    #[test]
    fn backward_keys_step_backward() {
        for named in [Named::ArrowUp, Named::ArrowLeft] {
            assert_eq!(
                intent_for_key(&Key::Named(named)),
                Some(Intent::Step(Direction::Backward))
            );
        }
    }

    #[test]
    fn home_and_end_jump_to_the_ends() {
        assert_eq!(intent_for_key(&Key::Named(Named::Home)), Some(Intent::First));
        assert_eq!(intent_for_key(&Key::Named(Named::End)), Some(Intent::Last));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(intent_for_key(&Key::Named(Named::Escape)), None);
        assert_eq!(intent_for_key(&Key::Character("q".into())), None);
    }
}
