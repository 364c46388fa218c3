// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure gallery types and state machines.
//!
//! Everything in this module is framework-free. The navigation and playback
//! state machines are reducer-style: an explicit state value plus operations
//! that return side-effect commands, so they can be tested in isolation from
//! rendering and timers.

pub mod media;
pub mod navigation;
pub mod playback;

pub use media::{MediaItem, MediaKind, TransitionStyle};
pub use navigation::{Direction, NavCommand, Navigator};
pub use playback::{PlaybackRegistry, PlaybackState};
