// SPDX-License-Identifier: MPL-2.0
//! Input adapters that turn raw events into navigation intents.
//!
//! Each adapter rate-limits or thresholds its own source; the transition lock
//! itself lives in the navigator and gates all of them equally.

pub mod keyboard;
pub mod touch;
pub mod wheel;

pub use keyboard::{intent_for_key, Intent};
pub use touch::SwipeTracker;
pub use wheel::WheelGate;
