// SPDX-License-Identifier: MPL-2.0
//! Type-safe wrappers for the navigation timing knobs.
//!
//! These newtypes enforce validity at the type level so persisted configs
//! cannot request nonsensical values.

use std::time::Duration;

/// Default transition window in milliseconds. Matches the longest
/// slide-transition animation so the lock outlives every style.
pub const DEFAULT_TRANSITION_WINDOW_MS: u64 = 1400;

/// Minimum transition window in milliseconds.
pub const MIN_TRANSITION_WINDOW_MS: u64 = 100;

/// Maximum transition window in milliseconds.
pub const MAX_TRANSITION_WINDOW_MS: u64 = 5000;

/// Default wheel cooldown in milliseconds.
pub const DEFAULT_WHEEL_COOLDOWN_MS: u64 = 1200;

/// Minimum wheel cooldown in milliseconds.
pub const MIN_WHEEL_COOLDOWN_MS: u64 = 100;

/// Maximum wheel cooldown in milliseconds.
pub const MAX_WHEEL_COOLDOWN_MS: u64 = 5000;

/// Time interval during which index changes are locked out after a
/// navigation request is accepted.
///
/// # Example
///
/// ```
/// use keepsake::domain::navigation::TransitionWindow;
///
/// let window = TransitionWindow::new(1400);
/// assert_eq!(window.millis(), 1400);
///
/// // Values outside range are clamped
/// let too_long = TransitionWindow::new(60_000);
/// assert_eq!(too_long.millis(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionWindow(u64);

impl TransitionWindow {
    /// Creates a new transition window, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_WINDOW_MS, MAX_TRANSITION_WINDOW_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the window as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionWindow {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_WINDOW_MS)
    }
}

/// Minimum pause between two accepted wheel events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelCooldown(u64);

impl WheelCooldown {
    /// Creates a new wheel cooldown, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_WHEEL_COOLDOWN_MS, MAX_WHEEL_COOLDOWN_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the cooldown as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for WheelCooldown {
    fn default() -> Self {
        Self(DEFAULT_WHEEL_COOLDOWN_MS)
    }
}
