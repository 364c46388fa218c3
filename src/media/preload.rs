// SPDX-License-Identifier: MPL-2.0
//! Preload progress tracking.
//!
//! [`PreloadTracker`] counts probe resolutions for the fixed gallery
//! sequence. Success, failure, and timeout all count identically so a broken
//! resource can never block readiness; the tracker only ever moves towards
//! completion. The tracker is pure and synchronous, probes and timers live in
//! the app layer.

use std::time::Duration;

/// Per-item probe timeout. A probe that has neither succeeded nor failed by
/// then is forced to resolve.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(2000);

/// Fixed pause between the last probe resolution and the ready signal, to
/// smooth the visual handoff from the loading screen.
pub const SETTLING_DELAY: Duration = Duration::from_millis(500);

/// Terminal state of a single media probe. Every probe resolves exactly once
/// with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The resource decoded (images) or its metadata was readable (videos).
    Loaded,
    /// The load attempt failed. Counted like a success for progress.
    Failed,
    /// Neither callback fired within [`PROBE_TIMEOUT`].
    TimedOut,
}

/// Tracks how many of the gallery's probes have resolved.
///
/// `completed` is monotonically non-decreasing and saturates at `total`, so
/// a stray duplicate resolution cannot push progress past 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadTracker {
    total: usize,
    completed: usize,
}

impl PreloadTracker {
    /// Creates a tracker for `total` pending probes. An empty gallery is
    /// complete from the start.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
        }
    }

    /// Records one probe resolution. The outcome does not matter for
    /// progress; errors and timeouts are deliberately counted like
    /// successes.
    ///
    /// Returns `true` exactly once: when this resolution completes the set.
    /// The caller uses that edge to arm the settling delay.
    pub fn record(&mut self, _outcome: ProbeOutcome) -> bool {
        if self.completed >= self.total {
            return false;
        }
        self.completed += 1;
        self.completed == self.total
    }

    /// Fractional progress as a percentage in `0.0..=100.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f32 {
        if self.total == 0 {
            return 100.0;
        }
        (self.completed as f32 / self.total as f32) * 100.0
    }

    /// True once every probe has resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }

    /// Number of probes that have resolved so far.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Total number of probes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }
}
