// SPDX-License-Identifier: MPL-2.0
//! Media preloading: startup probes and progress tracking.

pub mod preload;
pub mod probe;

pub use preload::{PreloadTracker, ProbeOutcome, PROBE_TIMEOUT, SETTLING_DELAY};
pub use probe::probe;
