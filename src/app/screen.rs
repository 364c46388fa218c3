// SPDX-License-Identifier: MPL-2.0
//! Application screens.

/// Which top-level view is active.
///
/// The gallery only becomes interactive once the preloader has settled and
/// the screen switches away from `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Startup preload screen with the progress bar.
    #[default]
    Loading,
    /// The interactive slide gallery.
    Gallery,
}
