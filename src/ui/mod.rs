// SPDX-License-Identifier: MPL-2.0
//! User interface views.
//!
//! Views here are pure render functions over the domain state; they emit no
//! messages of their own. Input reaches the app through the global event
//! subscription instead.

pub mod loading;
pub mod slide;
pub mod styles;
