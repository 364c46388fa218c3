// SPDX-License-Identifier: MPL-2.0
//! `keepsake` is a scroll-driven photo and video gallery built with the Iced
//! GUI framework.
//!
//! A startup preloader probes every item in the fixed gallery sequence and
//! reports progress; once it settles, the slide navigator takes over, driven
//! by keyboard, wheel, and touch input.

#![doc(html_root_url = "https://docs.rs/keepsake/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod manifest;
pub mod media;
pub mod ui;
