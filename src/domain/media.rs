// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! The ordered sequence of [`MediaItem`]s is fixed at startup and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Represents different types of media formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Static image (JPEG, PNG, GIF, WebP).
    Image,
    /// Video (MOV, MP4, WebM, Ogg).
    Video,
}

impl MediaKind {
    /// Infers the media kind from a file extension.
    ///
    /// Returns `None` for unknown extensions so callers can decide whether
    /// to reject the entry or fall back to a default.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" => Some(Self::Image),
            "mov" | "mp4" | "webm" | "ogg" => Some(Self::Video),
            _ => None,
        }
    }

    /// Infers the media kind from a source path or URI.
    #[must_use]
    pub fn from_source(source: &str) -> Option<Self> {
        Path::new(source)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns true if this is a video.
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

/// Per-slide transition tag. The animation parameters behind each tag belong
/// to the presentation layer; the tag itself is gallery data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStyle {
    #[default]
    Fade,
    Slide,
    Flip,
    Scale,
    Blur,
    Rotate,
    Elastic,
    Bounce,
}

/// One entry in the fixed ordered gallery sequence.
///
/// Items are immutable once the manifest is loaded; `id` is a unique, stable
/// ordering key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Unique, stable ordering key.
    pub id: u32,
    /// Path or URI of the media resource.
    pub source: String,
    /// Image or video.
    pub kind: MediaKind,
    /// Caption shown with the slide.
    pub title: String,
    /// Transition tag for the presentation layer.
    pub transition: TransitionStyle,
}

impl MediaItem {
    /// Creates a new media item, inferring the kind from the source extension
    /// when possible and defaulting to [`MediaKind::Image`] otherwise.
    #[must_use]
    pub fn new(id: u32, source: impl Into<String>, title: impl Into<String>) -> Self {
        let source = source.into();
        let kind = MediaKind::from_source(&source).unwrap_or(MediaKind::Image);
        Self {
            id,
            source,
            kind,
            title: title.into(),
            transition: TransitionStyle::default(),
        }
    }

    /// Sets the transition tag.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionStyle) -> Self {
        self.transition = transition;
        self
    }

    /// Overrides the inferred media kind.
    #[must_use]
    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind = kind;
        self
    }
}
