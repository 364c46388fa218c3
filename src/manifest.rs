// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest loading.
//!
//! The manifest is a TOML file with one `[[item]]` table per slide:
//!
//! ```toml
//! [[item]]
//! id = 1
//! source = "images/1.jpeg"
//! title = "where it began"
//! transition = "fade"
//!
//! [[item]]
//! id = 4
//! source = "images/4.mov"
//! title = "in motion"
//! transition = "blur"
//! ```
//!
//! `kind` may be given explicitly; otherwise it is inferred from the source
//! extension. Items are sorted by `id`, which must be unique. The resulting
//! sequence is fixed for the whole session.

use crate::domain::media::{MediaItem, MediaKind, TransitionStyle};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    item: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: u32,
    source: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    kind: Option<MediaKind>,
    #[serde(default)]
    transition: Option<TransitionStyle>,
}

/// Loads and validates a gallery manifest.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, if it contains no
/// items, if an id is duplicated, or if an entry has no explicit kind and an
/// extension that maps to neither image nor video.
pub fn load_from_path(path: &Path) -> Result<Vec<MediaItem>> {
    let content = fs::read_to_string(path)?;
    let parsed: ManifestFile =
        toml::from_str(&content).map_err(|e| Error::Manifest(e.to_string()))?;
    items_from_entries(parsed.item)
}

fn items_from_entries(entries: Vec<ManifestEntry>) -> Result<Vec<MediaItem>> {
    if entries.is_empty() {
        return Err(Error::Manifest("manifest contains no items".to_string()));
    }

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id) {
            return Err(Error::Manifest(format!("duplicate id {}", entry.id)));
        }
        let kind = match entry.kind {
            Some(kind) => kind,
            None => MediaKind::from_source(&entry.source).ok_or_else(|| {
                Error::Manifest(format!(
                    "cannot infer kind for '{}'; add an explicit kind",
                    entry.source
                ))
            })?,
        };
        items.push(
            MediaItem::new(entry.id, entry.source, entry.title)
                .with_kind(kind)
                .with_transition(entry.transition.unwrap_or_default()),
        );
    }

    // Stable ordering key, independent of file order.
    items.sort_by_key(|item| item.id);
    Ok(items)
}

/// Builds a gallery by scanning a directory for media files.
///
/// Files whose extension maps to neither image nor video are skipped.
/// Sources are ordered by file name and ids assigned in that order; the
/// title is the file stem. Every item keeps the default transition.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or if it contains no
/// recognizable media files.
pub fn from_directory(dir: &Path) -> Result<Vec<MediaItem>> {
    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        // Non-UTF-8 paths cannot round-trip through the manifest format.
        let Some(source) = path.to_str() else {
            continue;
        };
        if MediaKind::from_source(source).is_some() {
            sources.push(source.to_string());
        }
    }
    if sources.is_empty() {
        return Err(Error::Manifest(format!(
            "no media files found in {}",
            dir.display()
        )));
    }
    sources.sort();

    let mut items = Vec::with_capacity(sources.len());
    let mut next_id = 1u32;
    for source in sources {
        let title = Path::new(&source)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();
        items.push(MediaItem::new(next_id, source, title));
        next_id += 1;
    }
    Ok(items)
}

/// Built-in demo gallery used when no manifest is configured.
///
/// Mirrors the canonical eight-slide sequence: seven images and one video,
/// each with its own transition tag.
#[must_use]
pub fn default_items() -> Vec<MediaItem> {
    vec![
        MediaItem::new(1, "images/1.jpeg", "first light")
            .with_transition(TransitionStyle::Fade),
        MediaItem::new(2, "images/2.jpeg", "october").with_transition(TransitionStyle::Flip),
        MediaItem::new(3, "images/3.png", "late session")
            .with_transition(TransitionStyle::Scale),
        MediaItem::new(4, "images/4.mov", "in motion").with_transition(TransitionStyle::Blur),
        MediaItem::new(5, "images/5.png", "portrait").with_transition(TransitionStyle::Rotate),
        MediaItem::new(6, "images/6.png", "detour").with_transition(TransitionStyle::Elastic),
        MediaItem::new(7, "images/7.png", "golden hour")
            .with_transition(TransitionStyle::Bounce),
        MediaItem::new(8, "images/8.png", "the last one")
            .with_transition(TransitionStyle::Slide),
    ]
}
