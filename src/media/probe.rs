// SPDX-License-Identifier: MPL-2.0
//! Best-effort asynchronous load probes.
//!
//! One probe is issued per gallery item at startup: images are read and
//! decoded, videos get a metadata-only check (the player loads the stream
//! lazily when the slide is shown). Probes never retry; a stalled resource is
//! bounded by the per-item timeout.

use crate::domain::media::{MediaItem, MediaKind};
use crate::error::{Error, Result};
use crate::media::preload::ProbeOutcome;
use std::future::Future;
use std::time::Duration;

/// Probes one media item, forcing resolution after `timeout`.
pub async fn probe(item: MediaItem, timeout: Duration) -> ProbeOutcome {
    resolve(check(item), timeout).await
}

/// Races a check future against the probe timeout and folds the result into
/// a [`ProbeOutcome`]. Split out so timeout accounting is testable with an
/// arbitrary future instead of a stalled filesystem.
pub async fn resolve<F>(check: F, timeout: Duration) -> ProbeOutcome
where
    F: Future<Output = Result<()>>,
{
    match tokio::time::timeout(timeout, check).await {
        Ok(Ok(())) => ProbeOutcome::Loaded,
        Ok(Err(_)) => ProbeOutcome::Failed,
        Err(_) => ProbeOutcome::TimedOut,
    }
}

async fn check(item: MediaItem) -> Result<()> {
    match item.kind {
        MediaKind::Image => check_image(&item.source).await,
        MediaKind::Video => check_video(&item.source).await,
    }
}

/// Images must actually decode, not just exist, so the gallery never flashes
/// a broken frame after the loading screen.
async fn check_image(source: &str) -> Result<()> {
    let bytes = tokio::fs::read(source).await?;
    tokio::task::spawn_blocking(move || image_rs::load_from_memory(&bytes).map(|_| ()))
        .await
        .map_err(|err| Error::Image(err.to_string()))??;
    Ok(())
}

/// Metadata-only check: the file is present and non-empty.
async fn check_video(source: &str) -> Result<()> {
    let metadata = tokio::fs::metadata(source).await?;
    if metadata.len() == 0 {
        return Err(Error::Io(format!("'{source}' is empty")));
    }
    Ok(())
}
