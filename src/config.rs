// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! All fields are optional so an older or hand-edited file keeps loading;
//! missing values fall back to the documented defaults. Timing values are
//! clamped through the navigation newtypes when the app consumes them.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Keepsake";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the gallery manifest. `None` uses the built-in demo gallery.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
    /// Skip the preload pass and unlock the gallery immediately (debug aid).
    #[serde(default)]
    pub skip_preload: Option<bool>,
    /// Transition lock duration in milliseconds.
    #[serde(default)]
    pub transition_ms: Option<u64>,
    /// Wheel cooldown in milliseconds.
    #[serde(default)]
    pub wheel_cooldown_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: None,
            skip_preload: Some(false),
            transition_ms: Some(crate::domain::navigation::DEFAULT_TRANSITION_WINDOW_MS),
            wheel_cooldown_ms: Some(crate::domain::navigation::DEFAULT_WHEEL_COOLDOWN_MS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
