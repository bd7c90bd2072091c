// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use lightbox_dismiss::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.fallback_close_ms = Some(300);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.fallback_close_ms, Some(300));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::dismiss::FallbackDelay;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LightboxDismiss";

/// Default tracing filter when neither the settings file nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delay before the fallback hard close, in milliseconds.
    #[serde(default)]
    pub fallback_close_ms: Option<u64>,
    /// Pixels per wheel line for line-based scroll devices.
    #[serde(default)]
    pub wheel_line_height: Option<f32>,
    /// Media catalog to load into the gallery.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Tracing filter directive (e.g. `"lightbox_dismiss=debug"`).
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_close_ms: Some(DEFAULT_FALLBACK_CLOSE_MS),
            wheel_line_height: Some(DEFAULT_WHEEL_LINE_HEIGHT),
            catalog: None,
            log_filter: None,
        }
    }
}

impl Config {
    /// Returns the configured fallback delay, clamped to its valid range.
    #[must_use]
    pub fn fallback_delay(&self) -> FallbackDelay {
        self.fallback_close_ms
            .map(FallbackDelay::from_millis)
            .unwrap_or_default()
    }

    /// Returns the configured wheel line height, clamped to its valid range.
    #[must_use]
    pub fn wheel_line_height(&self) -> f32 {
        self.wheel_line_height
            .filter(|height| height.is_finite())
            .unwrap_or(DEFAULT_WHEEL_LINE_HEIGHT)
            .clamp(MIN_WHEEL_LINE_HEIGHT, MAX_WHEEL_LINE_HEIGHT)
    }

    /// Returns the tracing filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
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

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
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
