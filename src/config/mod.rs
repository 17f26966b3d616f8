//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use sitebox::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Default hero slider interval in milliseconds.
///
/// Matches the fallback the site applies when a slider carries no
/// `data-interval` attribute.
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5000;

/// Minimum accepted slider interval in milliseconds.
pub const MIN_SLIDE_INTERVAL_MS: u64 = 500;

/// Maximum accepted slider interval in milliseconds.
pub const MAX_SLIDE_INTERVAL_MS: u64 = 60_000;

/// Default capacity of the interaction activity log.
pub const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = 1000;

/// Minimum capacity of the interaction activity log.
pub const MIN_ACTIVITY_LOG_CAPACITY: usize = 10;

/// Maximum capacity of the interaction activity log.
pub const MAX_ACTIVITY_LOG_CAPACITY: usize = 10_000;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub slide_interval_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            slide_interval_ms: Some(DEFAULT_SLIDE_INTERVAL_MS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
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
