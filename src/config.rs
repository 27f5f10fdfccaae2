// src/config.rs

//! Runtime configuration.
//!
//! Settings are read from the JSON file named by `CAIRO_SURFACE_CONFIG`, if
//! set. Any field missing from the file takes its default value.

use anyhow::Context;
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "CAIRO_SURFACE_CONFIG";

/// Process-wide configuration, loaded on first use.
///
/// A file that cannot be read or parsed is logged and replaced by the
/// defaults.
pub static CONFIG: Lazy<Config> = Lazy::new(|| match Config::load() {
    Ok(config) => config,
    Err(e) => {
        warn!("Using default configuration: {:#}", e);
        Config::default()
    }
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub jpeg: JpegConfig,
    pub font: FontSettings,
}

/// JPEG encoder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JpegConfig {
    /// Encoder quality when none is given explicitly, 1..=100.
    pub quality: u8,
}

impl Default for JpegConfig {
    fn default() -> Self {
        JpegConfig { quality: 90 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// FontConfig pattern used when none is given.
    pub default_pattern: String,
}

impl Default for FontSettings {
    fn default() -> Self {
        FontSettings {
            default_pattern: "monospace".to_string(),
        }
    }
}

impl Config {
    /// Loads the file named by [`CONFIG_ENV`], or the defaults when it is unset.
    pub fn load() -> anyhow::Result<Config> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Config::from_json_file(Path::new(&path)),
            None => {
                debug!("{} not set, using default configuration", CONFIG_ENV);
                Ok(Config::default())
            }
        }
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Config> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Config::from_json_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(text)?)
    }
}
