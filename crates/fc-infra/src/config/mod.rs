//! # Configuration Loader
//!
//! Reads a TOML file and maps it onto the `AppConfig` DTO.
//!
//! No validation and no defaults happen here: a missing key is an empty
//! value, and the caller decides what to fall back to.

use anyhow::Context;
use std::path::Path;

use fc_core::AppConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
