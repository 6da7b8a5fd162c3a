//! Turns the raw config file into the values the console runs with.
//!
//! The loader accepts whatever the file says; falling back to the shipped
//! defaults for missing values happens here.

use std::path::Path;

use anyhow::Context;
use fc_core::AppConfig;

pub fn resolve_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let Some(path) = config_path else {
        return Ok(AppConfig::with_system_defaults());
    };

    let loaded = fc_infra::load_config(path)
        .with_context(|| format!("Failed to load console config from {}", path.display()))?;
    Ok(fill_missing(loaded))
}

/// Zero poll settings and an empty log level mean "not configured".
fn fill_missing(mut config: AppConfig) -> AppConfig {
    let defaults = AppConfig::with_system_defaults();
    if config.refetch_interval_ms == 0 {
        config.refetch_interval_ms = defaults.refetch_interval_ms;
    }
    if config.refetch_max_attempts == 0 {
        config.refetch_max_attempts = defaults.refetch_max_attempts;
    }
    if config.log_level.trim().is_empty() {
        config.log_level = defaults.log_level;
    }
    config
}
