//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No business logic or policies**
//! ❌ **No validation logic**
//!
//! ## Iron Rule
//!
//! > **This module contains data only, no policy, no validation.**
//! > Missing keys become empty values; empty values are facts, not errors.

use crate::node::MdmConfig;
use crate::session::SubscriptionTier;

/// Console configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// License tier the server runs under
    pub tier: SubscriptionTier,

    /// Server-wide MDM toggles
    pub mdm: MdmConfig,

    /// Delay between two vitals polls while a refetch is pending
    pub refetch_interval_ms: u64,

    /// Number of vitals polls before giving up on a refetch
    pub refetch_max_attempts: u32,

    /// Default tracing filter (may be empty; `RUST_LOG` overrides it)
    pub log_level: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation. Empty
    /// strings and zero values are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section_bool = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
        };
        let section_int = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
        };

        Ok(Self {
            tier: SubscriptionTier::from_api(
                toml_value
                    .get("license")
                    .and_then(|l| l.get("tier"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            mdm: MdmConfig {
                mac_enabled_and_configured: section_bool("mdm", "macos_enabled_and_configured"),
                windows_enabled_and_configured: section_bool(
                    "mdm",
                    "windows_enabled_and_configured",
                ),
            },
            refetch_interval_ms: section_int("refetch", "interval_ms").max(0) as u64,
            refetch_max_attempts: section_int("refetch", "max_attempts").clamp(0, u32::MAX as i64)
                as u32,
            log_level: toml_value
                .get("logging")
                .and_then(|l| l.get("level"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            tier: SubscriptionTier::Free,
            mdm: MdmConfig::default(),
            refetch_interval_ms: 0,
            refetch_max_attempts: 0,
            log_level: String::new(),
        }
    }

    /// AppConfig with the defaults the console ships with: free tier, MDM off,
    /// poll every second for up to a minute.
    pub fn with_system_defaults() -> Self {
        Self {
            refetch_interval_ms: 1_000,
            refetch_max_attempts: 60,
            log_level: "info".to_string(),
            ..Self::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [license]
            tier = "premium"

            [mdm]
            macos_enabled_and_configured = true
            windows_enabled_and_configured = false

            [refetch]
            interval_ms = 500
            max_attempts = 10

            [logging]
            level = "debug"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.tier, SubscriptionTier::Premium);
        assert!(config.mdm.mac_enabled_and_configured);
        assert!(!config.mdm.windows_enabled_and_configured);
        assert_eq!(config.refetch_interval_ms, 500);
        assert_eq!(config.refetch_max_attempts, 10);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[license]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_does_not_validate_negative_interval() {
        let toml_str = r#"
            [refetch]
            interval_ms = -5
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Not rejected, only clamped into the unsigned range
        assert_eq!(config.refetch_interval_ms, 0);
    }

    #[test]
    fn test_with_system_defaults_polls_for_a_minute() {
        let config = AppConfig::with_system_defaults();

        assert_eq!(config.refetch_interval_ms, 1_000);
        assert_eq!(config.refetch_max_attempts, 60);
        assert_eq!(config.tier, SubscriptionTier::Free);
        assert_eq!(config.log_level, "info");
    }
}
