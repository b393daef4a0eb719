//! # Configuration Loader
//!
//! `load_config` is pure data loading: read the TOML file and map it into
//! [`AppConfig`], accepting whatever is in the file. Defaults and
//! environment overrides are applied afterwards by [`resolve_config`].

use anyhow::Context;
use std::path::{Path, PathBuf};
use cc_core::config::AppConfig;

/// Used when neither the file nor the environment names a backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub const ENV_API_BASE_URL: &str = "CLOUDCLIP_API_BASE_URL";
pub const ENV_PRODUCTION: &str = "CLOUDCLIP_PRODUCTION";

/// Load configuration from a TOML file.
///
/// No validation is performed: empty strings and missing sections map to
/// empty values.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    Ok(AppConfig::from_toml(&toml_value))
}

/// `<config_dir>/cloudclip/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cloudclip").join("config.toml"))
}

/// Builds the effective configuration.
///
/// An explicit path must exist. The default path is optional; a missing
/// file there means "use defaults". Environment variables (after `.env` is
/// loaded) win over the file.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            tracing::warn!(error = %err, "Failed to load .env file");
        }
    }

    let config = match explicit {
        Some(path) => load_config(&path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_config(&path)?,
            _ => {
                tracing::debug!("No config file found, using defaults");
                AppConfig::empty()
            }
        },
    };

    Ok(apply_defaults(apply_env_overrides(config, |key| {
        std::env::var(key).ok()
    })))
}

pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(base_url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = base_url;
    }
    if let Some(flag) = lookup(ENV_PRODUCTION) {
        config.production = matches!(flag.trim(), "1" | "true" | "TRUE" | "yes");
    }
    config
}

pub fn apply_defaults(mut config: AppConfig) -> AppConfig {
    if config.api_base_url.trim().is_empty() {
        config.api_base_url = DEFAULT_API_BASE_URL.to_string();
    }
    config
}
