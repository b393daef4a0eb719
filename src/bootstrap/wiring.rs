//! # Dependency Injection
//!
//! The only place that depends on cc-infra and cc-app together. It builds
//! the concrete adapters from [`AppConfig`] and hands them to the app as
//! ports; it makes no decisions of its own.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use cc_app::{App, AppDeps};
use cc_core::config::AppConfig;
use cc_infra::{HttpShareApi, QrCodeRenderer, SystemClock};

/// `0` means no client-side timeout.
fn request_timeout(config: &AppConfig) -> Option<Duration> {
    (config.request_timeout_secs > 0).then(|| Duration::from_secs(config.request_timeout_secs))
}

pub fn wire_dependencies(config: &AppConfig) -> anyhow::Result<AppDeps> {
    let api = Arc::new(
        HttpShareApi::new(&config.api_base_url, request_timeout(config))
            .with_context(|| format!("Failed to create API client for {}", config.api_base_url))?,
    );

    Ok(AppDeps {
        clipboard_api: api.clone(),
        file_api: api.clone(),
        url_api: api,
        qr: Arc::new(QrCodeRenderer::new()),
        clock: Arc::new(SystemClock),
    })
}

pub fn build_app(config: &AppConfig) -> anyhow::Result<App> {
    tracing::debug!(base_url = %config.api_base_url, "Wiring application");
    Ok(App::new(wire_dependencies(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_means_none() {
        let mut config = AppConfig::empty();
        assert_eq!(request_timeout(&config), None);
        config.request_timeout_secs = 15;
        assert_eq!(request_timeout(&config), Some(Duration::from_secs(15)));
    }

    #[test]
    fn empty_base_url_fails_wiring() {
        assert!(wire_dependencies(&AppConfig::empty()).is_err());
    }

    #[test]
    fn wires_with_configured_base_url() {
        let mut config = AppConfig::empty();
        config.api_base_url = "http://localhost:8000".to_string();
        assert!(build_app(&config).is_ok());
    }
}
