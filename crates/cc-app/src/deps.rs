//! # Application Dependencies
//!
//! Dependency grouping for [`crate::App`] construction. Just parameter
//! grouping: no build steps, no defaults.

use std::sync::Arc;

use cc_core::ports::*;

pub struct AppDeps {
    // Sharing API
    pub clipboard_api: Arc<dyn ClipboardApiPort>,
    pub file_api: Arc<dyn FileApiPort>,
    pub url_api: Arc<dyn UrlApiPort>,

    // Rendering
    pub qr: Arc<dyn QrEncoderPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
