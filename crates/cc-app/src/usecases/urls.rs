use std::sync::Arc;

use cc_core::error::ShareResult;
use cc_core::ports::{QrImage, UrlApiPort};
use cc_core::url::{
    normalize_alias, validate_alias, validate_target_url, ResolveOutcome, ShortUrlRecord,
    ShortenRequest,
};
use tracing::{info, warn};

use super::GenerateQr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub record: ShortUrlRecord,
    /// `None` when the short URL exists but could not be rendered.
    pub qr: Option<QrImage>,
}

/// Validates the target and alias, shortens, and renders the result as QR.
pub struct ShortenUrl {
    api: Arc<dyn UrlApiPort>,
    qr: Arc<GenerateQr>,
}

impl ShortenUrl {
    pub fn from_ports(api: Arc<dyn UrlApiPort>, qr: Arc<GenerateQr>) -> Self {
        Self { api, qr }
    }

    #[tracing::instrument(name = "usecase.shorten_url.execute", skip_all, fields(alias = ?alias))]
    pub async fn execute(&self, url: &str, alias: Option<&str>) -> ShareResult<ShortenedUrl> {
        validate_target_url(url)?;
        let alias = normalize_alias(alias);
        if let Some(alias) = alias {
            validate_alias(alias)?;
        }

        let request = ShortenRequest {
            url: url.trim().to_string(),
            custom_path: alias.map(str::to_string),
        };
        let response = self.api.shorten(&request).await?;
        let record = ShortUrlRecord::from_response(request, response);
        // The link already exists on the backend; a render failure must not hide it.
        let qr = match self.qr.execute(&record.short_url) {
            Ok(qr) => Some(qr),
            Err(err) => {
                warn!(error = %err, "failed to render qr for short url");
                None
            }
        };

        info!(short_url = %record.short_url, "url shortened");
        Ok(ShortenedUrl { record, qr })
    }
}

/// Looks up where a short path leads. Misses are logged, never errors.
pub struct ResolveShortUrl {
    api: Arc<dyn UrlApiPort>,
}

impl ResolveShortUrl {
    pub fn from_ports(api: Arc<dyn UrlApiPort>) -> Self {
        Self { api }
    }

    /// Accepts a bare path (`promo`) or a full short URL
    /// (`https://cc.app/promo`).
    pub fn short_path(input: &str) -> Option<&str> {
        let trimmed = input.trim().trim_end_matches('/');
        let path = trimmed.rsplit('/').next().unwrap_or(trimmed);
        (!path.is_empty() && path.chars().all(|c| c.is_ascii_alphanumeric())).then_some(path)
    }

    #[tracing::instrument(name = "usecase.resolve_short_url.execute", skip(self))]
    pub async fn execute(&self, input: &str) -> ShareResult<ResolveOutcome> {
        let Some(path) = Self::short_path(input) else {
            warn!("short path is not resolvable");
            return Ok(ResolveOutcome::NotFound);
        };
        self.api.resolve(path).await
    }
}
