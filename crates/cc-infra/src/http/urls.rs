use async_trait::async_trait;
use cc_core::error::ShareResult;
use cc_core::ports::UrlApiPort;
use cc_core::url::{ResolveOutcome, ShortenRequest, ShortenResponse};
use reqwest::header::LOCATION;
use serde::Deserialize;

use super::error::{read_json, transport};
use super::HttpShareApi;

/// Some deployments answer lookups with JSON instead of a redirect.
#[derive(Deserialize)]
struct LookupBody {
    original_url: Option<String>,
}

#[async_trait]
impl UrlApiPort for HttpShareApi {
    async fn shorten(&self, request: &ShortenRequest) -> ShareResult<ShortenResponse> {
        let response = self
            .client
            .post(self.endpoint("/api/urls/shorten"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn resolve(&self, short_path: &str) -> ShareResult<ResolveOutcome> {
        let response = self
            .lookup_client
            .get(self.endpoint(&format!("/api/urls/{}", short_path)))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_redirection() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            if let Some(location) = location {
                return Ok(ResolveOutcome::Redirect(location));
            }
        } else if status.is_success() {
            if let Ok(LookupBody {
                original_url: Some(url),
            }) = response.json::<LookupBody>().await
            {
                return Ok(ResolveOutcome::Redirect(url));
            }
        }

        tracing::warn!(short_path, status = status.as_u16(), "short url lookup missed");
        Ok(ResolveOutcome::NotFound)
    }
}
