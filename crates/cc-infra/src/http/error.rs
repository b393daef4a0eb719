//! Maps HTTP failures onto [`ShareError`].

use cc_core::error::{ShareError, ShareResult};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Extracts `detail` when it is a string. Structured details (e.g. lists of
/// field errors) are not user facing and fall back to the generic message.
pub(super) fn extract_detail(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| d.as_str().map(str::to_string))
}

pub(super) async fn ensure_success(response: Response) -> ShareResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    let detail = extract_detail(&body);
    tracing::warn!(status = status.as_u16(), detail = ?detail, "api returned error status");
    Err(ShareError::remote(status.as_u16(), detail))
}

pub(super) async fn read_json<T: DeserializeOwned>(response: Response) -> ShareResult<T> {
    let response = ensure_success(response).await?;
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(error = %e, "failed to decode api response");
        ShareError::transport(e)
    })
}

pub(super) fn transport(err: reqwest::Error) -> ShareError {
    tracing::warn!(error = %err, "request failed before a response arrived");
    ShareError::transport(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_extracted() {
        assert_eq!(
            extract_detail(br#"{"detail":"Not found"}"#),
            Some("Not found".to_string())
        );
    }

    #[test]
    fn non_string_or_missing_detail_is_none() {
        assert_eq!(extract_detail(br#"{"detail":[{"loc":["body"]}]}"#), None);
        assert_eq!(extract_detail(br#"{"error":"x"}"#), None);
        assert_eq!(extract_detail(b"<html>502</html>"), None);
        assert_eq!(extract_detail(b""), None);
    }
}
