use std::time::Duration;

use anyhow::Context;
use reqwest::{redirect, Client};

/// HTTP implementation of the clipboard, file and URL ports.
#[derive(Debug, Clone)]
pub struct HttpShareApi {
    pub(super) client: Client,
    /// Same settings, but never follows redirects. Used for short path lookups.
    pub(super) lookup_client: Client,
    base_url: String,
}

impl HttpShareApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        anyhow::ensure!(!base_url.is_empty(), "API base URL is empty");

        let mut builder = Client::builder();
        let mut lookup_builder = Client::builder().redirect(redirect::Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
            lookup_builder = lookup_builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().context("Failed to build HTTP client")?,
            lookup_client: lookup_builder
                .build()
                .context("Failed to build lookup HTTP client")?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path` must start with `/`.
    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute URLs pass through; server-relative ones get the base prepended.
    pub(super) fn absolutize(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            self.endpoint(url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpShareApi::new("https://api.cloudclip.app/", None).unwrap();
        assert_eq!(
            api.endpoint("/api/clipboard/send"),
            "https://api.cloudclip.app/api/clipboard/send"
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(HttpShareApi::new("  ", None).is_err());
    }

    #[test]
    fn download_urls_are_made_absolute() {
        let api = HttpShareApi::new("http://localhost:8000", None).unwrap();
        assert_eq!(
            api.absolutize("/api/files/download/1234"),
            "http://localhost:8000/api/files/download/1234"
        );
        assert_eq!(
            api.absolutize("https://cdn.example/f"),
            "https://cdn.example/f"
        );
        assert_eq!(
            api.absolutize("api/files/download/1"),
            "http://localhost:8000/api/files/download/1"
        );
    }
}
