use serde::{Deserialize, Serialize};

/// Body of `POST /api/urls/shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlRecord {
    pub original_url: String,
    pub custom_path: Option<String>,
    pub short_url: String,
}

impl ShortUrlRecord {
    pub fn from_response(request: ShortenRequest, response: ShortenResponse) -> Self {
        Self {
            original_url: request.url,
            custom_path: request.custom_path,
            short_url: response.short_url,
        }
    }
}

/// Result of looking up a short path. Lookup failures are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Redirect(String),
    NotFound,
}
