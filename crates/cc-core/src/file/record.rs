use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::ids::ShareCode;

fn default_content_type() -> String {
    "application/octet-stream".to_string()
}

/// Metadata the backend returns for an uploaded or looked-up file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileShareRecord {
    /// Accepts the same string or numeric forms as the clipboard endpoints.
    #[serde(rename = "share_code")]
    pub code: ShareCode,
    #[serde(rename = "file_name")]
    pub name: String,
    #[serde(rename = "file_size")]
    pub size_bytes: u64,
    pub download_url: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub expires_at: DateTime<Utc>,
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

impl FileShareRecord {
    pub fn preview_kind(&self) -> PreviewKind {
        PreviewKind::from_content_type(&self.content_type)
    }
}

/// How a fetched file can be previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Text,
    Pdf,
    Other,
}

impl PreviewKind {
    pub fn from_content_type(content_type: &str) -> Self {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "application/pdf" => PreviewKind::Pdf,
            "application/json" | "application/xml" => PreviewKind::Text,
            s if s.starts_with("image/") => PreviewKind::Image,
            s if s.starts_with("text/") => PreviewKind::Text,
            _ => PreviewKind::Other,
        }
    }
}
