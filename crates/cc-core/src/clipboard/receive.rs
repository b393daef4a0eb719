use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ShareCode;

/// Body of `POST /api/clipboard/receive`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipboardReceiveRequest {
    pub code: ShareCode,
    pub decryption_key: String,
}

impl ClipboardReceiveRequest {
    pub fn new(code: ShareCode, decryption_key: impl Into<String>) -> Self {
        Self {
            code,
            decryption_key: decryption_key.into(),
        }
    }
}

/// Displayed once, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClipboardReceiveResult {
    pub content: String,
    #[serde(default)]
    pub is_confidential: bool,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub expires_at: DateTime<Utc>,
}
