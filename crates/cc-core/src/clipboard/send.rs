use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ids::ShareCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
}

/// Body of `POST /api/clipboard/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipboardSendRequest {
    pub content: String,
    pub is_confidential: bool,
    /// Empty unless `is_confidential` is set.
    pub encryption_key: String,
    pub content_type: ContentType,
}

impl ClipboardSendRequest {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_confidential: false,
            encryption_key: String::new(),
            content_type: ContentType::Text,
        }
    }

    pub fn confidential(content: impl Into<String>, encryption_key: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_confidential: true,
            encryption_key: encryption_key.into(),
            content_type: ContentType::Text,
        }
    }

    /// Whether the submit control would be enabled for this form state.
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        if self.is_confidential && self.encryption_key.is_empty() {
            return Err(ValidationError::MissingEncryptionKey);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClipboardSendResult {
    pub code: ShareCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_cannot_be_submitted() {
        let req = ClipboardSendRequest::text("");
        assert_eq!(req.validate(), Err(ValidationError::EmptyContent));
        assert!(!req.can_submit());
    }

    #[test]
    fn confidential_requires_key() {
        let req = ClipboardSendRequest::confidential("secret", "");
        assert_eq!(req.validate(), Err(ValidationError::MissingEncryptionKey));

        let req = ClipboardSendRequest::confidential("secret", "k3y");
        assert!(req.can_submit());
    }

    #[test]
    fn serializes_wire_shape() {
        let body = serde_json::to_value(ClipboardSendRequest::text("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "content": "hello",
                "is_confidential": false,
                "encryption_key": "",
                "content_type": "text"
            })
        );
    }
}
