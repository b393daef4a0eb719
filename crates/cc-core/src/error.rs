//! Error taxonomy shared by every flow.
//!
//! Validation errors never reach the network. Remote errors carry the
//! backend's `detail` string verbatim. Transport errors are shown to the
//! user as [`GENERIC_ERROR_MESSAGE`].

use thiserror::Error;

/// Message shown when the backend gave no usable `detail`.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some content to share")]
    EmptyContent,

    #[error("An encryption key is required for confidential content")]
    MissingEncryptionKey,

    #[error("Please enter the complete 4-digit code")]
    IncompleteCode,

    #[error("A share code is exactly 4 digits")]
    MalformedCode,

    #[error("File is too large. Maximum size is {max_mb}MB")]
    FileTooLarge { size_bytes: u64, max_mb: u64 },

    #[error("Please enter a valid URL")]
    InvalidUrl,

    #[error("Custom path can only contain letters and numbers")]
    AliasCharset,

    #[error("Custom path must be at least {min} characters long")]
    AliasTooShort { min: usize },

    #[error("Nothing to encode")]
    EmptyQrInput,

    #[error("Text is too long to fit in a QR code")]
    QrCapacityExceeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("remote error ({status}): {detail:?}")]
    Remote { status: u16, detail: Option<String> },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("a request is already in progress")]
    Busy,
}

impl ShareError {
    pub fn remote(status: u16, detail: Option<String>) -> Self {
        Self::Remote { status, detail }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// The string a user sees for this error.
    pub fn user_message(&self) -> String {
        match self {
            ShareError::Validation(err) => err.to_string(),
            ShareError::Remote {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            ShareError::Remote { .. } | ShareError::Transport(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            ShareError::Busy => "Please wait for the current request to finish".to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ShareError::Validation(_))
    }
}

pub type ShareResult<T> = Result<T, ShareError>;
