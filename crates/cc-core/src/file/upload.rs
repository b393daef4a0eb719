use std::path::PathBuf;

use crate::error::ValidationError;
use crate::file::{check_upload_size, content_type_for};

/// A file the user picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

impl FileUpload {
    pub fn new(path: PathBuf, name: impl Into<String>, size_bytes: u64) -> Self {
        let name = name.into();
        Self {
            path,
            content_type: content_type_for(&name).to_string(),
            name,
            size_bytes,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_upload_size(self.size_bytes)
    }
}
