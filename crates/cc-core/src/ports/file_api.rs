use std::path::Path;

use async_trait::async_trait;

use crate::error::ShareResult;
use crate::file::{FileShareRecord, FileUpload};
use crate::ids::ShareCode;
use crate::progress::ProgressReporter;

#[async_trait]
pub trait FileApiPort: Send + Sync {
    /// Uploads one file. Implementations report transferred bytes through
    /// `progress` but never emit the terminal event; the caller does.
    async fn upload(
        &self,
        file: &FileUpload,
        progress: ProgressReporter,
    ) -> ShareResult<FileShareRecord>;

    async fn lookup(&self, code: &ShareCode) -> ShareResult<FileShareRecord>;

    /// Streams the file behind `record.download_url` into `dest`.
    /// Returns the number of bytes written.
    async fn download(&self, record: &FileShareRecord, dest: &Path) -> ShareResult<u64>;
}
