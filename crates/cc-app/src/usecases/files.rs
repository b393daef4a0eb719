use std::path::Path;
use std::sync::Arc;

use cc_core::error::ShareResult;
use cc_core::file::{FileShareRecord, FileUpload};
use cc_core::ids::ShareCode;
use cc_core::ports::FileApiPort;
use cc_core::progress::ProgressReporter;
use tracing::{info, warn};

/// Uploads one file after the local size check.
///
/// Owns the terminal progress event: exactly one of `Completed` or
/// `Failed` is emitted, including when the size check rejects the file.
pub struct UploadFile {
    api: Arc<dyn FileApiPort>,
}

impl UploadFile {
    pub fn from_ports(api: Arc<dyn FileApiPort>) -> Self {
        Self { api }
    }

    #[tracing::instrument(
        name = "usecase.upload_file.execute",
        skip_all,
        fields(file = %upload.name, size = upload.size_bytes)
    )]
    pub async fn execute(
        &self,
        upload: &FileUpload,
        progress: ProgressReporter,
    ) -> ShareResult<FileShareRecord> {
        if let Err(err) = upload.validate() {
            warn!(error = %err, "upload rejected locally");
            progress.fail(err.to_string());
            return Err(err.into());
        }

        match self.api.upload(upload, progress.clone()).await {
            Ok(record) => {
                progress.complete();
                info!(code = %record.code, "file uploaded");
                Ok(record)
            }
            Err(err) => {
                progress.fail(err.user_message());
                Err(err)
            }
        }
    }
}

/// Fetches a shared file's metadata by code.
pub struct LookupFile {
    api: Arc<dyn FileApiPort>,
}

impl LookupFile {
    pub fn from_ports(api: Arc<dyn FileApiPort>) -> Self {
        Self { api }
    }

    #[tracing::instrument(name = "usecase.lookup_file.execute", skip_all, fields(code = %code))]
    pub async fn execute(&self, code: &ShareCode) -> ShareResult<FileShareRecord> {
        self.api.lookup(code).await
    }
}

pub struct DownloadFile {
    api: Arc<dyn FileApiPort>,
}

impl DownloadFile {
    pub fn from_ports(api: Arc<dyn FileApiPort>) -> Self {
        Self { api }
    }

    #[tracing::instrument(name = "usecase.download_file.execute", skip_all, fields(code = %record.code))]
    pub async fn execute(&self, record: &FileShareRecord, dest: &Path) -> ShareResult<u64> {
        self.api.download(record, dest).await
    }
}
