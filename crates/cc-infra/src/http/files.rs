use std::path::Path;

use async_trait::async_trait;
use cc_core::error::{ShareError, ShareResult};
use cc_core::file::{FileShareRecord, FileUpload};
use cc_core::ids::ShareCode;
use cc_core::ports::FileApiPort;
use cc_core::progress::ProgressReporter;
use futures::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;

use super::error::{ensure_success, read_json, transport};
use super::HttpShareApi;

#[async_trait]
impl FileApiPort for HttpShareApi {
    #[tracing::instrument(name = "http.files.upload", skip_all, fields(file = %file.name, size = file.size_bytes))]
    async fn upload(
        &self,
        file: &FileUpload,
        progress: ProgressReporter,
    ) -> ShareResult<FileShareRecord> {
        let handle = tokio::fs::File::open(&file.path)
            .await
            .map_err(ShareError::transport)?;

        let total = file.size_bytes;
        let mut sent = 0u64;
        // Counts bytes as the transport pulls them from disk.
        let stream = ReaderStream::new(handle).map(move |chunk| {
            if let Ok(bytes) = &chunk {
                sent += bytes.len() as u64;
                progress.bytes_sent(sent, total);
            }
            chunk
        });

        let part = Part::stream_with_length(Body::wrap_stream(stream), total)
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(transport)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("/api/files/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn lookup(&self, code: &ShareCode) -> ShareResult<FileShareRecord> {
        let response = self
            .client
            .get(self.endpoint(&format!("/api/files/files/{}", code)))
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    #[tracing::instrument(name = "http.files.download", skip_all, fields(code = %record.code))]
    async fn download(&self, record: &FileShareRecord, dest: &Path) -> ShareResult<u64> {
        let response = self
            .client
            .get(self.absolutize(&record.download_url))
            .send()
            .await
            .map_err(transport)?;
        let response = ensure_success(response).await?;

        // Stream into a sibling temp file; `dest` only appears once the body is complete.
        // Dropping `part_path` on any early return deletes the partial file.
        let dir = dest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let (file, part_path) = tempfile::Builder::new()
            .prefix(".cloudclip-")
            .suffix(".part")
            .tempfile_in(dir)
            .map_err(ShareError::transport)?
            .into_parts();
        let mut out = tokio::fs::File::from_std(file);

        let mut written = 0u64;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(transport)?;
            out.write_all(&chunk).await.map_err(ShareError::transport)?;
            written += chunk.len() as u64;
        }
        out.flush().await.map_err(ShareError::transport)?;
        drop(out);
        part_path.persist(dest).map_err(ShareError::transport)?;

        tracing::info!(bytes = written, dest = %dest.display(), "file downloaded");
        Ok(written)
    }
}
