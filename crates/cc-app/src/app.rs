//! Flow orchestration.
//!
//! [`App`] wires every use case to its own [`Flow`], turns failures into
//! inline state plus an error notification, and keeps the session share
//! list. Flows never share state with each other.

use std::path::Path;
use std::sync::Arc;

use cc_core::clipboard::{ClipboardReceiveResult, ClipboardSendRequest, ClipboardSendResult};
use cc_core::code_entry::CodeEntry;
use cc_core::error::{ShareError, ShareResult, ValidationError};
use cc_core::file::{FileShareRecord, FileUpload};
use cc_core::notification::Notification;
use cc_core::ports::{ClockPort, QrImage};
use cc_core::progress::ProgressReporter;
use cc_core::qr::DEFAULT_MODULE_PX;
use cc_core::url::ResolveOutcome;

use crate::deps::AppDeps;
use crate::flow::Flow;
use crate::notifications::NotificationCenter;
use crate::session::ShareSession;
use crate::usecases::*;

pub struct App {
    send_clipboard: SendClipboard,
    receive_clipboard: ReceiveClipboard,
    upload_file: UploadFile,
    lookup_file: LookupFile,
    download_file: DownloadFile,
    shorten_url: ShortenUrl,
    resolve_short_url: ResolveShortUrl,
    generate_qr: Arc<GenerateQr>,

    pub send_flow: Flow<ClipboardSendResult>,
    pub receive_flow: Flow<ClipboardReceiveResult>,
    pub upload_flow: Flow<FileShareRecord>,
    pub lookup_flow: Flow<FileShareRecord>,
    pub shorten_flow: Flow<ShortenedUrl>,

    notifications: NotificationCenter,
    session: ShareSession,
    clock: Arc<dyn ClockPort>,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        let generate_qr = Arc::new(GenerateQr::from_ports(deps.qr, DEFAULT_MODULE_PX));
        Self {
            send_clipboard: SendClipboard::from_ports(deps.clipboard_api.clone()),
            receive_clipboard: ReceiveClipboard::from_ports(deps.clipboard_api),
            upload_file: UploadFile::from_ports(deps.file_api.clone()),
            lookup_file: LookupFile::from_ports(deps.file_api.clone()),
            download_file: DownloadFile::from_ports(deps.file_api),
            shorten_url: ShortenUrl::from_ports(deps.url_api.clone(), generate_qr.clone()),
            resolve_short_url: ResolveShortUrl::from_ports(deps.url_api),
            generate_qr,

            send_flow: Flow::new("send_clipboard"),
            receive_flow: Flow::new("receive_clipboard"),
            upload_flow: Flow::new("upload_file"),
            lookup_flow: Flow::new("lookup_file"),
            shorten_flow: Flow::new("shorten_url"),

            notifications: NotificationCenter::new(deps.clock.clone()),
            session: ShareSession::new(),
            clock: deps.clock,
        }
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub async fn visible_notifications(&self) -> Vec<Notification> {
        self.notifications.visible().await
    }

    pub fn shares(&self) -> &ShareSession {
        &self.session
    }

    /// Posts an error notification for failures the user did not cause
    /// locally. Validation and busy errors only show inline.
    async fn report(&self, flow_mounted: bool, err: &ShareError) {
        if !flow_mounted || err.is_validation() || matches!(err, ShareError::Busy) {
            return;
        }
        self.notifications.error(err.user_message()).await;
    }

    pub async fn send_clipboard(
        &self,
        request: &ClipboardSendRequest,
    ) -> ShareResult<ClipboardSendResult> {
        let result = self
            .send_flow
            .run(self.send_clipboard.execute(request))
            .await;
        match &result {
            Ok(sent) if self.send_flow.is_mounted() => {
                self.notifications
                    .success(format!("Content shared! Your code is {}", sent.code))
                    .await;
            }
            Ok(_) => {}
            Err(err) => self.report(self.send_flow.is_mounted(), err).await,
        }
        result
    }

    /// Submits the code in `entry`. A failed lookup shakes the cells.
    pub async fn receive_clipboard(
        &self,
        entry: &mut CodeEntry,
        decryption_key: &str,
    ) -> ShareResult<ClipboardReceiveResult> {
        let code = entry.code();
        let result = self
            .receive_flow
            .run(async {
                let code = code.ok_or(ValidationError::IncompleteCode)?;
                self.receive_clipboard.execute(code, decryption_key).await
            })
            .await;

        if let Err(err) = &result {
            if matches!(err, ShareError::Remote { .. } | ShareError::Transport(_)) {
                entry.flag_error(self.clock.now_ms());
            }
            self.report(self.receive_flow.is_mounted(), err).await;
        }
        result
    }

    /// Uploads one file. Oversized files fail locally without a request;
    /// failures are surfaced inline and as a notification.
    pub async fn upload_file(
        &self,
        upload: &FileUpload,
        progress: ProgressReporter,
    ) -> ShareResult<FileShareRecord> {
        let reporter = progress.clone();
        let result = self
            .upload_flow
            .run(self.upload_file.execute(upload, progress))
            .await;
        if let Err(err) = &result {
            // No-op when the use case already closed the stream; covers Busy.
            reporter.fail(err.user_message());
        }
        let mounted = self.upload_flow.is_mounted();
        match &result {
            Ok(record) => {
                self.session.push(record.clone());
                if mounted {
                    self.notifications
                        .success(format!("{} uploaded", record.name))
                        .await;
                }
            }
            Err(err) if mounted && !matches!(err, ShareError::Busy) => {
                self.notifications.error(err.user_message()).await;
            }
            Err(_) => {}
        }
        result
    }

    pub async fn lookup_file(&self, entry: &mut CodeEntry) -> ShareResult<FileShareRecord> {
        let code = entry.code();
        let result = self
            .lookup_flow
            .run(async {
                let code = code.ok_or(ValidationError::IncompleteCode)?;
                self.lookup_file.execute(&code).await
            })
            .await;

        if let Err(err) = &result {
            if matches!(err, ShareError::Remote { .. } | ShareError::Transport(_)) {
                entry.flag_error(self.clock.now_ms());
            }
            self.report(self.lookup_flow.is_mounted(), err).await;
        }
        result
    }

    pub async fn download_file(&self, record: &FileShareRecord, dest: &Path) -> ShareResult<u64> {
        let result = self.download_file.execute(record, dest).await;
        if let Err(err) = &result {
            self.report(true, err).await;
        }
        result
    }

    /// Explicit delete from the session list. The backend copy expires on
    /// its own schedule.
    pub fn delete_share(&self, code: &str) -> Option<FileShareRecord> {
        self.session.remove(code)
    }

    pub async fn shorten_url(&self, url: &str, alias: Option<&str>) -> ShareResult<ShortenedUrl> {
        let result = self
            .shorten_flow
            .run(self.shorten_url.execute(url, alias))
            .await;
        if let Err(err) = &result {
            self.report(self.shorten_flow.is_mounted(), err).await;
        }
        result
    }

    pub async fn resolve_short_url(&self, input: &str) -> ShareResult<ResolveOutcome> {
        self.resolve_short_url.execute(input).await
    }

    pub fn generate_qr(&self, text: &str) -> ShareResult<QrImage> {
        self.generate_qr.execute(text)
    }

    pub fn export_qr_png(&self, image: &QrImage) -> anyhow::Result<Vec<u8>> {
        self.generate_qr.export_png(image)
    }

    /// Codes typed as a single argument must be exactly four digits; they
    /// are never truncated the way a paste into the boxes is.
    pub fn code_entry_from(raw: &str) -> ShareResult<CodeEntry> {
        Ok(CodeEntry::from_argument(raw)?)
    }
}
