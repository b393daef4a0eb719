//! End-to-end flow tests against an in-memory backend.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cc_app::{App, AppDeps, FlowState};
use cc_core::clipboard::{
    ClipboardReceiveRequest, ClipboardReceiveResult, ClipboardSendRequest, ClipboardSendResult,
};
use cc_core::error::{ShareError, ShareResult, ValidationError};
use cc_core::file::{FileShareRecord, FileUpload, MAX_UPLOAD_BYTES};
use cc_core::ids::ShareCode;
use cc_core::notification::NotificationKind;
use cc_core::ports::{ClipboardApiPort, ClockPort, FileApiPort, UrlApiPort};
use cc_core::progress::{ProgressReporter, UploadEvent};
use cc_core::url::{ResolveOutcome, ShortenRequest, ShortenResponse};
use cc_core::CodeEntry;
use cc_infra::QrCodeRenderer;
use chrono::Utc;

/// Stores sent content under sequential codes and echoes it back.
#[derive(Default)]
struct EchoBackend {
    clipboard: Mutex<HashMap<String, String>>,
    links: Mutex<HashMap<String, String>>,
    sends: AtomicUsize,
    receives: AtomicUsize,
    uploads: AtomicUsize,
    shortens: AtomicUsize,
}

impl EchoBackend {
    fn next_code(&self) -> String {
        format!("{:04}", 4821 + self.sends.load(Ordering::SeqCst) - 1)
    }
}

#[async_trait]
impl ClipboardApiPort for EchoBackend {
    async fn send(&self, request: &ClipboardSendRequest) -> ShareResult<ClipboardSendResult> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        let code = self.next_code();
        self.clipboard
            .lock()
            .unwrap()
            .insert(code.clone(), request.content.clone());
        Ok(ClipboardSendResult {
            code: ShareCode::parse(&code).unwrap(),
        })
    }

    async fn receive(
        &self,
        request: &ClipboardReceiveRequest,
    ) -> ShareResult<ClipboardReceiveResult> {
        self.receives.fetch_add(1, Ordering::SeqCst);
        match self.clipboard.lock().unwrap().get(request.code.as_str()) {
            Some(content) => Ok(ClipboardReceiveResult {
                content: content.clone(),
                is_confidential: false,
                expires_at: Utc::now(),
            }),
            None => Err(ShareError::remote(404, Some("Not found".to_string()))),
        }
    }
}

#[async_trait]
impl FileApiPort for EchoBackend {
    async fn upload(
        &self,
        file: &FileUpload,
        progress: ProgressReporter,
    ) -> ShareResult<FileShareRecord> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        progress.bytes_sent(file.size_bytes / 2, file.size_bytes);
        progress.bytes_sent(file.size_bytes, file.size_bytes);
        Ok(FileShareRecord {
            code: ShareCode::parse("5150").unwrap(),
            name: file.name.clone(),
            size_bytes: file.size_bytes,
            download_url: "/api/files/download/5150".to_string(),
            expires_at: Utc::now(),
            content_type: "text/plain".to_string(),
        })
    }

    async fn lookup(&self, code: &ShareCode) -> ShareResult<FileShareRecord> {
        Err(ShareError::remote(
            404,
            Some(format!("File {} not found", code)),
        ))
    }

    async fn download(&self, _record: &FileShareRecord, _dest: &Path) -> ShareResult<u64> {
        Err(ShareError::transport("offline"))
    }
}

#[async_trait]
impl UrlApiPort for EchoBackend {
    async fn shorten(&self, request: &ShortenRequest) -> ShareResult<ShortenResponse> {
        self.shortens.fetch_add(1, Ordering::SeqCst);
        let path = request.custom_path.clone().unwrap_or_else(|| "x1y2".to_string());
        self.links
            .lock()
            .unwrap()
            .insert(path.clone(), request.url.clone());
        Ok(ShortenResponse {
            short_url: format!("https://cc.app/{path}"),
        })
    }

    async fn resolve(&self, short_path: &str) -> ShareResult<ResolveOutcome> {
        Ok(match self.links.lock().unwrap().get(short_path) {
            Some(url) => ResolveOutcome::Redirect(url.clone()),
            None => ResolveOutcome::NotFound,
        })
    }
}

struct FixedClock(i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

fn app_with(backend: Arc<EchoBackend>) -> App {
    App::new(AppDeps {
        clipboard_api: backend.clone(),
        file_api: backend.clone(),
        url_api: backend,
        qr: Arc::new(QrCodeRenderer::new()),
        clock: Arc::new(FixedClock(10_000)),
    })
}

fn drain(rx: &mut tokio::sync::mpsc::UnboundedReceiver<UploadEvent>) -> Vec<UploadEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn send_then_receive_surfaces_same_content() {
    let backend = Arc::new(EchoBackend::default());
    let app = app_with(backend.clone());

    let sent = app
        .send_clipboard(&ClipboardSendRequest::text("hello"))
        .await
        .unwrap();
    assert_eq!(sent.code.as_str(), "4821");

    let mut entry = App::code_entry_from(sent.code.as_str()).unwrap();
    let received = app.receive_clipboard(&mut entry, "").await.unwrap();

    assert_eq!(received.content, "hello");
    assert!(matches!(
        app.receive_flow.state(),
        FlowState::Succeeded(ref r) if r.content == "hello"
    ));
    let notes = app.visible_notifications().await;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Success);
}

#[tokio::test]
async fn failed_receive_shows_detail_and_shakes_cells() {
    let backend = Arc::new(EchoBackend::default());
    let app = app_with(backend);

    let mut entry = CodeEntry::new();
    entry.paste("0000");
    let err = app.receive_clipboard(&mut entry, "").await.unwrap_err();

    assert_eq!(err.user_message(), "Not found");
    assert_eq!(
        app.receive_flow.state(),
        FlowState::Failed("Not found".to_string())
    );
    assert!(entry.is_shaking(10_000));
    assert!(!entry.is_shaking(10_500));

    let notes = app.visible_notifications().await;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Error);
    assert_eq!(notes[0].message, "Not found");
}

#[tokio::test]
async fn incomplete_code_never_reaches_backend() {
    let backend = Arc::new(EchoBackend::default());
    let app = app_with(backend.clone());

    let mut entry = CodeEntry::new();
    entry.paste("12");
    let err = app.receive_clipboard(&mut entry, "").await.unwrap_err();

    assert_eq!(err, ShareError::Validation(ValidationError::IncompleteCode));
    assert_eq!(backend.receives.load(Ordering::SeqCst), 0);
    assert!(!entry.is_shaking(10_000));
    assert!(app.visible_notifications().await.is_empty());
}

#[tokio::test]
async fn confidential_send_without_key_is_blocked_locally() {
    let backend = Arc::new(EchoBackend::default());
    let app = app_with(backend.clone());

    let err = app
        .send_clipboard(&ClipboardSendRequest::confidential("secret", ""))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ShareError::Validation(ValidationError::MissingEncryptionKey)
    );
    assert_eq!(backend.sends.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn oversized_upload_fails_without_request() {
    let backend = Arc::new(EchoBackend::default());
    let app = app_with(backend.clone());

    let upload = FileUpload::new(PathBuf::from("/tmp/big.iso"), "big.iso", MAX_UPLOAD_BYTES + 1);
    let (reporter, mut rx) = ProgressReporter::channel();
    let err = app.upload_file(&upload, reporter).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(backend.uploads.load(Ordering::SeqCst), 0);
    assert_eq!(
        app.upload_flow.state(),
        FlowState::Failed("File is too large. Maximum size is 100MB".to_string())
    );
    assert_eq!(
        drain(&mut rx),
        vec![UploadEvent::Failed(
            "File is too large. Maximum size is 100MB".to_string()
        )]
    );
    assert!(app.shares().is_empty());

    let notes = app.visible_notifications().await;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Error);
}

#[tokio::test]
async fn upload_appends_to_session_and_completes_once() {
    let backend = Arc::new(EchoBackend::default());
    let app = app_with(backend);

    let upload = FileUpload::new(PathBuf::from("/tmp/notes.txt"), "notes.txt", 1_000);
    let (reporter, mut rx) = ProgressReporter::channel();
    let record = app.upload_file(&upload, reporter).await.unwrap();

    assert_eq!(record.code, "5150");
    assert_eq!(
        drain(&mut rx),
        vec![
            UploadEvent::Progress(50),
            UploadEvent::Progress(100),
            UploadEvent::Completed
        ]
    );
    assert_eq!(app.shares().list(), vec![record.clone()]);

    assert_eq!(app.delete_share("5150"), Some(record));
    assert!(app.shares().is_empty());
}

#[tokio::test]
async fn lookup_miss_shakes_code_entry() {
    let backend = Arc::new(EchoBackend::default());
    let app = app_with(backend);

    let mut entry = App::code_entry_from("9876").unwrap();
    let err = app.lookup_file(&mut entry).await.unwrap_err();

    assert_eq!(err.user_message(), "File 9876 not found");
    assert!(entry.is_shaking(10_000));
}

#[tokio::test]
async fn alias_rules_block_submission() {
    let backend = Arc::new(EchoBackend::default());
    let app = app_with(backend.clone());

    for (alias, expected) in [
        ("ab", ValidationError::AliasTooShort { min: 3 }),
        ("ab!", ValidationError::AliasCharset),
    ] {
        let err = app
            .shorten_url("https://example.com", Some(alias))
            .await
            .unwrap_err();
        assert_eq!(err, ShareError::Validation(expected));
    }
    let err = app.shorten_url("not a url", None).await.unwrap_err();
    assert_eq!(err, ShareError::Validation(ValidationError::InvalidUrl));

    assert_eq!(backend.shortens.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn shorten_renders_qr_and_resolves_back() {
    let backend = Arc::new(EchoBackend::default());
    let app = app_with(backend);

    let shortened = app
        .shorten_url("https://example.com/landing", Some("abc"))
        .await
        .unwrap();
    assert_eq!(shortened.record.short_url, "https://cc.app/abc");
    assert_eq!(shortened.record.custom_path.as_deref(), Some("abc"));
    let qr = shortened.qr.expect("short url renders as qr");
    assert_eq!(qr, app.generate_qr("https://cc.app/abc").unwrap());

    let png = app.export_qr_png(&qr).unwrap();
    assert_eq!(&png[1..4], b"PNG");

    assert_eq!(
        app.resolve_short_url("https://cc.app/abc").await.unwrap(),
        ResolveOutcome::Redirect("https://example.com/landing".to_string())
    );
    assert_eq!(
        app.resolve_short_url("missing").await.unwrap(),
        ResolveOutcome::NotFound
    );
}

#[tokio::test]
async fn qr_rendering_is_idempotent() {
    let app = app_with(Arc::new(EchoBackend::default()));
    let first = app.generate_qr("same input").unwrap();
    let second = app.generate_qr("same input").unwrap();
    assert_eq!(first.svg, second.svg);
}

#[tokio::test]
async fn download_failure_is_reported_as_generic_error() {
    let app = app_with(Arc::new(EchoBackend::default()));
    let record = FileShareRecord {
        code: ShareCode::parse("5150").unwrap(),
        name: "notes.txt".to_string(),
        size_bytes: 1,
        download_url: "/api/files/download/5150".to_string(),
        expires_at: Utc::now(),
        content_type: "text/plain".to_string(),
    };

    let dir = tempfile::tempdir().unwrap();
    let err = app
        .download_file(&record, &dir.path().join("notes.txt"))
        .await
        .unwrap_err();

    assert!(matches!(err, ShareError::Transport(_)));
    let notes = app.visible_notifications().await;
    assert_eq!(notes[0].message, cc_core::GENERIC_ERROR_MESSAGE);
}

#[test]
fn overlong_code_argument_is_rejected_not_truncated() {
    assert_eq!(
        App::code_entry_from("12345").unwrap_err(),
        ShareError::Validation(ValidationError::MalformedCode)
    );
}
