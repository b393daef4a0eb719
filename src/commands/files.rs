use std::io::Write;
use std::path::Path;

use anyhow::Context;
use cc_app::App;
use cc_core::file::{format_size, FileShareRecord, FileUpload, PreviewKind};
use cc_core::progress::{ProgressReporter, UploadEvent};
use tokio::sync::mpsc::UnboundedReceiver;

use super::{format_remaining, user_error, CommandContext};

pub async fn upload(
    ctx: &mut CommandContext,
    path: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    anyhow::ensure!(metadata.is_file(), "{} is not a file", path.display());

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let upload = FileUpload::new(path.to_path_buf(), name, metadata.len());

    let (reporter, rx) = ProgressReporter::channel();
    let printer = tokio::spawn(print_progress(rx));
    let result = ctx.app.upload_file(&upload, reporter).await;
    if let Err(err) = printer.await {
        tracing::warn!(error = %err, "progress printer task failed");
    }

    let record = result.map_err(user_error)?;
    writeln!(out, "Share code: {}", record.code)?;
    writeln!(out, "Size: {}", format_size(record.size_bytes))?;
    writeln!(
        out,
        "Expires in {}",
        format_remaining(record.expires_at, chrono::Utc::now())
    )?;
    Ok(())
}

/// Renders progress on stderr until the terminal event.
async fn print_progress(mut rx: UnboundedReceiver<UploadEvent>) {
    while let Some(event) = rx.recv().await {
        match &event {
            UploadEvent::Progress(pct) => eprint!("\rUploading... {pct:>3}%"),
            UploadEvent::Completed => eprintln!("\rUploading... done"),
            UploadEvent::Failed(message) => eprintln!("\rUpload failed: {message}"),
        }
        if event.is_terminal() {
            break;
        }
    }
}

pub async fn file(
    ctx: &mut CommandContext,
    code: &str,
    download: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut entry = App::code_entry_from(code).map_err(user_error)?;
    let record = ctx
        .app
        .lookup_file(&mut entry)
        .await
        .map_err(user_error)?;

    write_record(&record, out)?;
    ctx.content_shown(true);

    if let Some(dest) = download {
        let written = ctx
            .app
            .download_file(&record, dest)
            .await
            .map_err(user_error)?;
        writeln!(
            out,
            "Saved {} to {}",
            format_size(written),
            dest.display()
        )?;
    }
    Ok(())
}

fn preview_label(kind: PreviewKind) -> &'static str {
    match kind {
        PreviewKind::Image => "image",
        PreviewKind::Text => "text",
        PreviewKind::Pdf => "pdf",
        PreviewKind::Other => "none",
    }
}

fn write_record(record: &FileShareRecord, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Name:     {}", record.name)?;
    writeln!(out, "Size:     {}", format_size(record.size_bytes))?;
    writeln!(out, "Type:     {}", record.content_type)?;
    writeln!(out, "Preview:  {}", preview_label(record.preview_kind()))?;
    writeln!(
        out,
        "Expires:  in {}",
        format_remaining(record.expires_at, chrono::Utc::now())
    )
}
