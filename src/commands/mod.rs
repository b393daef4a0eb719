//! Command handlers. Each one drives a single flow and writes its result to
//! `out`; notifications go to `notices`, progress and logs to stderr.

mod clipboard;
mod files;
mod qr;
mod session;
mod shell;
mod urls;

use std::collections::HashSet;
use std::io::Write;

use cc_app::App;
use cc_core::config::AppConfig;
use cc_core::error::ShareError;
use cc_core::gating::AdSlotLatch;
use cc_core::ids::NotificationId;
use cc_core::notification::NotificationKind;
use chrono::{DateTime, Utc};

use crate::cli::Commands;

pub use clipboard::{receive, send};
pub use files::{file, upload};
pub use qr::qr;
pub use session::{delete_share, list_shares};
pub use shell::{shell, split_words, ShellCommand, ShellLine};
pub use urls::{resolve, shorten};

/// The failure was already shown as an error notification.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct AlreadyReported(pub String);

/// Everything a command needs: the wired app plus the loaded config.
pub struct CommandContext {
    pub app: App,
    pub config: AppConfig,
    ad_slot: AdSlotLatch,
    /// Notifications already printed, so each one is shown once.
    printed: HashSet<NotificationId>,
}

impl CommandContext {
    pub fn new(app: App, config: AppConfig) -> Self {
        Self {
            app,
            config,
            ad_slot: AdSlotLatch::new(),
            printed: HashSet::new(),
        }
    }

    /// Prints notifications not shown yet. Returns the error messages printed.
    pub async fn flush_notifications(
        &mut self,
        notices: &mut impl Write,
    ) -> std::io::Result<Vec<String>> {
        let visible = self.app.visible_notifications().await;
        self.printed.retain(|id| visible.iter().any(|n| n.id == *id));

        let mut errors = Vec::new();
        for notification in visible {
            if !self.printed.insert(notification.id) {
                continue;
            }
            match notification.kind {
                NotificationKind::Success => writeln!(notices, "[ok] {}", notification.message)?,
                NotificationKind::Error => {
                    writeln!(notices, "[error] {}", notification.message)?;
                    errors.push(notification.message);
                }
            }
        }
        Ok(errors)
    }

    /// Called once a result is on screen.
    fn content_shown(&mut self, has_content: bool) {
        if self.ad_slot.try_fire(has_content, self.config.production) {
            tracing::debug!("ad slot initialized");
        }
    }
}

pub async fn dispatch(
    ctx: &mut CommandContext,
    command: Commands,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Shell => anyhow::bail!("Already in an interactive session"),
        Commands::Send { text, key } => send(ctx, text, key, out).await,
        Commands::Receive { code, key } => receive(ctx, &code, &key, out).await,
        Commands::Upload { path } => upload(ctx, &path, out).await,
        Commands::File { code, download } => file(ctx, &code, download.as_deref(), out).await,
        Commands::Shorten { url, alias, qr } => {
            shorten(ctx, &url, alias.as_deref(), qr.as_deref(), out).await
        }
        Commands::Resolve { short_path } => resolve(ctx, &short_path, out).await,
        Commands::Qr { text, svg, png } => qr(ctx, &text, svg.as_deref(), png.as_deref(), out),
    }
}

/// Runs one command, then prints the notifications it posted. An error that
/// a notification already showed comes back as [`AlreadyReported`].
pub async fn run_command(
    ctx: &mut CommandContext,
    command: Commands,
    out: &mut impl Write,
    notices: &mut impl Write,
) -> anyhow::Result<()> {
    let result = dispatch(ctx, command, out).await;
    let reported = ctx.flush_notifications(notices).await?;
    match result {
        Err(err) if reported.iter().any(|m| *m == err.to_string()) => {
            Err(AlreadyReported(err.to_string()).into())
        }
        other => other,
    }
}

/// Converts a flow error into the message the user sees.
pub(crate) fn user_error(err: ShareError) -> anyhow::Error {
    tracing::debug!(error = %err, "command failed");
    anyhow::anyhow!(err.user_message())
}

/// Informational countdown, e.g. `14m 32s`. The backend owns expiry.
pub(crate) fn format_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (expires_at - now).num_seconds();
    if secs <= 0 {
        return "expired".to_string();
    }
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}h {m}m")
    } else if m > 0 {
        format!("{m}m {s}s")
    } else {
        format!("{s}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn remaining_time_is_human_readable() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_remaining(now + Duration::seconds(872), now), "14m 32s");
        assert_eq!(format_remaining(now + Duration::seconds(45), now), "45s");
        assert_eq!(format_remaining(now + Duration::hours(25), now), "25h 0m");
        assert_eq!(format_remaining(now - Duration::seconds(1), now), "expired");
    }

    #[test]
    fn user_error_uses_remote_detail() {
        let err = user_error(ShareError::remote(404, Some("Not found".to_string())));
        assert_eq!(err.to_string(), "Not found");
    }
}
