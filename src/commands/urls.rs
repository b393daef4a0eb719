use std::io::Write;
use std::path::Path;

use anyhow::Context;
use cc_core::url::ResolveOutcome;

use super::{user_error, CommandContext};

pub async fn shorten(
    ctx: &mut CommandContext,
    url: &str,
    alias: Option<&str>,
    qr_png: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let shortened = ctx
        .app
        .shorten_url(url, alias)
        .await
        .map_err(user_error)?;

    writeln!(out, "{}", shortened.record.short_url)?;

    if let Some(dest) = qr_png {
        let Some(qr) = &shortened.qr else {
            anyhow::bail!("The short link was created, but its QR code could not be rendered");
        };
        let png = ctx.app.export_qr_png(qr)?;
        tokio::fs::write(dest, png)
            .await
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        writeln!(out, "QR code saved to {}", dest.display())?;
    }
    ctx.content_shown(true);
    Ok(())
}

pub async fn resolve(
    ctx: &mut CommandContext,
    short_path: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match ctx
        .app
        .resolve_short_url(short_path)
        .await
        .map_err(user_error)?
    {
        ResolveOutcome::Redirect(target) => writeln!(out, "{target}")?,
        ResolveOutcome::NotFound => writeln!(out, "Short URL not found")?,
    }
    Ok(())
}
