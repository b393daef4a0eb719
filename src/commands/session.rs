use std::io::Write;

use cc_core::file::format_size;

use super::{format_remaining, CommandContext};

/// Files uploaded since this session started, oldest first.
pub fn list_shares(ctx: &CommandContext, out: &mut impl Write) -> std::io::Result<()> {
    let shares = ctx.app.shares().list();
    if shares.is_empty() {
        return writeln!(out, "No files shared in this session");
    }
    let now = chrono::Utc::now();
    for record in shares {
        writeln!(
            out,
            "{}  {}  {}  expires in {}",
            record.code,
            record.name,
            format_size(record.size_bytes),
            format_remaining(record.expires_at, now)
        )?;
    }
    Ok(())
}

/// Drops a share from the session list. The backend copy expires on its own.
pub fn delete_share(
    ctx: &CommandContext,
    code: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match ctx.app.delete_share(code) {
        Some(record) => {
            writeln!(out, "Deleted share {} ({})", record.code, record.name)?;
            Ok(())
        }
        None => anyhow::bail!("No share with code {code} in this session"),
    }
}
