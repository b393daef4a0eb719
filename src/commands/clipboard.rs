use std::io::Write;

use cc_app::App;
use cc_core::clipboard::ClipboardSendRequest;

use super::{format_remaining, user_error, CommandContext};

pub async fn send(
    ctx: &mut CommandContext,
    text: String,
    key: Option<String>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let request = match key {
        Some(key) => ClipboardSendRequest::confidential(text, key),
        None => ClipboardSendRequest::text(text),
    };

    let sent = ctx
        .app
        .send_clipboard(&request)
        .await
        .map_err(user_error)?;

    // The notification carries the sentence; stdout stays scriptable.
    writeln!(out, "{}", sent.code)?;
    Ok(())
}

pub async fn receive(
    ctx: &mut CommandContext,
    code: &str,
    key: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut entry = App::code_entry_from(code).map_err(user_error)?;
    let received = ctx
        .app
        .receive_clipboard(&mut entry, key)
        .await
        .map_err(user_error)?;

    writeln!(out, "{}", received.content)?;
    writeln!(
        out,
        "(expires in {})",
        format_remaining(received.expires_at, chrono::Utc::now())
    )?;
    ctx.content_shown(!received.content.is_empty());
    Ok(())
}
