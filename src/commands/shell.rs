//! Line-oriented session: one `App` serves every command typed, so uploads
//! stay listed until the shell exits.

use std::io::Write;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::cli::Commands;

use super::{delete_share, list_shares, run_command, AlreadyReported, CommandContext};

const PROMPT: &str = "cloudclip> ";

#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    #[command(flatten)]
    Run(Commands),
    /// List files uploaded in this session
    Shares,
    /// Remove a file from the session list
    Delete { code: String },
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Splits a line into words. Single or double quotes group spaces.
pub fn split_words(line: &str) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    anyhow::ensure!(quote.is_none(), "Unterminated quote");
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Reads commands from `input` until `exit` or end of input.
pub async fn shell<R>(
    ctx: &mut CommandContext,
    input: R,
    out: &mut impl Write,
    notices: &mut impl Write,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        write!(notices, "{PROMPT}")?;
        notices.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let words = match split_words(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(err) => {
                writeln!(notices, "Error: {err}")?;
                continue;
            }
        };
        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                write!(notices, "{}", err.render())?;
                continue;
            }
        };

        let result = match parsed.command {
            ShellCommand::Exit => break,
            ShellCommand::Shares => list_shares(ctx, out).map_err(anyhow::Error::from),
            ShellCommand::Delete { code } => delete_share(ctx, &code, out),
            ShellCommand::Run(command) => run_command(ctx, command, out, notices).await,
        };
        out.flush()?;
        if let Err(err) = result {
            if !err.is::<AlreadyReported>() {
                writeln!(notices, "Error: {err:#}")?;
            }
        }
    }
    tracing::debug!(shares = ctx.app.shares().len(), "shell closed");
    Ok(())
}
