//! CloudClip command-line client.
//!
//! The binary is a thin shell over [`run`]: load config, wire the app,
//! then run one command or an interactive session.

pub mod bootstrap;
pub mod cli;
pub mod commands;

use std::io::Write;

use cli::{Cli, Commands};
use commands::CommandContext;

/// Results go to `out`, notifications and prompts to `notices`.
pub async fn run(cli: Cli, out: &mut impl Write, notices: &mut impl Write) -> anyhow::Result<()> {
    let config = bootstrap::resolve_config(cli.config)?;
    tracing::info!(
        base_url = %config.api_base_url,
        production = config.production,
        "CloudClip starting"
    );

    let app = bootstrap::build_app(&config)?;
    let mut ctx = CommandContext::new(app, config);
    match cli.command {
        Commands::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            commands::shell(&mut ctx, stdin, out, notices).await
        }
        command => commands::run_command(&mut ctx, command, out, notices).await,
    }
}
