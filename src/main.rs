use std::process::ExitCode;

use clap::Parser;
use cloudclip_lib::bootstrap::init_tracing_subscriber;
use cloudclip_lib::cli::Cli;
use cloudclip_lib::commands::AlreadyReported;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    match cloudclip_lib::run(cli, &mut stdout, &mut stderr).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "command failed");
            if !err.is::<AlreadyReported>() {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
