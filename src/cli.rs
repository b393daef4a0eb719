use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cloudclip")]
#[command(about = "Share clipboard text, files and short links", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/cloudclip/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive session that keeps uploads listed
    Shell,
    /// Share text and get a 4-digit code
    Send {
        text: String,
        /// Mark the content confidential and encrypt it with this key
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Fetch text shared under a code
    Receive {
        code: String,
        /// Decryption key for confidential content
        #[arg(short, long, default_value = "")]
        key: String,
    },
    /// Upload a file (max 100MB)
    Upload { path: PathBuf },
    /// Look up a shared file by code
    File {
        code: String,
        /// Save the file to this path
        #[arg(short, long)]
        download: Option<PathBuf>,
    },
    /// Create a short link
    Shorten {
        url: String,
        /// Custom path: letters and numbers, at least 3 characters
        #[arg(short, long)]
        alias: Option<String>,
        /// Save a PNG QR code of the short link
        #[arg(long)]
        qr: Option<PathBuf>,
    },
    /// Show where a short link points
    Resolve { short_path: String },
    /// Render text as a QR code (SVG on stdout unless a file is given)
    Qr {
        text: String,
        #[arg(long)]
        svg: Option<PathBuf>,
        #[arg(long)]
        png: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cloudclip",
            "shorten",
            "https://example.com",
            "--alias",
            "promo",
            "--config",
            "/tmp/cc.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cc.toml")));
        match cli.command {
            Commands::Shorten { url, alias, qr } => {
                assert_eq!(url, "https://example.com");
                assert_eq!(alias.as_deref(), Some("promo"));
                assert!(qr.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn receive_key_defaults_to_empty() {
        let cli = Cli::try_parse_from(["cloudclip", "receive", "4821"]).unwrap();
        match cli.command {
            Commands::Receive { code, key } => {
                assert_eq!(code, "4821");
                assert_eq!(key, "");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn shell_takes_no_arguments() {
        let cli = Cli::try_parse_from(["cloudclip", "shell"]).unwrap();
        assert!(matches!(cli.command, Commands::Shell));
        assert!(Cli::try_parse_from(["cloudclip", "shell", "extra"]).is_err());
    }
}
