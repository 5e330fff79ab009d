//! CLI argument definitions using clap
//!
//! Commands:
//! - wishlist serve [--config <path>] [--host <addr>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// wishlist - an in-memory wish list served over HTTP
#[derive(Parser, Debug)]
#[command(name = "wishlist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["wishlist", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, host, port } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert!(port.is_none());
            }
        }
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "wishlist", "serve", "--config", "w.json", "--port", "9000",
        ])
        .unwrap();
        match cli.command {
            Command::Serve { config, port, .. } => {
                assert_eq!(config, Some(PathBuf::from("w.json")));
                assert_eq!(port, Some(9000));
            }
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["wishlist", "serve", "--port", "http"]).is_err());
    }
}
