//! CLI command implementations
//!
//! `serve` resolves configuration (file, then flag overrides), seeds the
//! wish list and runs the HTTP server on a tokio runtime.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::http_server::{HttpServer, HttpServerConfig, WishState};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse process arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
    }
}

/// Load configuration from a JSON file, or defaults when no path is given
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

            serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?
        }
        None => HttpServerConfig::default(),
    };

    validate(&config)?;
    Ok(config)
}

fn validate(config: &HttpServerConfig) -> CliResult<()> {
    if config.host.trim().is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }
    if config.port == 0 {
        return Err(CliError::config_error("port must be > 0"));
    }
    Ok(())
}

/// Apply command-line overrides on top of a loaded config
pub fn apply_overrides(
    mut config: HttpServerConfig,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    validate(&config)?;
    Ok(config)
}

/// Start the HTTP server with the seed wish
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = apply_overrides(load_config(config_path)?, host, port)?;
    log_event_with_fields(Event::ConfigLoaded, &[("addr", config.socket_addr().as_str())]);

    let server = HttpServer::with_config(config, Arc::new(WishState::seeded()));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async { server.start().await }).map_err(|e| {
        let message = format!("HTTP server failed: {}", e);
        log_event_with_fields(Event::ServerFailed, &[("error", message.as_str())]);
        CliError::boot_failed(message)
    })
}
