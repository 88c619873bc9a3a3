//! Logfire CLI - manage Logfire dashboards as Perses YAML files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run dashboard commands through the shared client library.
//! - Format results (table, JSON, YAML) and map failures to exit codes.
//!
//! Does NOT handle:
//! - HTTP or document logic (see `crates/client`).
//! - Configuration validation rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Logs and progress go to stderr; stdout carries command output only.

mod args;
#[macro_use]
mod cancellation;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;
mod interactive;
mod progress;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use logfire_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Local-only commands never need connection details
    let config_context = if cli.command.needs_connection() {
        match build_config(&cli) {
            Ok(config) => ConfigCommandContext::Real(Box::new(config)),
            Err(e) => {
                eprintln!("Failed to build configuration: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        ConfigCommandContext::Placeholder
    };

    // Create cancellation token and set up signal handling
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config_context, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Layer CLI flags over the environment and validate the result.
///
/// Flags win; the environment only fills what the flags left unset.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    if let Some(ref token) = cli.token {
        loader = loader.with_token(token.clone());
    }
    if let Some(ref organization) = cli.organization {
        loader = loader.with_organization(organization.clone());
    }
    if let Some(ref project) = cli.project {
        loader = loader.with_project(project.clone());
    }
    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }

    loader.from_env()?.build()
}
