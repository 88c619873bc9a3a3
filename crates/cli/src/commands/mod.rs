//! CLI command implementations.

pub mod completions;
pub mod delete;
pub mod get;
pub mod init;
pub mod lint;
pub mod list;
pub mod pull;
pub mod push;

use anyhow::{Context, Result};
use logfire_client::LogfireClient;
use logfire_config::Config;

/// Build a dashboard client from validated configuration.
pub fn build_client_from_config(config: &Config) -> Result<LogfireClient> {
    LogfireClient::builder()
        .from_config(config)
        .build()
        .context("Failed to create Logfire client")
}
