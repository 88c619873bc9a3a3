//! `list` command: show every dashboard in the project.
//!
//! Invariants:
//! - Rows appear in the order the API returned them.

use anyhow::{Context, Result};
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter, output_result};
use crate::progress::Spinner;

pub async fn run(
    config: logfire_config::Config,
    format: OutputFormat,
    quiet: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(
        organization = %config.project.organization,
        project = %config.project.project,
        "Listing dashboards"
    );

    let client = crate::commands::build_client_from_config(&config)?;

    let spinner = Spinner::new(!quiet, "Fetching dashboards");
    let dashboards = cancellable!(client.list_dashboards(), cancel)
        .context("Failed to list dashboards")?;
    spinner.finish();

    let output = get_formatter(format).format_dashboards(&dashboards.dashboards)?;
    output_result(&output, None)
}
