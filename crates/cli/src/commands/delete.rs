//! `delete` command: remove a dashboard.
//!
//! Invariants:
//! - Without `--yes`, nothing is sent until the user confirms on a terminal.

use anyhow::{Context, Result};
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::{DeleteOutput, OutputFormat, get_formatter, output_result};
use crate::progress::Spinner;

pub async fn run(
    config: logfire_config::Config,
    slug: &str,
    yes: bool,
    format: OutputFormat,
    quiet: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    if !yes && !crate::interactive::confirm_delete(slug, "dashboard")? {
        return Ok(());
    }

    info!(slug, "Deleting dashboard");

    let client = crate::commands::build_client_from_config(&config)?;

    let spinner = Spinner::new(!quiet, format!("Deleting {slug}"));
    cancellable!(client.delete_dashboard(slug), cancel)
        .with_context(|| format!("Failed to delete dashboard '{}'", slug))?;
    spinner.finish();

    let output = get_formatter(format).format_delete(&DeleteOutput {
        slug: slug.to_string(),
        deleted: true,
    })?;
    output_result(&output, None)
}
