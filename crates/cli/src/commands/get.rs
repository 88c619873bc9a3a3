//! `get` command: show one dashboard.

use anyhow::{Context, Result};
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::{DashboardDetail, OutputFormat, get_formatter, output_result};
use crate::progress::Spinner;

pub async fn run(
    config: logfire_config::Config,
    slug: &str,
    format: OutputFormat,
    quiet: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(slug, "Fetching dashboard");

    let client = crate::commands::build_client_from_config(&config)?;

    let spinner = Spinner::new(!quiet, format!("Fetching {slug}"));
    let definition = cancellable!(client.get_dashboard(slug), cancel)
        .with_context(|| format!("Failed to fetch dashboard '{}'", slug))?;
    spinner.finish();

    let detail = DashboardDetail {
        slug,
        definition: &definition,
    };
    let output = get_formatter(format).format_dashboard(&detail)?;
    output_result(&output, None)
}
