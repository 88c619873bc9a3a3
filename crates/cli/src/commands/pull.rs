//! `pull` command: export a dashboard definition to a YAML file.
//!
//! Invariants:
//! - The written file is a plain Perses document that `push` accepts unchanged.
//! - Files are replaced atomically; a failed pull never leaves a partial file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use logfire_client::{pull, to_yaml};
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::output_result;
use crate::progress::Spinner;

/// Where the definition goes: `-o -` means stdout, no flag means `<slug>.yaml`.
pub fn resolve_output(slug: &str, output: Option<PathBuf>) -> Option<PathBuf> {
    match output {
        Some(path) if path == Path::new("-") => None,
        Some(path) => Some(path),
        None => Some(PathBuf::from(format!("{slug}.yaml"))),
    }
}

pub async fn run(
    config: logfire_config::Config,
    slug: &str,
    output: Option<PathBuf>,
    quiet: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(slug, "Pulling dashboard");

    let client = crate::commands::build_client_from_config(&config)?;

    let spinner = Spinner::new(!quiet, format!("Pulling {slug}"));
    let definition = cancellable!(pull(&client, slug), cancel)
        .with_context(|| format!("Failed to pull dashboard '{}'", slug))?;
    spinner.finish();

    let yaml = to_yaml(&definition)?;
    let target = resolve_output(slug, output);
    output_result(&yaml, target.as_deref())?;

    if let Some(path) = target {
        eprintln!("Dashboard exported to: {}", path.display());
    }
    Ok(())
}
