//! `push` command: create or update dashboards from YAML files.
//!
//! Responsibilities:
//! - Push each file with create-or-update semantics.
//! - Run several pushes at once, bounded by `--concurrency`.
//! - Report every file's result before failing.
//!
//! Does NOT handle:
//! - Retrying conflicts; a second push resolves a create that lost a race.
//!
//! Invariants:
//! - Output lists outcomes in the order the files were given.
//! - Every file is attempted even if an earlier one fails.

use std::path::PathBuf;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use logfire_client::{ClientError, LogfireClient, PushOutcome, push_file};
use tracing::{info, warn};

use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter, output_result};
use crate::progress::BatchProgress;

pub async fn run(
    config: logfire_config::Config,
    files: Vec<PathBuf>,
    slug: Option<String>,
    concurrency: usize,
    format: OutputFormat,
    quiet: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    if slug.is_some() && files.len() > 1 {
        return Err(ClientError::InvalidInput(
            "--slug can only be used when pushing a single file".to_string(),
        )
        .into());
    }

    info!(files = files.len(), concurrency, "Pushing dashboards");

    let client = crate::commands::build_client_from_config(&config)?;
    let progress = BatchProgress::new(!quiet && files.len() > 1, "Pushing dashboards", files.len());

    let results = cancellable!(
        push_all(&client, &files, slug.as_deref(), concurrency, &progress),
        cancel
    );
    progress.finish();

    let mut outcomes = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Push failed");
                failures.push((path, e));
            }
        }
    }

    if !outcomes.is_empty() {
        let output = get_formatter(format).format_push_outcomes(&outcomes)?;
        output_result(&output, None)?;
    }

    let failed = failures.len();
    let mut failures = failures.into_iter();
    match failures.next() {
        None => Ok(()),
        Some((path, first)) => {
            for (path, e) in failures {
                eprintln!("Error: Failed to push {}: {}", path.display(), e);
            }
            // The first failure decides the exit code.
            Err(anyhow::Error::new(first).context(format!(
                "Failed to push {} ({} of {} file(s) failed)",
                path.display(),
                failed,
                files.len()
            )))
        }
    }
}

/// Push every file, at most `concurrency` at a time, returning results in input order.
async fn push_all(
    client: &LogfireClient,
    files: &[PathBuf],
    slug: Option<&str>,
    concurrency: usize,
    progress: &BatchProgress,
) -> Vec<Result<PushOutcome, ClientError>> {
    let mut indexed: Vec<(usize, Result<PushOutcome, ClientError>)> =
        stream::iter(files.iter().enumerate())
            .map(|(i, path)| async move {
                let result = push_file(client, path, slug).await;
                progress.inc();
                (i, result)
            })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;

    indexed.sort_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, result)| result).collect()
}
