//! `lint` command: check dashboard files without contacting Logfire.
//!
//! Responsibilities:
//! - Run the structural linter over every file and print all findings.
//! - Decide pass/fail: errors always fail, warnings fail under `--strict`.
//!
//! Does NOT handle:
//! - Full Perses schema validation.
//!
//! Invariants:
//! - Every file is linted even if an earlier one cannot be read or parsed.
//! - A file that cannot be linted decides the exit code over findings.

use std::path::PathBuf;

use anyhow::Result;
use logfire_client::{ClientError, LintError, lint_file};
use tracing::{info, warn};

use crate::formatters::{LintReport, OutputFormat, get_formatter, output_result};

pub fn run(files: Vec<PathBuf>, strict: bool, format: OutputFormat) -> Result<()> {
    info!(files = files.len(), strict, "Linting dashboards");

    let total = files.len();
    let mut reports = Vec::with_capacity(total);
    let mut failures: Vec<(PathBuf, LintError)> = Vec::new();
    for file in files {
        match lint_file(&file) {
            Ok(findings) => reports.push(LintReport { file, findings }),
            Err(e) => {
                warn!(file = %file.display(), error = %e, "Lint failed");
                failures.push((file, e));
            }
        }
    }

    if !reports.is_empty() {
        let output = get_formatter(format).format_lint_reports(&reports)?;
        output_result(&output, None)?;
    }

    let skipped = failures.len();
    let mut failures = failures.into_iter();
    if let Some((path, first)) = failures.next() {
        for (path, e) in failures {
            eprintln!("Error: Failed to lint {}: {}", path.display(), e);
        }
        return Err(anyhow::Error::new(first).context(format!(
            "Failed to lint {} ({} of {} file(s) could not be linted)",
            path.display(),
            skipped,
            total
        )));
    }

    let failed = reports.iter().filter(|r| r.fails(strict)).count();
    if failed > 0 {
        let reason = if strict {
            "errors or warnings"
        } else {
            "errors"
        };
        return Err(ClientError::Validation(format!(
            "lint failed: {failed} file(s) with {reason}"
        ))
        .into());
    }

    Ok(())
}
