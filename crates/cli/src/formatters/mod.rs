//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table, JSON and YAML output formats.
//! - Implement the `Formatter` trait for dashboards, push results and lint reports.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings; see `output_result`).
//! - Dashboard documents written by `pull` and `init`, which are always YAML.
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | YAML | Valid empty structure | `[]` |
//! | Table | Human message | `No dashboards found.` |

use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use logfire_client::lint::tally;
use logfire_client::{DashboardDefinition, DashboardSummary, Finding, PushOutcome};
use serde::Serialize;

mod common;
mod json;
mod table;
mod yaml;

pub use common::{output_result, write_to_file};
pub use json::JsonFormatter;
pub use table::TableFormatter;
pub use yaml::YamlFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// Findings for one linted file.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub file: PathBuf,
    pub findings: Vec<Finding>,
}

impl LintReport {
    /// True when the file has errors, or warnings under `--strict`.
    pub fn fails(&self, strict: bool) -> bool {
        let (errors, warnings) = tally(&self.findings);
        errors > 0 || (strict && warnings > 0)
    }
}

/// One dashboard as shown by `get`: the slug it was fetched under and its definition.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardDetail<'a> {
    pub slug: &'a str,
    pub definition: &'a DashboardDefinition,
}

/// Result of a delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteOutput {
    pub slug: String,
    pub deleted: bool,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the dashboard listing.
    fn format_dashboards(&self, dashboards: &[DashboardSummary]) -> Result<String>;

    /// Format a single dashboard in detail.
    fn format_dashboard(&self, detail: &DashboardDetail<'_>) -> Result<String>;

    /// Format the outcome of pushing one or more files.
    fn format_push_outcomes(&self, outcomes: &[PushOutcome]) -> Result<String>;

    /// Format lint findings for one or more files.
    fn format_lint_reports(&self, reports: &[LintReport]) -> Result<String>;

    /// Format a delete confirmation.
    fn format_delete(&self, output: &DeleteOutput) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}
