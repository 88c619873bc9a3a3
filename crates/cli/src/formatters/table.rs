//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format dashboards, push outcomes and lint findings as tab-separated tables
//!   and `Key: value` detail blocks.
//!
//! Does NOT handle:
//! - Machine-readable formats (see `json` and `yaml`).

use anyhow::Result;
use logfire_client::lint::tally;
use logfire_client::{DashboardSummary, PushOutcome};

use super::common::{format_missing, format_timestamp};
use super::{DashboardDetail, DeleteOutput, Formatter, LintReport};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_dashboards(&self, dashboards: &[DashboardSummary]) -> Result<String> {
        if dashboards.is_empty() {
            return Ok("No dashboards found.\n".to_string());
        }

        let mut output = String::from("Slug\tName\tUpdated\tUpdated By\n");
        for dashboard in dashboards {
            let updated = dashboard.last_modified();
            let updated_by = dashboard
                .updated_by_name
                .as_deref()
                .unwrap_or(&dashboard.created_by_name);
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                dashboard.slug,
                dashboard.name,
                format_timestamp(&updated),
                updated_by
            ));
        }

        Ok(output)
    }

    fn format_dashboard(&self, detail: &DashboardDetail<'_>) -> Result<String> {
        let definition = detail.definition;
        let mut output = String::new();

        output.push_str(&format!("Slug: {}\n", detail.slug));
        output.push_str(&format!("Name: {}\n", definition.metadata.name));
        output.push_str(&format!("Title: {}\n", definition.display_name()));
        if let Some(description) = definition
            .spec
            .display
            .as_ref()
            .and_then(|d| d.description.as_deref())
        {
            output.push_str(&format!("Description: {}\n", description));
        }
        output.push_str(&format!(
            "Project: {}\n",
            format_missing(definition.metadata.project.as_deref())
        ));
        output.push_str(&format!("Panels: {}\n", definition.panel_count()));
        output.push_str(&format!(
            "Duration: {}\n",
            format_missing(definition.spec.rest.get("duration").and_then(|v| v.as_str()))
        ));
        output.push_str(&format!(
            "Updated: {}\n",
            format_missing(definition.metadata.updated_at.as_deref())
        ));

        Ok(output)
    }

    fn format_push_outcomes(&self, outcomes: &[PushOutcome]) -> Result<String> {
        if outcomes.is_empty() {
            return Ok("No dashboards pushed.\n".to_string());
        }

        let mut output = String::from("Slug\tAction\tName\n");
        for outcome in outcomes {
            output.push_str(&format!(
                "{}\t{}\t{}\n",
                outcome.slug,
                outcome.action,
                outcome.dashboard.definition.display_name()
            ));
        }

        Ok(output)
    }

    fn format_lint_reports(&self, reports: &[LintReport]) -> Result<String> {
        let mut output = String::new();
        let mut total_errors = 0;
        let mut total_warnings = 0;

        for report in reports {
            let (errors, warnings) = tally(&report.findings);
            total_errors += errors;
            total_warnings += warnings;

            if report.findings.is_empty() {
                output.push_str(&format!("{}: ok\n", report.file.display()));
                continue;
            }
            for finding in &report.findings {
                output.push_str(&format!("{}: {}\n", report.file.display(), finding));
            }
        }

        output.push_str(&format!(
            "{} file(s) checked: {} error(s), {} warning(s)\n",
            reports.len(),
            total_errors,
            total_warnings
        ));

        Ok(output)
    }

    fn format_delete(&self, output: &DeleteOutput) -> Result<String> {
        Ok(format!("Dashboard '{}' deleted.\n", output.slug))
    }
}
