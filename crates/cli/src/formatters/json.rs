//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all output types as pretty-printed JSON.

use anyhow::Result;
use logfire_client::{DashboardSummary, PushOutcome};

use super::{DashboardDetail, DeleteOutput, Formatter, LintReport};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_dashboards(&self, dashboards: &[DashboardSummary]) -> Result<String> {
        Ok(serde_json::to_string_pretty(dashboards)?)
    }

    fn format_dashboard(&self, detail: &DashboardDetail<'_>) -> Result<String> {
        Ok(serde_json::to_string_pretty(detail)?)
    }

    fn format_push_outcomes(&self, outcomes: &[PushOutcome]) -> Result<String> {
        Ok(serde_json::to_string_pretty(outcomes)?)
    }

    fn format_lint_reports(&self, reports: &[LintReport]) -> Result<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }

    fn format_delete(&self, output: &DeleteOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }
}
