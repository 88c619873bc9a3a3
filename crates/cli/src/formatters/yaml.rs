//! YAML formatter implementation.
//!
//! Responsibilities:
//! - Format all output types as YAML, keeping definition key order.

use anyhow::Result;
use logfire_client::{DashboardSummary, PushOutcome};

use super::{DashboardDetail, DeleteOutput, Formatter, LintReport};

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_dashboards(&self, dashboards: &[DashboardSummary]) -> Result<String> {
        Ok(serde_yaml::to_string(dashboards)?)
    }

    fn format_dashboard(&self, detail: &DashboardDetail<'_>) -> Result<String> {
        Ok(serde_yaml::to_string(detail)?)
    }

    fn format_push_outcomes(&self, outcomes: &[PushOutcome]) -> Result<String> {
        Ok(serde_yaml::to_string(outcomes)?)
    }

    fn format_lint_reports(&self, reports: &[LintReport]) -> Result<String> {
        Ok(serde_yaml::to_string(reports)?)
    }

    fn format_delete(&self, output: &DeleteOutput) -> Result<String> {
        Ok(serde_yaml::to_string(output)?)
    }
}
