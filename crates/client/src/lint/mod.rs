//! Local structural checks for dashboard YAML documents.
//!
//! Responsibilities:
//! - Inspect a document before it is pushed and report every problem found.
//! - Classify each problem as an error or a warning with a dotted path.
//!
//! Does NOT handle:
//! - Deciding pass/fail (the caller decides, e.g. `--strict` in the CLI).
//! - Validating the panel/query schema beyond the checks in [`checks`].
//!
//! Invariants:
//! - All checks run; findings are returned in discovery order.
//! - Only unreadable files and YAML syntax errors are returned as `Err`.

mod checks;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

pub use checks::PANEL_PLUGIN_KINDS;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One structural issue in a dashboard document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Finding {
    pub fn error(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn warning(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {} (at {})", self.severity, self.message, path),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Failures that prevent linting altogether.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Lint an already-parsed YAML value.
pub fn lint_value(document: &serde_yaml::Value) -> Vec<Finding> {
    let mut findings = Vec::new();
    checks::run_all(document, &mut findings);
    findings
}

/// Lint YAML text.
pub fn lint_str(text: &str) -> Result<Vec<Finding>, LintError> {
    let document: serde_yaml::Value = serde_yaml::from_str(text)?;
    Ok(lint_value(&document))
}

/// Lint a YAML file on disk.
pub fn lint_file(path: &Path) -> Result<Vec<Finding>, LintError> {
    let text = std::fs::read_to_string(path).map_err(|source| LintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let findings = lint_str(&text)?;
    tracing::debug!(
        path = %path.display(),
        findings = findings.len(),
        "Linted dashboard document"
    );
    Ok(findings)
}

/// Count errors and warnings, in that order.
pub fn tally(findings: &[Finding]) -> (usize, usize) {
    let errors = findings.iter().filter(|f| f.is_error()).count();
    (errors, findings.len() - errors)
}
