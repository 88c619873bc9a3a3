//! Logfire dashboards client.
//!
//! This crate provides a typed client for the dashboard endpoints of the
//! Logfire UI API, plus the local pieces the CLI builds on: loading and
//! writing Perses dashboard YAML, deriving slugs, create-or-update sync, and
//! a structural linter.

pub mod client;
pub mod document;
pub mod endpoints;
pub mod error;
pub mod lint;
pub mod models;
pub mod slug;
pub mod sync;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::LogfireClient;
pub use client::builder::LogfireClientBuilder;
pub use document::{load_definition, parse_definition, template, to_yaml};
pub use error::{ClientError, Result};
pub use lint::{Finding, LintError, Severity, lint_file, lint_str, lint_value};
pub use models::{
    Dashboard, DashboardDefinition, DashboardDisplay, DashboardMetadata, DashboardSpec,
    DashboardSummary, GetDashboardResponse, ListDashboardsResult, Probe,
};
pub use slug::{Slug, slugify};
pub use sync::{PushAction, PushOutcome, pull, push, push_file};
