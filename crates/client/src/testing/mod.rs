//! Testing utilities for Logfire client tests.
//!
//! Helpers for loading fixtures from `fixtures/`. Available when running
//! tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use logfire_client::testing::{load_fixture, load_text_fixture};
//!
//! let get_body = load_fixture("dashboards/get_dashboard.json");
//! let envelope = load_fixture("dashboards/dashboard_envelope.json");
//! let yaml = load_text_fixture("documents/valid.yaml");
//! ```

use std::path::{Path, PathBuf};

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let content = load_text_fixture(fixture_path);
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture file as text (YAML documents).
///
/// # Panics
/// If the fixture file cannot be read.
pub fn load_text_fixture(path: &str) -> String {
    let full_path = fixture_path(path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}
