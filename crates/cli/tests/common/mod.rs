//! Shared test utilities for logfire-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point commands at a wiremock server with dummy credentials.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `LOGFIRE_TOKEN` is "test-token", organization `acme`, project `web`.

use assert_cmd::Command;

/// Collection path for the test project.
#[allow(dead_code)]
pub const COLLECTION_PATH: &str = "/ui-api/organizations/acme/projects/web/dashboards/";

/// Resource path for a dashboard in the test project.
#[allow(dead_code)]
pub fn resource_path(slug: &str) -> String {
    format!("{COLLECTION_PATH}{slug}/")
}

/// Returns a hermetic `logfire-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Credentials come from dummy values, never from the host environment.
pub fn logfire_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logfire-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("LOGFIRE_TOKEN", "test-token")
        .env("LOGFIRE_ORGANIZATION", "acme")
        .env("LOGFIRE_PROJECT", "web");

    cmd.env_remove("LOGFIRE_BASE_URL")
        .env_remove("LOGFIRE_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `logfire-cli` command aimed at `base_url`.
#[allow(dead_code)]
pub fn logfire_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = logfire_cmd();
    cmd.env("LOGFIRE_BASE_URL", base_url);
    cmd
}
