//! Centralized constants for the Logfire dashboards workspace.
//!
//! Default values used across crates live here so the CLI, the config loader
//! and the client agree on them.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Logfire base URL (US region).
pub const DEFAULT_BASE_URL: &str = "https://logfire-us.pydantic.dev";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_TOKEN: &str = "LOGFIRE_TOKEN";
pub const ENV_ORGANIZATION: &str = "LOGFIRE_ORGANIZATION";
pub const ENV_PROJECT: &str = "LOGFIRE_PROJECT";
pub const ENV_BASE_URL: &str = "LOGFIRE_BASE_URL";
pub const ENV_TIMEOUT: &str = "LOGFIRE_TIMEOUT";

// =============================================================================
// CLI Defaults
// =============================================================================

/// Default number of dashboards pushed concurrently by `push`.
pub const DEFAULT_PUSH_CONCURRENCY: usize = 4;

/// Upper bound for `--concurrency`.
pub const MAX_PUSH_CONCURRENCY: usize = 32;
