//! Connection and project configuration types.
//!
//! Responsibilities:
//! - Define connection settings (base URL, timeout).
//! - Define the organization/project pair that roots every dashboard path.
//! - Define the main `Config` structure combining connection, project and auth.
//!
//! Does NOT handle:
//! - Configuration loading from env/CLI (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `base_url` never carries a trailing slash once built by the loader.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Logfire API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Logfire deployment (e.g., https://logfire-us.pydantic.dev)
    pub base_url: String,
    /// Per-request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Organization and project that own the dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub organization: String,
    pub project: String,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub project: ProjectConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for the given project with default connection settings.
    pub fn new(organization: String, project: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            project: ProjectConfig {
                organization,
                project,
            },
            auth: AuthConfig::new(token),
        }
    }

    /// Same as [`Config::new`] but pointed at a specific base URL.
    ///
    /// Mostly useful for tests against a mock server.
    pub fn with_base_url(
        base_url: String,
        organization: String,
        project: String,
        token: SecretString,
    ) -> Self {
        let mut config = Self::new(organization, project, token);
        config.connection.base_url = base_url;
        config
    }
}
