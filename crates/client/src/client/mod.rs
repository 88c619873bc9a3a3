//! Logfire dashboards API client.
//!
//! This module provides the primary [`LogfireClient`] for managing the
//! dashboards of one Logfire project.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `dashboards`: Dashboard CRUD and existence probe
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Create-or-update orchestration (see [`crate::sync`])
//!
//! # Invariants
//! - One `reqwest::Client` (and connection pool) per `LogfireClient`
//! - Calls never retry; the caller decides what to do with a failure
//! - Slugs are validated before any request is sent

pub mod builder;
mod dashboards;

use std::time::Duration;

use secrecy::SecretString;

/// Logfire dashboards API client.
///
/// All methods take `&self`, so one client can serve concurrent requests.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use logfire_client::LogfireClient;
///
/// let client = LogfireClient::builder().from_config(&config).build()?;
/// let dashboards = client.list_dashboards().await?;
/// ```
#[derive(Debug)]
pub struct LogfireClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) project_url: String,
    pub(crate) organization: String,
    pub(crate) project: String,
    pub(crate) token: SecretString,
    pub(crate) timeout: Duration,
}

impl LogfireClient {
    /// Create a new client builder.
    pub fn builder() -> builder::LogfireClientBuilder {
        builder::LogfireClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/ui-api/organizations/{org}/projects/{project}`.
    pub fn project_url(&self) -> &str {
        &self.project_url
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_not_exposed_in_debug() {
        let secret = "lf-super-secret-token";
        let client = LogfireClient::builder()
            .token(SecretString::new(secret.to_string().into()))
            .organization("acme".to_string())
            .project("web".to_string())
            .build()
            .unwrap();

        let debug_output = format!("{:?}", client);
        assert!(
            !debug_output.contains(secret),
            "Debug output should not contain the token"
        );
    }

    #[test]
    fn test_defaults_to_us_region() {
        let client = LogfireClient::builder()
            .token(SecretString::new("t".to_string().into()))
            .organization("acme".to_string())
            .project("web".to_string())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://logfire-us.pydantic.dev");
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }
}
