//! Client builder for constructing [`LogfireClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (token, organization, project)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects, default headers)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`LogfireClient`] methods in `dashboards.rs`)
//! - Reading configuration from the environment (handled by `logfire-config`)
//!
//! # Invariants
//! - The token is held as a `SecretString` and never logged
//! - The base URL is always normalized to have no trailing slashes
//! - Every request carries `Content-Type: application/json` and the crate user agent

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::SecretString;

use crate::client::LogfireClient;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use logfire_config::{
    Config,
    constants::{DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("logfire-cli/", env!("CARGO_PKG_VERSION"));

/// Builder for creating a new [`LogfireClient`].
///
/// `token`, `organization` and `project` are required; the base URL defaults
/// to the US region and the timeout to 30 seconds.
///
/// # Example
///
/// ```rust,ignore
/// use logfire_client::LogfireClient;
/// use secrecy::SecretString;
///
/// let client = LogfireClient::builder()
///     .token(SecretString::new("my-token".to_string().into()))
///     .organization("acme".to_string())
///     .project("web".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct LogfireClientBuilder {
    base_url: String,
    token: Option<SecretString>,
    organization: Option<String>,
    project: Option<String>,
    timeout: Duration,
}

impl Default for LogfireClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            organization: None,
            project: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LogfireClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Logfire deployment.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the API token.
    pub fn token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Set the organization slug.
    pub fn organization(mut self, organization: String) -> Self {
        self.organization = Some(organization);
        self
    }

    /// Set the project slug.
    pub fn project(mut self, project: String) -> Self {
        self.project = Some(project);
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.timeout = config.connection.timeout;
        self.token = Some(config.auth.token.clone());
        self.organization = Some(config.project.organization.clone());
        self.project = Some(config.project.project.clone());
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    fn required(value: Option<String>, what: &str) -> Result<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ClientError::InvalidInput(format!("{what} is required")))
    }

    /// Build the [`LogfireClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] if the token, organization or
    /// project is missing or the base URL is empty.
    /// Returns [`ClientError::Network`] if the HTTP client fails to build.
    pub fn build(self) -> Result<LogfireClient> {
        let base_url = Self::normalize_base_url(&self.base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidInput("base URL is required".to_string()));
        }

        let token = self
            .token
            .ok_or_else(|| ClientError::InvalidInput("API token is required".to_string()))?;
        let organization = Self::required(self.organization, "organization")?;
        let project = Self::required(self.project, "project")?;

        let project_url = format!(
            "{}/ui-api/organizations/{}/projects/{}",
            base_url,
            encode_path_segment(&organization),
            encode_path_segment(&project)
        );

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Network)?;

        Ok(LogfireClient {
            http,
            base_url,
            project_url,
            organization,
            project,
            token,
            timeout: self.timeout,
        })
    }
}
