//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `LOGFIRE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_BASE_URL, ENV_ORGANIZATION, ENV_PROJECT, ENV_TIMEOUT, ENV_TOKEN};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Only fills values that are still unset, so builder overrides applied
/// earlier keep precedence.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.token().is_none()
        && let Some(token) = env_var_or_none(ENV_TOKEN)
    {
        loader.set_token(Some(SecretString::new(token.into())));
    }
    if loader.organization().is_none()
        && let Some(organization) = env_var_or_none(ENV_ORGANIZATION)
    {
        loader.set_organization(Some(organization));
    }
    if loader.project().is_none()
        && let Some(project) = env_var_or_none(ENV_PROJECT)
    {
        loader.set_project(Some(project));
    }
    if loader.base_url().is_none()
        && let Some(url) = env_var_or_none(ENV_BASE_URL)
    {
        loader.set_base_url(Some(url));
    }
    if loader.timeout().is_none()
        && let Some(timeout) = env_var_or_none(ENV_TIMEOUT)
    {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}
