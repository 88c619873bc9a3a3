//! Configuration management for the Logfire dashboards CLI.
//!
//! This crate provides types and a loader for the connection settings the
//! dashboard client needs: API token, organization and project slugs, base URL
//! and request timeout. Values come from `.env` files, environment variables
//! and explicit overrides (CLI flags), in increasing order of precedence.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, ProjectConfig};
