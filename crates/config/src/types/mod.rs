//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the immutable `Config` value handed to the dashboard client.
//! - Keep the API token inside `secrecy::SecretString` so it never reaches logs.
//!
//! Does NOT handle:
//! - Loading values from the environment or CLI (see `loader` module).
//! - Network connections (see the client crate).

mod auth;
pub(crate) mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig, ProjectConfig};
