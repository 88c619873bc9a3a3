//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Distinguish between real and placeholder configs at compile time.
//! - Provide type-safe extraction of config for commands that need it.
//!
//! Does NOT handle:
//! - Configuration loading (done in `main()`).
//!
//! Invariants:
//! - Placeholder configs cannot be used for Logfire API connections.
//! - Real configs are validated before command execution.

use logfire_config::Config;

/// Context for command execution, distinguishing between real and placeholder configs.
///
/// `lint`, `init` and `completions` run without credentials; everything else
/// gets a validated [`Config`].
pub(crate) enum ConfigCommandContext {
    /// A validated config built from CLI flags and the environment.
    Real(Box<Config>),
    /// Stand-in for commands that never open a connection.
    Placeholder,
}

impl ConfigCommandContext {
    /// Extract the real config, failing if this is a placeholder.
    pub(crate) fn into_real_config(self) -> anyhow::Result<Config> {
        match self {
            ConfigCommandContext::Real(config) => Ok(*config),
            ConfigCommandContext::Placeholder => {
                anyhow::bail!(
                    "Internal error: attempted to use placeholder config for an operation requiring real connection details"
                )
            }
        }
    }
}
