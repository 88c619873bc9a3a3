//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError`, `LintError` and `ConfigError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use logfire_client::{ClientError, LintError};
use logfire_config::ConfigError;

/// Structured exit codes for logfire-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled failure, bad configuration or unreadable local file.
    GeneralError = 1,

    /// The token was rejected (401) or lacks access (403).
    ///
    /// Scripts should refresh the token.
    AuthenticationFailed = 2,

    /// Network failure or timeout.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Dashboard or project not found.
    NotFound = 4,

    /// Dashboard document is invalid, or lint failed.
    ///
    /// Scripts should fix the file and not retry the same request.
    ValidationError = 5,

    /// A caller-supplied value (slug, flag combination) was rejected before any request.
    InvalidInput = 6,

    /// Create hit an existing slug; pushing again resolves it.
    Conflict = 7,

    /// The API returned a 5xx or unclassified 4xx.
    ServerError = 8,

    /// The API responded with a body the CLI could not read.
    ProtocolError = 9,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::InvalidInput(_) => ExitCode::InvalidInput,
            ClientError::Validation(_) => ExitCode::ValidationError,
            ClientError::Authentication { .. } => ExitCode::AuthenticationFailed,
            ClientError::NotFound { .. } => ExitCode::NotFound,
            ClientError::Conflict { .. } => ExitCode::Conflict,
            ClientError::Server { .. } => ExitCode::ServerError,
            ClientError::Network(_) | ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::Protocol(_) => ExitCode::ProtocolError,
            ClientError::Io { .. } => ExitCode::GeneralError,
        }
    }
}

impl From<&LintError> for ExitCode {
    fn from(err: &LintError) -> Self {
        match err {
            // A file that is not YAML at all is a failed lint, not a crash.
            LintError::Yaml(_) => ExitCode::ValidationError,
            LintError::Io { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(lint_err) = cause.downcast_ref::<LintError>() {
                return ExitCode::from(lint_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::GeneralError;
            }
        }

        ExitCode::GeneralError
    }
}
