//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and required-field validation.
//! - Test environment variable handling and precedence.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Environment variables the loader reads, all unset.
pub fn cleared_logfire_env() -> [(&'static str, Option<&'static str>); 5] {
    [
        ("LOGFIRE_TOKEN", None),
        ("LOGFIRE_ORGANIZATION", None),
        ("LOGFIRE_PROJECT", None),
        ("LOGFIRE_BASE_URL", None),
        ("LOGFIRE_TIMEOUT", None),
    ]
}
