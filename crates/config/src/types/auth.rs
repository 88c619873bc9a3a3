//! Authentication settings.
//!
//! Invariants:
//! - The token is a `SecretString`; `Debug` output redacts it.
//! - Serialization writes the token in clear text and is only meant for
//!   explicit export, never for logging.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication configuration: a bearer token for the Logfire UI API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(with = "secret_string")]
    pub token: SecretString,
}

impl AuthConfig {
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }
}
