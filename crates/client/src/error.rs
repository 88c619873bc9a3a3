//! Error types for the Logfire client.
//!
//! Every failure the client, the sync helpers or the document loader can
//! produce is one of these variants. Nothing is retried and nothing is
//! swallowed; callers branch on the variant.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Logfire client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A caller-supplied value failed a precondition; no request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A local dashboard document failed a structural check.
    #[error("Invalid dashboard document: {0}")]
    Validation(String),

    /// The API rejected the token (401) or denied access (403).
    #[error("Authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    /// The dashboard or project does not exist.
    #[error("Resource not found: {url}")]
    NotFound { url: String },

    /// A dashboard with this slug already exists.
    #[error("Conflict at {url}: {message}")]
    Conflict { url: String, message: String },

    /// Any other non-success status (5xx and unclassified 4xx).
    #[error("API error ({status}) at {url}: {message}")]
    Server {
        status: u16,
        url: String,
        message: String,
    },

    /// Connection-level failure (DNS, refused, TLS, reset).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Protocol(String),

    /// A local file could not be read or written.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, url: String, message: String) -> Self {
        match status {
            401 | 403 => Self::Authentication { status, message },
            404 => Self::NotFound { url },
            409 => Self::Conflict { url, message },
            _ => Self::Server {
                status,
                url,
                message,
            },
        }
    }

    /// Map a transport error, reporting timeouts with the configured duration.
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Network(err)
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Check if this error is a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Network-class failures: connection problems and timeouts.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        let url = "http://x/dashboards/".to_string();

        assert!(matches!(
            ClientError::from_status(401, url.clone(), "bad token".into()),
            ClientError::Authentication { status: 401, .. }
        ));
        assert!(matches!(
            ClientError::from_status(403, url.clone(), "denied".into()),
            ClientError::Authentication { status: 403, .. }
        ));
        assert!(ClientError::from_status(404, url.clone(), String::new()).is_not_found());
        assert!(matches!(
            ClientError::from_status(409, url.clone(), "exists".into()),
            ClientError::Conflict { .. }
        ));
        assert!(matches!(
            ClientError::from_status(500, url.clone(), "boom".into()),
            ClientError::Server { status: 500, .. }
        ));
        assert!(matches!(
            ClientError::from_status(422, url, "unprocessable".into()),
            ClientError::Server { status: 422, .. }
        ));
    }

    #[test]
    fn test_error_predicates() {
        let err = ClientError::Timeout(Duration::from_secs(1));
        assert!(err.is_network());
        assert!(!err.is_auth_error());

        let err = ClientError::Authentication {
            status: 401,
            message: "x".into(),
        };
        assert!(err.is_auth_error());
        assert!(!err.is_network());
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ClientError::Io {
            path: PathBuf::from("dash/cpu.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("dash/cpu.yaml"));
    }
}
