//! Sending requests and classifying responses.
//!
//! Every endpoint goes through [`send_request`], which maps transport
//! failures and non-success statuses onto [`ClientError`]. There is no retry:
//! dashboard mutations are not safe to repeat blindly.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Longest error body kept in an error message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Send a request and return the response if its status is 2xx.
///
/// `method` and `url` are only used for logging and error messages.
pub async fn send_request(
    builder: RequestBuilder,
    method: &str,
    url: &str,
    timeout: Duration,
) -> Result<Response> {
    let started = Instant::now();
    let response = builder
        .send()
        .await
        .map_err(|e| ClientError::from_transport(e, timeout))?;

    let status = response.status().as_u16();
    debug!(
        method,
        url,
        status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Logfire API request completed"
    );

    if response.status().is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::from_status(
        status,
        url.to_string(),
        error_message(&body),
    ))
}

/// Read a JSON body into `T`; shape mismatches are protocol errors.
pub async fn read_json<T: DeserializeOwned>(
    response: Response,
    url: &str,
    timeout: Duration,
) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClientError::from_transport(e, timeout))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::Protocol(format!("unexpected response from {url}: {e}")))
}

/// Prefer the API's `detail` field; fall back to the (truncated) raw body.
fn error_message(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned())
        .map(|d| match d {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });

    let message = detail.unwrap_or_else(|| body.trim().to_string());
    if message.chars().count() > MAX_ERROR_BODY_CHARS {
        let truncated: String = message.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{truncated}...")
    } else {
        message
    }
}
