//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for the Logfire client tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here points at a wiremock server under org `acme`, project `web`
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use logfire_client::testing::{load_fixture, load_text_fixture};
#[allow(unused_imports)]
pub use logfire_client::{ClientError, LogfireClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// Token used by every test client.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// Collection path for the test project.
#[allow(dead_code)]
pub const COLLECTION_PATH: &str = "/ui-api/organizations/acme/projects/web/dashboards/";

/// Resource path for a dashboard in the test project.
#[allow(dead_code)]
pub fn resource_path(slug: &str) -> String {
    format!("{COLLECTION_PATH}{slug}/")
}

/// Client pointed at the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> LogfireClient {
    client_with_timeout(server, Duration::from_secs(5))
}

#[allow(dead_code)]
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> LogfireClient {
    LogfireClient::builder()
        .base_url(server.uri())
        .token(SecretString::new(TEST_TOKEN.to_string().into()))
        .organization("acme".to_string())
        .project("web".to_string())
        .timeout(timeout)
        .build()
        .expect("test client should build")
}

/// Body of a GET for a dashboard holding `definition`.
#[allow(dead_code)]
pub fn get_body_for(definition: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "dashboard": definition })
}

/// Server envelope wrapping `definition`, as returned by create and update.
#[allow(dead_code)]
pub fn envelope_for(slug: &str, definition: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": "b08a77b8-0761-4bab-9efe-8b6f82997903",
        "project_id": "4fbc915c-7847-4088-8516-05a1026b2b47",
        "created_at": "2026-01-18T20:45:30.305002Z",
        "updated_at": null,
        "created_by_name": "strawgate",
        "updated_by_name": null,
        "dashboard_name": definition["metadata"]["name"],
        "dashboard_slug": slug,
        "definition": definition,
    })
}
