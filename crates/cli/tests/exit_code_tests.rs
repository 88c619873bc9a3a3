//! Integration tests for structured exit codes.
//!
//! These tests verify that logfire-cli returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{COLLECTION_PATH, logfire_cmd, logfire_cmd_with_base_url, resource_path};
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test that successful commands return exit code 0.
#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "list"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No dashboards found."));
}

/// Test that a missing token fails configuration with exit code 1.
#[test]
fn test_missing_token_returns_exit_code_1() {
    logfire_cmd()
        .env_remove("LOGFIRE_TOKEN")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--token or LOGFIRE_TOKEN"));
}

/// Test that authentication failures return exit code 2.
#[tokio::test]
async fn test_auth_failure_returns_exit_code_2() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"detail": "Invalid token"})),
        )
        .mount(&server)
        .await;

    logfire_cmd_with_base_url(&server.uri())
        .env("LOGFIRE_TOKEN", "invalid-token")
        .args(["--quiet", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid token"));
}

/// Test that connection refused returns exit code 3.
#[test]
fn test_connection_refused_returns_exit_code_3() {
    logfire_cmd_with_base_url("http://127.0.0.1:1")
        .args(["--quiet", "list"])
        .assert()
        .code(3);
}

/// Test that a missing dashboard returns exit code 4.
#[tokio::test]
async fn test_not_found_returns_exit_code_4() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(resource_path("nonexistent")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "get", "nonexistent"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to fetch dashboard 'nonexistent'"));
}

/// Test that an invalid slug returns exit code 6 without any request.
#[tokio::test]
async fn test_invalid_slug_returns_exit_code_6() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "get", "Not A Slug"])
        .assert()
        .code(6);
}

/// Test that a create conflict returns exit code 7.
#[tokio::test]
async fn test_conflict_returns_exit_code_7() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("cpu.yaml");
    std::fs::write(
        &file,
        logfire_client::testing::load_text_fixture("documents/valid.yaml"),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path(resource_path("cpu-usage")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({"detail": "slug taken"})),
        )
        .mount(&server)
        .await;

    logfire_cmd_with_base_url(&server.uri())
        .arg("--quiet")
        .arg("push")
        .arg(&file)
        .assert()
        .code(7)
        .stderr(predicate::str::contains("slug taken"));
}

/// Test that server errors return exit code 8.
#[tokio::test]
async fn test_server_error_returns_exit_code_8() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "list"])
        .assert()
        .code(8);
}

/// Test that unreadable responses return exit code 9.
#[tokio::test]
async fn test_malformed_response_returns_exit_code_9() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "list"])
        .assert()
        .code(9);
}

/// Test that `delete` without `--yes` and without a terminal refuses with exit code 6.
#[tokio::test]
async fn test_delete_without_confirmation_returns_exit_code_6() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    logfire_cmd_with_base_url(&server.uri())
        .args(["delete", "cpu-usage"])
        .write_stdin("y\n")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("--yes"));
}
