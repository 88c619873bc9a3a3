//! Integration tests for the dashboard commands against a mock Logfire API.

mod common;

use common::{COLLECTION_PATH, logfire_cmd_with_base_url, resource_path};
use logfire_client::testing::{load_fixture, load_text_fixture};
use predicates::prelude::*;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// GET answers with the bare definition under `dashboard`.
async fn mount_get(server: &MockServer, slug: &str) {
    Mock::given(method("GET"))
        .and(path(resource_path(slug)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/get_dashboard.json")),
        )
        .mount(server)
        .await;
}

fn write_document(dir: &tempfile::TempDir, name: &str, fixture: &str) -> std::path::PathBuf {
    let file = dir.path().join(name);
    std::fs::write(&file, load_text_fixture(fixture)).unwrap();
    file
}

#[tokio::test]
async fn test_list_table_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("dashboards/list_dashboards.json")),
        )
        .mount(&server)
        .await;

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Slug\tName\tUpdated\tUpdated By\n"))
        .stdout(predicate::str::contains("service-overview\tservice-overview"))
        .stdout(predicate::str::contains("ops-bot"));
}

#[tokio::test]
async fn test_list_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("dashboards/list_dashboards.json")),
        )
        .mount(&server)
        .await;

    let output = logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["slug"], "service-overview");
    assert_eq!(items[1]["created_by_name"], "ops-bot");
}

#[tokio::test]
async fn test_get_shows_detail() {
    let server = MockServer::start().await;
    mount_get(&server, "cpu-usage").await;

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "get", "cpu-usage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slug: cpu-usage"))
        .stdout(predicate::str::contains("Title: CPU Usage"))
        .stdout(predicate::str::contains("Panels: 1"));
}

#[tokio::test]
async fn test_get_json_output() {
    let server = MockServer::start().await;
    mount_get(&server, "cpu-usage").await;

    let output = logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "-f", "json", "get", "cpu-usage"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["slug"], "cpu-usage");
    assert_eq!(parsed["definition"]["metadata"]["name"], "cpu-usage");
}

#[tokio::test]
async fn test_pull_writes_yaml_file() {
    let server = MockServer::start().await;
    mount_get(&server, "cpu-usage").await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("cpu.yaml");

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "pull", "cpu-usage", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Dashboard exported to"));

    let text = std::fs::read_to_string(&out).unwrap();
    let doc: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(doc["kind"].as_str(), Some("Dashboard"));
    assert_eq!(doc["metadata"]["name"].as_str(), Some("cpu-usage"));
    // Server metadata stays out of the local document.
    assert!(!text.contains("created_by_name"));
}

#[tokio::test]
async fn test_export_alias_writes_to_stdout() {
    let server = MockServer::start().await;
    mount_get(&server, "cpu-usage").await;

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "export", "cpu-usage", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kind: Dashboard"))
        .stdout(predicate::str::contains("#/spec/panels/CpuPanel"));
}

#[tokio::test]
async fn test_push_creates_missing_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(resource_path("cpu-usage")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .and(body_partial_json(serde_json::json!({
            "slug": "cpu-usage",
            "name": "cpu-usage",
            "definition": {"kind": "Dashboard"}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/dashboard_envelope.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_document(&dir, "cpu.yaml", "documents/valid.yaml");

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "push"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("cpu-usage\tcreated\tCPU Usage"));
}

#[tokio::test]
async fn test_import_alias_updates_existing_dashboard() {
    let server = MockServer::start().await;
    mount_get(&server, "cpu-usage").await;
    Mock::given(method("PUT"))
        .and(path(resource_path("cpu-usage")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/dashboard_envelope.json")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_document(&dir, "cpu.yaml", "documents/valid.yaml");

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "--format", "json", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"updated\""));
}

#[tokio::test]
async fn test_push_reports_every_file_and_fails_on_invalid_one() {
    let server = MockServer::start().await;
    mount_get(&server, "cpu-usage").await;
    Mock::given(method("PUT"))
        .and(path(resource_path("cpu-usage")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/dashboard_envelope.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let invalid = write_document(&dir, "broken.yaml", "documents/missing_name.yaml");
    let valid = write_document(&dir, "cpu.yaml", "documents/valid.yaml");

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "push", "--concurrency", "2"])
        .arg(&invalid)
        .arg(&valid)
        .assert()
        .code(5)
        .stdout(predicate::str::contains("cpu-usage\tupdated"))
        .stderr(predicate::str::contains("broken.yaml"));
}

#[tokio::test]
async fn test_push_slug_override_rejects_multiple_files() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let a = write_document(&dir, "a.yaml", "documents/valid.yaml");
    let b = write_document(&dir, "b.yaml", "documents/valid.yaml");

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "push", "--slug", "other"])
        .arg(&a)
        .arg(&b)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("--slug"));
}

#[tokio::test]
async fn test_delete_with_yes_skips_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(resource_path("cpu-usage")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "delete", "cpu-usage", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard 'cpu-usage' deleted."));
}

#[tokio::test]
async fn test_delete_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(resource_path("cpu-usage")))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let output = logfire_cmd_with_base_url(&server.uri())
        .args(["--quiet", "-f", "json", "delete", "-y", "cpu-usage"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["slug"], "cpu-usage");
    assert_eq!(parsed["deleted"], true);
}
