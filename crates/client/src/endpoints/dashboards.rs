//! Dashboard collection endpoints.
//!
//! `project_url` is `{base}/ui-api/organizations/{org}/projects/{project}`
//! with both segments already encoded. Every URL built here ends with `/`;
//! the API treats a missing trailing slash as a different route.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::request::{read_json, send_request};
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::models::{Dashboard, DashboardDefinition, GetDashboardResponse, ListDashboardsResult};

/// Request body for create and update.
#[derive(Debug, Serialize)]
struct DashboardPayload<'a> {
    definition: &'a DashboardDefinition,
    slug: &'a str,
    name: &'a str,
}

/// URL of the dashboard collection.
pub fn collection_url(project_url: &str) -> String {
    format!("{project_url}/dashboards/")
}

/// URL of a single dashboard.
pub fn resource_url(project_url: &str, slug: &str) -> String {
    format!("{project_url}/dashboards/{}/", encode_path_segment(slug))
}

/// List all dashboards in the project.
pub async fn list_dashboards(
    client: &Client,
    project_url: &str,
    auth_token: &str,
    timeout: Duration,
) -> Result<ListDashboardsResult> {
    let url = collection_url(project_url);
    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token));

    let response = send_request(builder, "GET", &url, timeout).await?;
    read_json(response, &url, timeout).await
}

/// Get a single dashboard's definition by slug.
///
/// The body is `{"dashboard": <definition>}`; unlike create and update there
/// is no envelope.
pub async fn get_dashboard(
    client: &Client,
    project_url: &str,
    auth_token: &str,
    slug: &str,
    timeout: Duration,
) -> Result<DashboardDefinition> {
    let url = resource_url(project_url, slug);
    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token));

    let response = send_request(builder, "GET", &url, timeout).await?;
    let body: GetDashboardResponse = read_json(response, &url, timeout).await?;
    Ok(body.dashboard)
}

/// Create a dashboard under `slug`.
pub async fn create_dashboard(
    client: &Client,
    project_url: &str,
    auth_token: &str,
    slug: &str,
    definition: &DashboardDefinition,
    timeout: Duration,
) -> Result<Dashboard> {
    let url = collection_url(project_url);
    let payload = DashboardPayload {
        definition,
        slug,
        name: &definition.metadata.name,
    };
    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .json(&payload);

    let response = send_request(builder, "POST", &url, timeout).await?;
    read_json(response, &url, timeout).await
}

/// Replace the definition of an existing dashboard.
pub async fn update_dashboard(
    client: &Client,
    project_url: &str,
    auth_token: &str,
    slug: &str,
    definition: &DashboardDefinition,
    timeout: Duration,
) -> Result<Dashboard> {
    let url = resource_url(project_url, slug);
    let payload = DashboardPayload {
        definition,
        slug,
        name: &definition.metadata.name,
    };
    let builder = client
        .put(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .json(&payload);

    let response = send_request(builder, "PUT", &url, timeout).await?;
    read_json(response, &url, timeout).await
}

/// Delete a dashboard. Any 2xx counts as success; the body is ignored.
pub async fn delete_dashboard(
    client: &Client,
    project_url: &str,
    auth_token: &str,
    slug: &str,
    timeout: Duration,
) -> Result<()> {
    let url = resource_url(project_url, slug);
    let builder = client
        .delete(&url)
        .header("Authorization", format!("Bearer {}", auth_token));

    send_request(builder, "DELETE", &url, timeout).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = "https://logfire-us.pydantic.dev/ui-api/organizations/acme/projects/web";

    #[test]
    fn test_urls_end_with_slash() {
        assert_eq!(
            collection_url(PROJECT),
            "https://logfire-us.pydantic.dev/ui-api/organizations/acme/projects/web/dashboards/"
        );
        assert_eq!(
            resource_url(PROJECT, "cpu"),
            "https://logfire-us.pydantic.dev/ui-api/organizations/acme/projects/web/dashboards/cpu/"
        );
    }

    #[test]
    fn test_resource_url_encodes_slug() {
        assert!(resource_url(PROJECT, "a/b").ends_with("/dashboards/a%2Fb/"));
    }

    #[test]
    fn test_payload_shape() {
        let definition: DashboardDefinition = serde_json::from_value(serde_json::json!({
            "kind": "Dashboard",
            "metadata": {"name": "cpu"},
            "spec": {"panels": {}}
        }))
        .unwrap();
        let payload = DashboardPayload {
            definition: &definition,
            slug: "cpu-usage",
            name: &definition.metadata.name,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["slug"], "cpu-usage");
        assert_eq!(value["name"], "cpu");
        assert_eq!(value["definition"]["kind"], "Dashboard");
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["definition", "slug", "name"]);
    }
}
