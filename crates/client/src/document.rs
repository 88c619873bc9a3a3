//! Reading and writing dashboard YAML documents.
//!
//! Parsing is strict: anything that cannot become a [`DashboardDefinition`]
//! fails with [`ClientError::Validation`] before it can reach the network.
//! Finer-grained, non-fatal checks live in [`crate::lint`].

use std::path::Path;

use serde_json::{Map, Value, json};

use crate::error::{ClientError, Result};
use crate::models::{
    DASHBOARD_KIND, DashboardDefinition, DashboardDisplay, DashboardMetadata, DashboardSpec,
};
use crate::slug::slugify;

/// Parse a YAML dashboard document.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] if the text is not YAML, is not a
/// mapping, has the wrong `kind`, lacks `metadata.name` or `spec`, or
/// has fields of the wrong type.
pub fn parse_definition(text: &str) -> Result<DashboardDefinition> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)
        .map_err(|e| ClientError::Validation(format!("not valid YAML: {e}")))?;

    if !value.is_mapping() {
        return Err(ClientError::Validation(
            "document must be a mapping with kind, metadata and spec".to_string(),
        ));
    }

    let definition: DashboardDefinition = serde_yaml::from_value(value)
        .map_err(|e| ClientError::Validation(e.to_string()))?;

    if definition.kind != DASHBOARD_KIND {
        return Err(ClientError::Validation(format!(
            "kind must be '{DASHBOARD_KIND}', found '{}'",
            definition.kind
        )));
    }
    if definition.metadata.name.trim().is_empty() {
        return Err(ClientError::Validation(
            "metadata.name must not be empty".to_string(),
        ));
    }

    Ok(definition)
}

/// Read and parse a dashboard document from disk.
///
/// Validation messages are prefixed with the file path.
pub fn load_definition(path: &Path) -> Result<DashboardDefinition> {
    let text = std::fs::read_to_string(path).map_err(|source| ClientError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_definition(&text).map_err(|e| match e {
        ClientError::Validation(message) => {
            ClientError::Validation(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

/// Render a definition as YAML, keeping key order.
pub fn to_yaml(definition: &DashboardDefinition) -> Result<String> {
    serde_yaml::to_string(definition)
        .map_err(|e| ClientError::Protocol(format!("failed to render dashboard as YAML: {e}")))
}

/// Starter dashboard written by `init`.
///
/// One time-series panel over `records`, bucketed by `$resolution`, laid out
/// in a single grid row. `metadata.name` is the slugified display name.
pub fn template(name: &str, project: &str) -> Result<DashboardDefinition> {
    let slug = slugify(name)?;

    let mut metadata = DashboardMetadata::new(slug.as_str());
    metadata.project = Some(project.to_string());

    let mut rest = Map::new();
    rest.insert(
        "panels".to_string(),
        json!({
            "ExamplePanel": {
                "kind": "Panel",
                "spec": {
                    "display": {"name": "Example Panel"},
                    "plugin": {
                        "kind": "TimeSeriesChart",
                        "spec": {"legend": {"position": "bottom"}}
                    },
                    "queries": [{
                        "kind": "TimeSeriesQuery",
                        "spec": {
                            "plugin": {
                                "kind": "LogfireTimeSeriesQuery",
                                "spec": {"query": EXAMPLE_QUERY}
                            }
                        }
                    }]
                }
            }
        }),
    );
    rest.insert(
        "layouts".to_string(),
        json!([{
            "kind": "Grid",
            "spec": {
                "items": [{
                    "x": 0,
                    "y": 0,
                    "width": 12,
                    "height": 6,
                    "content": {"$ref": "#/spec/panels/ExamplePanel"}
                }]
            }
        }]),
    );
    rest.insert("duration".to_string(), Value::from("1h"));
    rest.insert("refreshInterval".to_string(), Value::from("0s"));

    Ok(DashboardDefinition {
        kind: DASHBOARD_KIND.to_string(),
        metadata,
        spec: DashboardSpec {
            display: Some(DashboardDisplay {
                name: name.to_string(),
                description: None,
            }),
            rest,
        },
    })
}

const EXAMPLE_QUERY: &str = "SELECT\n  time_bucket($resolution, start_timestamp) AS x,\n  count(1) as y\nFROM records\nGROUP BY x\nORDER BY x";
