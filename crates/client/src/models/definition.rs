//! Perses dashboard documents as authored locally and stored by Logfire.
//!
//! Only the envelope (`kind`, `metadata`, `spec.display`) is typed; the rest
//! of `spec` (panels, layouts, variables, ...) passes through untouched in
//! document order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resource kind every dashboard document must carry.
pub const DASHBOARD_KIND: &str = "Dashboard";

/// A complete dashboard document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDefinition {
    pub kind: String,
    pub metadata: DashboardMetadata,
    pub spec: DashboardSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(
        rename = "updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
    /// Any other metadata keys, kept so pull/push does not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DashboardMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project: None,
            version: None,
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDisplay {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DashboardDisplay>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl DashboardDefinition {
    /// Human-facing title: `spec.display.name`, falling back to `metadata.name`.
    pub fn display_name(&self) -> &str {
        self.spec
            .display
            .as_ref()
            .map(|d| d.name.as_str())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.metadata.name)
    }

    /// Number of entries under `spec.panels`.
    pub fn panel_count(&self) -> usize {
        self.spec
            .rest
            .get("panels")
            .and_then(Value::as_object)
            .map_or(0, Map::len)
    }
}
