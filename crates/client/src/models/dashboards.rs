//! Dashboard resources as returned by the Logfire UI API.
//!
//! Create and update answer with an envelope carrying server-assigned
//! identity and audit fields; `dashboard_slug` and `dashboard_name` are
//! exposed here as `slug` and `name`. A plain GET answers with the bare
//! definition under `dashboard` and nothing else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::definition::DashboardDefinition;

/// A dashboard stored in a Logfire project, as returned by create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(rename(deserialize = "dashboard_slug"))]
    pub slug: String,
    #[serde(rename(deserialize = "dashboard_name"))]
    pub name: String,
    pub definition: DashboardDefinition,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by_name: String,
    #[serde(default)]
    pub updated_by_name: Option<String>,
}

/// Body of `GET .../dashboards/{slug}/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetDashboardResponse {
    pub dashboard: DashboardDefinition,
}

/// One row of the dashboard listing (no definition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(rename(deserialize = "dashboard_slug"))]
    pub slug: String,
    #[serde(rename(deserialize = "dashboard_name"))]
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by_name: String,
    #[serde(default)]
    pub updated_by_name: Option<String>,
}

impl DashboardSummary {
    /// Most recent modification time: `updated_at` when present, else `created_at`.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// Dashboard listing in the order the server returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListDashboardsResult {
    pub dashboards: Vec<DashboardSummary>,
}

impl ListDashboardsResult {
    pub fn len(&self) -> usize {
        self.dashboards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dashboards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DashboardSummary> {
        self.dashboards.iter()
    }
}

impl IntoIterator for ListDashboardsResult {
    type Item = DashboardSummary;
    type IntoIter = std::vec::IntoIter<DashboardSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.dashboards.into_iter()
    }
}

impl<'a> IntoIterator for &'a ListDashboardsResult {
    type Item = &'a DashboardSummary;
    type IntoIter = std::slice::Iter<'a, DashboardSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.dashboards.iter()
    }
}

/// Outcome of an existence check.
#[derive(Debug, Clone, PartialEq)]
pub enum Probe {
    Found(Box<DashboardDefinition>),
    NotFound,
}
