//! Data models for the Logfire dashboards API and local dashboard documents.

pub mod dashboards;
pub mod definition;

pub use dashboards::{
    Dashboard, DashboardSummary, GetDashboardResponse, ListDashboardsResult, Probe,
};
pub use definition::{
    DASHBOARD_KIND, DashboardDefinition, DashboardDisplay, DashboardMetadata, DashboardSpec,
};
