//! Push and pull: create-or-update on top of [`LogfireClient`].
//!
//! Push probes for the target slug and then creates or updates. Probe and
//! write are two requests, so a dashboard created by someone else in between
//! makes the create fail with [`ClientError::Conflict`]; pushing again
//! resolves it.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::client::LogfireClient;
use crate::document::load_definition;
use crate::error::{ClientError, Result};
use crate::models::{Dashboard, DashboardDefinition, Probe};
use crate::slug::{Slug, slugify};

/// What a push did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PushAction {
    Created,
    Updated,
}

impl fmt::Display for PushAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Updated => f.write_str("updated"),
        }
    }
}

/// Result of a successful push.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PushOutcome {
    pub slug: Slug,
    pub action: PushAction,
    pub dashboard: Dashboard,
}

/// Slug a definition will be pushed under: the validated override, or
/// `metadata.name` slugified.
pub fn target_slug(definition: &DashboardDefinition, slug_override: Option<&str>) -> Result<Slug> {
    match slug_override {
        Some(slug) => Slug::parse(slug),
        None => slugify(&definition.metadata.name),
    }
}

/// Create the dashboard if its slug is free, otherwise update it.
///
/// Errors from the existence probe other than not-found are returned
/// unchanged; they never imply the dashboard is missing.
pub async fn push(
    client: &LogfireClient,
    definition: &DashboardDefinition,
    slug_override: Option<&str>,
) -> Result<PushOutcome> {
    if definition.metadata.name.trim().is_empty() {
        return Err(ClientError::Validation(
            "metadata.name must not be empty".to_string(),
        ));
    }
    let slug = target_slug(definition, slug_override)?;

    let action = match client.probe_dashboard(slug.as_str()).await? {
        Probe::Found(_) => PushAction::Updated,
        Probe::NotFound => PushAction::Created,
    };
    debug!(slug = %slug, %action, "Resolved push action");

    let dashboard = match action {
        PushAction::Updated => client.update_dashboard(slug.as_str(), definition).await?,
        PushAction::Created => client.create_dashboard(slug.as_str(), definition).await?,
    };

    info!(slug = %slug, %action, "Pushed dashboard");
    Ok(PushOutcome {
        slug,
        action,
        dashboard,
    })
}

/// Load a YAML document and push it.
///
/// Structural problems in the file fail with [`ClientError::Validation`]
/// before any request is sent.
pub async fn push_file(
    client: &LogfireClient,
    path: &Path,
    slug_override: Option<&str>,
) -> Result<PushOutcome> {
    let definition = load_definition(path)?;
    push(client, &definition, slug_override).await
}

/// Fetch a dashboard's definition for writing back to disk.
pub async fn pull(client: &LogfireClient, slug: &str) -> Result<DashboardDefinition> {
    client.get_dashboard(slug).await
}
