//! Dashboard API methods for [`LogfireClient`].
//!
//! # What this module handles:
//! - Listing, fetching, creating, updating and deleting dashboards
//! - The existence probe used by push
//!
//! # What this module does NOT handle:
//! - Low-level dashboard endpoint HTTP calls (in [`crate::endpoints`])

use secrecy::ExposeSecret;

use crate::client::LogfireClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{Dashboard, DashboardDefinition, ListDashboardsResult, Probe};
use crate::slug::Slug;

impl LogfireClient {
    /// List all dashboards in the project, in server order.
    pub async fn list_dashboards(&self) -> Result<ListDashboardsResult> {
        endpoints::list_dashboards(
            &self.http,
            &self.project_url,
            self.token.expose_secret(),
            self.timeout,
        )
        .await
    }

    /// Get a dashboard's definition by slug.
    ///
    /// Fails with [`ClientError::InvalidInput`] before any request if the
    /// slug is empty or malformed.
    pub async fn get_dashboard(&self, slug: &str) -> Result<DashboardDefinition> {
        let slug = Slug::parse(slug)?;
        endpoints::get_dashboard(
            &self.http,
            &self.project_url,
            self.token.expose_secret(),
            slug.as_str(),
            self.timeout,
        )
        .await
    }

    /// Create a dashboard. A slug that already exists yields [`ClientError::Conflict`].
    pub async fn create_dashboard(
        &self,
        slug: &str,
        definition: &DashboardDefinition,
    ) -> Result<Dashboard> {
        let slug = Slug::parse(slug)?;
        endpoints::create_dashboard(
            &self.http,
            &self.project_url,
            self.token.expose_secret(),
            slug.as_str(),
            definition,
            self.timeout,
        )
        .await
    }

    /// Replace an existing dashboard's definition.
    pub async fn update_dashboard(
        &self,
        slug: &str,
        definition: &DashboardDefinition,
    ) -> Result<Dashboard> {
        let slug = Slug::parse(slug)?;
        endpoints::update_dashboard(
            &self.http,
            &self.project_url,
            self.token.expose_secret(),
            slug.as_str(),
            definition,
            self.timeout,
        )
        .await
    }

    /// Delete a dashboard. A missing slug is [`ClientError::NotFound`], never success.
    pub async fn delete_dashboard(&self, slug: &str) -> Result<()> {
        let slug = Slug::parse(slug)?;
        endpoints::delete_dashboard(
            &self.http,
            &self.project_url,
            self.token.expose_secret(),
            slug.as_str(),
            self.timeout,
        )
        .await
    }

    /// Check whether a dashboard exists.
    ///
    /// Only a 404 becomes [`Probe::NotFound`]; every other failure is returned
    /// as an error and says nothing about existence.
    pub async fn probe_dashboard(&self, slug: &str) -> Result<Probe> {
        match self.get_dashboard(slug).await {
            Ok(definition) => Ok(Probe::Found(Box::new(definition))),
            Err(ClientError::NotFound { .. }) => Ok(Probe::NotFound),
            Err(e) => Err(e),
        }
    }
}
