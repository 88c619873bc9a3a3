//! REST API endpoint implementations.
//!
//! Free functions taking the HTTP client, the project URL and the token;
//! [`crate::LogfireClient`] wraps them with input validation.

mod dashboards;
pub mod request;
pub mod url_encoding;

pub use dashboards::{
    collection_url, create_dashboard, delete_dashboard, get_dashboard, list_dashboards,
    resource_url, update_dashboard,
};
pub use request::send_request;
