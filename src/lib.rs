//! Publishes the NRDOT process optimization dashboard to New Relic through a
//! single NerdGraph `dashboardCreate` mutation and records the created entity
//! in `dashboards/created-dashboard.json`.
//!
//! Configuration comes from `NEW_RELIC_API_KEY` and `NEW_RELIC_ACCOUNT_ID`
//! (both required), with optional `NEW_RELIC_REGION`,
//! `NEW_RELIC_GRAPHQL_ENDPOINT`, `NEW_RELIC_VIEWER_HOST`,
//! `NEW_RELIC_DASHBOARD_PERMISSIONS` and `NEW_RELIC_DASHBOARD_OUTPUT`.
pub mod application;
pub mod domain;
pub mod infrastructure;

use std::collections::HashMap;
use std::sync::Arc;

pub use crate::application::publisher::{DashboardPublisher, PublishReport};
pub use crate::domain::errors::PublishError;

use crate::infrastructure::config::{load_publisher_config, load_publisher_config_from, PublisherConfig};
use crate::infrastructure::nerdgraph_client::NerdGraphClient;

/// Create the dashboard using configuration from the process environment.
pub async fn publish() -> Result<PublishReport, PublishError> {
    let config = load_publisher_config()?;
    publish_with_config(config).await
}

/// Same as [`publish`], reading configuration from `vars` instead of the process environment.
pub async fn publish_with_vars(vars: &HashMap<String, String>) -> Result<PublishReport, PublishError> {
    let config = load_publisher_config_from(vars)?;
    publish_with_config(config).await
}

async fn publish_with_config(config: PublisherConfig) -> Result<PublishReport, PublishError> {
    tracing::debug!("Loaded configuration: {:?}", config);
    let gateway = Arc::new(NerdGraphClient::new(
        config.graphql_endpoint.clone(),
        config.api_key.clone(),
    ));
    DashboardPublisher::new(config, gateway).publish().await
}
