// Publisher service - Use case for creating the dashboard and recording it locally
use crate::application::dashboard_catalog::nrdot_process_dashboard;
use crate::application::dashboard_gateway::DashboardGateway;
use crate::domain::errors::PublishError;
use crate::domain::publish_result::{CreateOutcome, DashboardSummary};
use crate::infrastructure::config::PublisherConfig;
use crate::infrastructure::summary_file::write_summary;
use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;
use std::sync::Arc;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReport {
    pub summary: DashboardSummary,
    pub output_path: PathBuf,
}

#[derive(Clone)]
pub struct DashboardPublisher {
    config: PublisherConfig,
    gateway: Arc<dyn DashboardGateway>,
}

impl DashboardPublisher {
    pub fn new(config: PublisherConfig, gateway: Arc<dyn DashboardGateway>) -> Self {
        Self { config, gateway }
    }

    pub async fn publish(&self) -> Result<PublishReport, PublishError> {
        let account_id = self.config.account_id;
        let dashboard = nrdot_process_dashboard(account_id, self.config.permissions);
        dashboard
            .validate(account_id)
            .map_err(PublishError::Configuration)?;

        tracing::info!(
            "Creating dashboard '{}' in account {} ({} pages, {} widgets)",
            dashboard.name,
            account_id,
            dashboard.pages.len(),
            dashboard.widgets().count()
        );

        let created = match self.gateway.create_dashboard(account_id, dashboard).await? {
            CreateOutcome::Created(created) => created,
            CreateOutcome::ProtocolRejected(errors) => return Err(PublishError::Protocol(errors)),
            CreateOutcome::DomainRejected(errors) => return Err(PublishError::Domain(errors)),
        };

        tracing::info!("Dashboard created: guid={} name={}", created.guid, created.name);

        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let summary = DashboardSummary::new(&created, &self.config.viewer_base_url, created_at);
        write_summary(&self.config.output_path, &summary).await?;

        tracing::info!("Dashboard URL: {}", summary.url);

        Ok(PublishReport {
            summary,
            output_path: self.config.output_path.clone(),
        })
    }
}
