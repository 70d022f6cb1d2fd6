// Gateway trait for the remote dashboard platform
use crate::domain::dashboard::DashboardDefinition;
use crate::domain::errors::PublishError;
use crate::domain::publish_result::CreateOutcome;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardGateway: Send + Sync {
    /// Submit a single create request scoped to `account_id`.
    ///
    /// Rejections reported by the platform come back as `Ok` with a tagged
    /// outcome; only transport failures are returned as `Err`.
    async fn create_dashboard(
        &self,
        account_id: u64,
        dashboard: DashboardDefinition,
    ) -> Result<CreateOutcome, PublishError>;
}
