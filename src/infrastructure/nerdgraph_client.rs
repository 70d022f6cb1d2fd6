// NerdGraph client implementation
use crate::application::dashboard_gateway::DashboardGateway;
use crate::domain::dashboard::DashboardDefinition;
use crate::domain::errors::PublishError;
use crate::domain::publish_result::CreateOutcome;
use crate::infrastructure::graphql::{interpret, GraphQlRequest, GraphQlResponse};
use crate::infrastructure::nerdgraph_mapper::dashboard_to_input;
use async_trait::async_trait;

#[derive(Clone)]
pub struct NerdGraphClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl NerdGraphClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn transport_error(&self, message: impl Into<String>, body: Option<String>) -> PublishError {
        PublishError::Transport {
            endpoint: self.endpoint.clone(),
            message: message.into(),
            body,
        }
    }
}

#[async_trait]
impl DashboardGateway for NerdGraphClient {
    async fn create_dashboard(
        &self,
        account_id: u64,
        dashboard: DashboardDefinition,
    ) -> Result<CreateOutcome, PublishError> {
        let request = GraphQlRequest::dashboard_create(account_id, dashboard_to_input(dashboard));

        tracing::debug!("Sending dashboardCreate mutation to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("API-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(format!("Failed to send request: {}", e), None))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(format!("Failed to read response body: {}", e), None))?;

        // A rejected request may still carry a GraphQL errors array worth surfacing.
        let parsed = serde_json::from_str::<GraphQlResponse>(&body);

        let envelope = match parsed {
            Ok(envelope) if status.is_success() => envelope,
            Ok(envelope) if envelope.errors.as_ref().is_some_and(|e| !e.is_empty()) => {
                tracing::debug!("NerdGraph returned status {} with GraphQL errors", status);
                envelope
            }
            Ok(_) => {
                return Err(self.transport_error(format!("Request failed with status {}", status), Some(body)));
            }
            Err(e) if status.is_success() => {
                return Err(self.transport_error(format!("Failed to parse NerdGraph response: {}", e), Some(body)));
            }
            Err(_) => {
                return Err(self.transport_error(format!("Request failed with status {}", status), Some(body)));
            }
        };

        interpret(envelope).map_err(|malformed| self.transport_error(malformed.0, Some(body)))
    }
}
