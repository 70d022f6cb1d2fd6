// NerdGraph request/response envelopes for the dashboardCreate mutation
use serde::{Deserialize, Serialize};

use crate::domain::publish_result::{
    CreateOutcome, CreatedDashboard, DomainErrorDetail, ProtocolErrorDetail,
};
use crate::infrastructure::nerdgraph_mapper::DashboardInput;

/// Build the mutation text. The account id is inlined as the scoping argument;
/// the dashboard itself travels as the `$dashboard` variable.
pub fn dashboard_create_mutation(account_id: u64) -> String {
    format!(
        r#"mutation CreateDashboard($dashboard: DashboardInput!) {{
  dashboardCreate(accountId: {account_id}, dashboard: $dashboard) {{
    entityResult {{
      guid
      name
      accountId
      permissions
      createdAt
      updatedAt
      parent {{
        guid
      }}
    }}
    errors {{
      description
      type
    }}
  }}
}}"#
    )
}

#[derive(Debug, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: DashboardVariables,
}

#[derive(Debug, Serialize)]
pub struct DashboardVariables {
    pub dashboard: DashboardInput,
}

impl GraphQlRequest {
    pub fn dashboard_create(account_id: u64, dashboard: DashboardInput) -> Self {
        Self {
            query: dashboard_create_mutation(account_id),
            variables: DashboardVariables { dashboard },
        }
    }
}

/// Top-level envelope. `data` stays untyped so that a response carrying
/// protocol errors next to partial data is still read through gate one.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<ProtocolErrorDetail>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCreatePayload {
    #[serde(default)]
    pub entity_result: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<DomainErrorDetail>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityResult {
    pub guid: String,
    pub name: String,
    pub account_id: u64,
    #[serde(default)]
    pub permissions: Option<String>,
    #[serde(default)]
    pub created_at: Option<serde_json::Value>,
    #[serde(default)]
    pub updated_at: Option<serde_json::Value>,
    #[serde(default)]
    pub parent: Option<ParentEntity>,
}

#[derive(Debug, Deserialize)]
pub struct ParentEntity {
    #[serde(default)]
    pub guid: Option<String>,
}

/// A response that passed neither gate nor carried a created entity.
#[derive(Debug, PartialEq)]
pub struct MalformedResponse(pub String);

/// Gate one: protocol-level errors reported by the GraphQL layer.
fn check_protocol(response: GraphQlResponse) -> Result<Option<serde_json::Value>, Vec<ProtocolErrorDetail>> {
    match response.errors {
        Some(errors) if !errors.is_empty() => Err(errors),
        _ => Ok(response.data),
    }
}

/// Gate two: validation errors reported by the mutation.
fn check_domain(payload: DashboardCreatePayload) -> Result<Option<serde_json::Value>, Vec<DomainErrorDetail>> {
    match payload.errors {
        Some(errors) if !errors.is_empty() => Err(errors),
        _ => Ok(payload.entity_result),
    }
}

/// Run both gates in order and tag the result.
pub fn interpret(response: GraphQlResponse) -> Result<CreateOutcome, MalformedResponse> {
    let data = match check_protocol(response) {
        Ok(data) => data,
        Err(errors) => return Ok(CreateOutcome::ProtocolRejected(errors)),
    };

    let payload = data
        .and_then(|mut d| d.get_mut("dashboardCreate").map(serde_json::Value::take))
        .filter(|p| !p.is_null())
        .ok_or_else(|| MalformedResponse("response has no data.dashboardCreate".to_string()))?;
    let payload: DashboardCreatePayload = serde_json::from_value(payload)
        .map_err(|e| MalformedResponse(format!("invalid dashboardCreate payload: {}", e)))?;

    let entity = match check_domain(payload) {
        Ok(entity) => entity,
        Err(errors) => return Ok(CreateOutcome::DomainRejected(errors)),
    };

    let entity = entity.filter(|e| !e.is_null()).ok_or_else(|| {
        MalformedResponse("dashboardCreate returned neither entityResult nor errors".to_string())
    })?;
    let entity: EntityResult = serde_json::from_value(entity)
        .map_err(|e| MalformedResponse(format!("invalid entityResult: {}", e)))?;

    Ok(CreateOutcome::Created(entity.into_domain()))
}

impl EntityResult {
    fn into_domain(self) -> CreatedDashboard {
        CreatedDashboard {
            guid: self.guid,
            name: self.name,
            account_id: self.account_id,
            permissions: self.permissions,
            created_at: self.created_at.map(timestamp_text),
            updated_at: self.updated_at.map(timestamp_text),
            parent_guid: self.parent.and_then(|p| p.guid),
        }
    }
}

// NerdGraph reports timestamps either as epoch millis or as strings.
fn timestamp_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
