// Outcome of a dashboard creation request
use serde::{Deserialize, Serialize};

/// Dashboard entity as returned by the platform after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedDashboard {
    pub guid: String,
    pub name: String,
    pub account_id: u64,
    pub permissions: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub parent_guid: Option<String>,
}

/// GraphQL protocol error (malformed query, rejected credentials, ...).
/// Keys beyond the typed ones (`locations`, vendor additions) are kept in
/// `extra` so the error re-serializes as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProtocolErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            extensions: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Validation error reported by the mutation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainErrorDetail {
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

/// Tagged result of the two response gates.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created(CreatedDashboard),
    ProtocolRejected(Vec<ProtocolErrorDetail>),
    DomainRejected(Vec<DomainErrorDetail>),
}

/// Summary persisted after a successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub guid: String,
    pub name: String,
    pub account_id: u64,
    pub created_at: String,
    pub url: String,
}

impl DashboardSummary {
    pub fn new(dashboard: &CreatedDashboard, viewer_base_url: &str, created_at: String) -> Self {
        Self {
            guid: dashboard.guid.clone(),
            name: dashboard.name.clone(),
            account_id: dashboard.account_id,
            created_at,
            url: viewer_url(viewer_base_url, &dashboard.guid),
        }
    }
}

pub fn viewer_url(viewer_base_url: &str, guid: &str) -> String {
    format!("{}/dashboards/{}", viewer_base_url.trim_end_matches('/'), guid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_url() {
        assert_eq!(
            viewer_url("https://one.newrelic.com/", "abc123"),
            "https://one.newrelic.com/dashboards/abc123"
        );
    }

    #[test]
    fn test_summary_serializes_camel_case_in_order() {
        let created = CreatedDashboard {
            guid: "abc123".to_string(),
            name: "Demo".to_string(),
            account_id: 12345,
            permissions: None,
            created_at: None,
            updated_at: None,
            parent_guid: None,
        };
        let summary = DashboardSummary::new(
            &created,
            "https://one.newrelic.com",
            "2026-01-01T00:00:00.000Z".to_string(),
        );

        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"guid":"abc123","name":"Demo","accountId":12345,"createdAt":"2026-01-01T00:00:00.000Z","url":"https://one.newrelic.com/dashboards/abc123"}"#
        );
    }

    #[test]
    fn test_domain_error_uses_type_tag() {
        let detail: DomainErrorDetail = serde_json::from_value(serde_json::json!({
            "description": "Invalid permissions",
            "type": "INVALID_INPUT"
        }))
        .unwrap();
        assert_eq!(detail.error_type.as_deref(), Some("INVALID_INPUT"));
    }

    #[test]
    fn test_domain_error_tolerates_missing_type() {
        let detail: DomainErrorDetail =
            serde_json::from_value(serde_json::json!({ "description": "Too many widgets" })).unwrap();
        assert_eq!(detail.error_type, None);
    }

    #[test]
    fn test_protocol_error_keeps_unknown_keys() {
        let raw = serde_json::json!({
            "message": "Syntax Error",
            "locations": [{ "line": 2, "column": 3 }],
            "extensions": { "errorClass": "BAD_REQUEST" }
        });
        let detail: ProtocolErrorDetail = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(detail.message, "Syntax Error");
        assert_eq!(serde_json::to_value(&detail).unwrap(), raw);
    }
}
