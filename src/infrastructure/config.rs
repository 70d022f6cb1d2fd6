use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::dashboard::DashboardPermissions;
use crate::domain::errors::PublishError;

pub const API_KEY_VAR: &str = "NEW_RELIC_API_KEY";
pub const ACCOUNT_ID_VAR: &str = "NEW_RELIC_ACCOUNT_ID";

const ENV_PREFIX: &str = "NEW_RELIC";
const CONFIG_FILE: &str = "config/publisher";
/// Relative paths, including this default, resolve against the current working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "dashboards/created-dashboard.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Us,
    Eu,
}

impl Region {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "us" => Some(Self::Us),
            "eu" => Some(Self::Eu),
            _ => None,
        }
    }

    pub fn graphql_endpoint(&self) -> &'static str {
        match self {
            Self::Us => "https://api.newrelic.com/graphql",
            Self::Eu => "https://api.eu.newrelic.com/graphql",
        }
    }

    pub fn viewer_base_url(&self) -> &'static str {
        match self {
            Self::Us => "https://one.newrelic.com",
            Self::Eu => "https://one.eu.newrelic.com",
        }
    }
}

/// Raw values as they arrive from the config sources. Everything is optional
/// here so that missing credentials can be reported together.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    api_key: Option<String>,
    account_id: Option<String>,
    region: Option<String>,
    graphql_endpoint: Option<String>,
    viewer_host: Option<String>,
    dashboard_permissions: Option<String>,
    dashboard_output: Option<String>,
}

#[derive(Clone)]
pub struct PublisherConfig {
    pub api_key: String,
    pub account_id: u64,
    pub graphql_endpoint: String,
    pub viewer_base_url: String,
    pub permissions: DashboardPermissions,
    pub output_path: PathBuf,
}

impl std::fmt::Debug for PublisherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublisherConfig")
            .field("api_key", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("graphql_endpoint", &self.graphql_endpoint)
            .field("viewer_base_url", &self.viewer_base_url)
            .field("permissions", &self.permissions)
            .field("output_path", &self.output_path)
            .finish()
    }
}

/// Load configuration from `config/publisher.*` (optional) and the process environment.
pub fn load_publisher_config() -> Result<PublisherConfig, PublishError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .map_err(|e| PublishError::Configuration(e.to_string()))?;

    resolve(settings)
}

/// Load configuration from an explicit variable map instead of the process environment.
pub fn load_publisher_config_from(vars: &HashMap<String, String>) -> Result<PublisherConfig, PublishError> {
    let source: config::Map<String, String> = vars
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let settings = config::Config::builder()
        .add_source(config::Environment::with_prefix(ENV_PREFIX).source(Some(source)))
        .build()
        .map_err(|e| PublishError::Configuration(e.to_string()))?;

    resolve(settings)
}

fn resolve(settings: config::Config) -> Result<PublisherConfig, PublishError> {
    let raw: RawSettings = settings
        .try_deserialize()
        .map_err(|e| PublishError::Configuration(e.to_string()))?;

    let api_key = non_empty(raw.api_key);
    let account_id = non_empty(raw.account_id);

    let (api_key, account_id) = match (api_key, account_id) {
        (Some(key), Some(account)) => (key, account),
        _ => {
            return Err(PublishError::Configuration(format!(
                "{} and {} environment variables are required",
                API_KEY_VAR, ACCOUNT_ID_VAR
            )));
        }
    };

    let account_id: u64 = account_id.parse().map_err(|_| {
        PublishError::Configuration(format!(
            "{} must be a numeric account id, got '{}'",
            ACCOUNT_ID_VAR, account_id
        ))
    })?;

    let region = match non_empty(raw.region) {
        Some(value) => Region::parse(&value).ok_or_else(|| {
            PublishError::Configuration(format!("Unknown region '{}', expected 'us' or 'eu'", value))
        })?,
        None => Region::default(),
    };

    let permissions = match non_empty(raw.dashboard_permissions) {
        Some(value) => DashboardPermissions::parse(&value).ok_or_else(|| {
            PublishError::Configuration(format!(
                "Unknown dashboard permissions '{}', expected PUBLIC_READ_WRITE, PUBLIC_READ_ONLY or PRIVATE",
                value
            ))
        })?,
        None => DashboardPermissions::default(),
    };

    let graphql_endpoint = non_empty(raw.graphql_endpoint)
        .unwrap_or_else(|| region.graphql_endpoint().to_string());

    let viewer_base_url = match non_empty(raw.viewer_host) {
        Some(host) if host.starts_with("http://") || host.starts_with("https://") => host,
        Some(host) => format!("https://{}", host),
        None => region.viewer_base_url().to_string(),
    };

    let output_path = non_empty(raw.dashboard_output)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

    Ok(PublisherConfig {
        api_key,
        account_id,
        graphql_endpoint,
        viewer_base_url: viewer_base_url.trim_end_matches('/').to_string(),
        permissions,
        output_path,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
