// Error taxonomy for a publish run
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use super::publish_result::{DomainErrorDetail, ProtocolErrorDetail};

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("GraphQL request rejected: {}", protocol_messages(.0))]
    Protocol(Vec<ProtocolErrorDetail>),

    #[error("Dashboard rejected: {}", domain_messages(.0))]
    Domain(Vec<DomainErrorDetail>),

    #[error("Request to {endpoint} failed: {message}")]
    Transport {
        endpoint: String,
        message: String,
        body: Option<String>,
    },

    #[error("Failed to write dashboard summary to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PublishError {
    /// Every failure is terminal for the run.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }

    /// Structured detail suitable for logging verbatim, when the platform supplied one.
    pub fn details_json(&self) -> Option<String> {
        match self {
            Self::Protocol(errors) => serde_json::to_string(errors).ok(),
            Self::Domain(errors) => serde_json::to_string(errors).ok(),
            Self::Transport { body, .. } => body.clone(),
            _ => None,
        }
    }
}

fn protocol_messages(errors: &[ProtocolErrorDetail]) -> String {
    errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; ")
}

fn domain_messages(errors: &[DomainErrorDetail]) -> String {
    errors
        .iter()
        .map(|e| match &e.error_type {
            Some(error_type) => format!("{} ({})", e.description, error_type),
            None => e.description.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
