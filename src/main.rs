// Main entry point - Publish the dashboard and map the outcome to an exit status
use std::process::ExitCode;

use newrelic_dashboard_publisher::infrastructure::telemetry::init_tracing;
use newrelic_dashboard_publisher::{publish, PublishError};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing("info") {
        eprintln!("{:#}", e);
    }

    match publish().await {
        Ok(report) => {
            tracing::info!("Dashboard info saved to {}", report.output_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&err);
            err.exit_code()
        }
    }
}

fn report_failure(err: &PublishError) {
    tracing::error!("{}", err);
    match err {
        PublishError::Protocol(_) => {
            if let Some(details) = err.details_json() {
                tracing::error!("GraphQL errors: {}", details);
            }
        }
        PublishError::Domain(_) => {
            if let Some(details) = err.details_json() {
                tracing::error!("Dashboard creation errors: {}", details);
            }
        }
        PublishError::Transport { .. } => {
            if let Some(body) = err.details_json() {
                tracing::error!("Response body: {}", body);
            }
        }
        PublishError::Configuration(_) | PublishError::Output { .. } => {}
    }
}
