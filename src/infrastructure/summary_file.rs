// Persist the dashboard summary as pretty-printed JSON
use std::path::Path;

use crate::domain::errors::PublishError;
use crate::domain::publish_result::DashboardSummary;

/// Write `summary` to `path`, replacing any previous file.
pub async fn write_summary(path: &Path, summary: &DashboardSummary) -> Result<(), PublishError> {
    let output_error = |source: std::io::Error| PublishError::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(output_error)?;
    }

    let mut contents = serde_json::to_string_pretty(summary)
        .map_err(|e| output_error(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    contents.push('\n');

    tokio::fs::write(path, contents).await.map_err(output_error)?;
    tracing::debug!("Wrote dashboard summary to {}", path.display());
    Ok(())
}
