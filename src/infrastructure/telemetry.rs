// Tracing subscriber setup
use tracing_subscriber::EnvFilter;

/// Initialize the fmt subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {}", e))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))
}
