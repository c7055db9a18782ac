//! chatterd - a small framed-text chat daemon.

use chatterd::config::Config;
use chatterd::handlers::Registry;
use chatterd::network::Gateway;
use chatterd::state::Hub;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        server = %config.server.name,
        listen = %config.listen.address,
        "Starting chatterd"
    );

    let hub = Arc::new(Hub::new());
    let registry = Arc::new(Registry::new());

    let gateway = Gateway::bind(config.listen.address, hub, registry).await?;

    gateway.run().await?;

    Ok(())
}
