//! GG probe - Main Entry Point
//!
//! Discovers a GG sub-application and prints the JSON it returns for one path.

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use steelseries_gg::config::Settings;
use steelseries_gg::services::HubSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with RUST_LOG environment variable support
    // Default: info level for steelseries_gg, warn for everything else
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,steelseries_gg=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr))
        .init();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}, using defaults", e);
        Settings::default()
    });

    info!("Starting gg-probe v{}", env!("CARGO_PKG_VERSION"));

    let mut session = HubSession::with_dir(settings.hub.props_dir())
        .with_transport_options(settings.transport.options());

    let client = session
        .sub_app_client(&settings.probe.sub_app, None)
        .await
        .with_context(|| format!("Failed to resolve sub-app {}", settings.probe.sub_app))?;

    info!("{} is at {}", settings.probe.sub_app, client.endpoint());

    let body: serde_json::Value = client
        .get_json(&settings.probe.path)
        .await
        .with_context(|| format!("Failed to query {}", client.url(&settings.probe.path)))?;

    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
