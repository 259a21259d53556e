//! Huginn API binary entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huginn_adapter_sim::SimulatorBackend;
use huginn_api::{ApiConfig, AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huginn_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create configuration
    let mut config = ApiConfig::default();
    if let Ok(bind) = std::env::var("HUGINN_BIND") {
        config.bind_address = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid HUGINN_BIND address '{bind}': {e}"))?;
    }
    let bind_addr = config.bind_address;

    // Create application state and register the local simulator
    let state = Arc::new(AppState::with_config(config));
    state.register_backend(Arc::new(SimulatorBackend::new())).await;
    tracing::info!("Registered simulator backend");

    // Create the router
    let app = create_router(state);

    // Start the server
    tracing::info!("Starting Huginn API at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
