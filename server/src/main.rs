use server::config::{Configuration, load_config};
use server::logging::init_logging;
use server::{AppState, build_generation_client, get_app};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let _guard = init_logging(&config)?;
    info!("Starting AI-Powered Customer Support Email Generator");

    if let Err(e) = &loaded {
        error!("Failed to load configuration: {}", e);
    }

    let generation_client = build_generation_client(&config);
    let state = Arc::new(AppState::new(&config, generation_client));
    let app = get_app(state);

    let address = config.bind_address();
    info!("Routes configured, binding to {}", address);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Server running at http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
