// Start of file: src/main.rs

use std::sync::Arc;

use axum::{serve, Router};
use tokio::net::TcpListener;
use tracing::info;

use case_manager::config::{environment::EnvironmentVariables, state::AppState};
use case_manager::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let environment: Arc<EnvironmentVariables> = Arc::new(EnvironmentVariables::load()?);
    info!(
        environment = %environment.environment,
        storage = %environment.storage_backend,
        "Starting case manager"
    );

    let state: AppState = AppState::from_env(environment.clone()).await?;
    let app: Router = server::create_app(state.clone());

    let listener: TcpListener = server::setup_listener(&environment).await?;
    info!("Server listening on: {}://{}", environment.protocol, listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    // Gracefully close storage connections
    state.shutdown().await;
    Ok(())
}

// End of file: src/main.rs
