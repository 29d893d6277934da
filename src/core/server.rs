// Application server configuration and setup

use std::{path::Path, sync::Arc, time::Duration};
use axum::{
    Router,
    middleware::from_fn,
    routing::get,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::Result;
use tracing::{error, info};

use crate::api::{api_routes, health::routes::health_routes};
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::shell::shell_handler;
use crate::utils::{
    error_handler::handle_global_error,
    response_handler::response_wrapper,
};

/// Creates and configures the application router with all middleware layers.
///
/// `/health` and `/api/*` are JSON and wrapped in the response envelope,
/// `/static/*` serves files from `STATIC_DIR` when it exists, and every other
/// path goes to the application shell.
pub fn create_app(state: AppState) -> Router {
    let env: Arc<EnvironmentVariables> = state.environment.clone();
    let timeout: Duration = Duration::from_secs(env.default_timeout_seconds);

    let api: Router<AppState> = Router::new()
        .merge(health_routes())
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(response_wrapper))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(timeout))
                .layer(DefaultBodyLimit::max(env.max_request_body_size))
        )
        .layer(CorsLayer::permissive());

    // Pages answer GET and HEAD; other methods get 405
    let shell: Router<AppState> = Router::new()
        .fallback(get(shell_handler))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(timeout))
        );

    let mut app: Router<AppState> = api.merge(shell);

    let static_dir: &Path = Path::new(&*env.static_dir);
    if static_dir.is_dir() {
        info!("Serving static assets from {}", static_dir.display());
        app = app.nest_service("/static", ServeDir::new(static_dir));
    }

    app.layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install TERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}
