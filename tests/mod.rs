//! tests/mod.rs
//! Shared helpers: spawn the full app on an ephemeral port and seed data through the API.
#![allow(dead_code)]

use std::borrow::Cow;
use std::sync::Arc;

use axum::{serve, Router};
use case_manager::config::environment::{EnvironmentVariables, StorageBackend};
use case_manager::config::state::AppState;
use case_manager::core::server::create_app;
use case_manager::database::{CaseRepository, MemoryRepository};
use serde_json::{json, Value};
use tokio::net::TcpListener as TokioTcpListener;

/// Configuration used by every test server: in-memory storage and no static directory.
pub fn test_environment() -> EnvironmentVariables {
    EnvironmentVariables {
        storage_backend: StorageBackend::Memory,
        static_dir: Cow::Borrowed("target/no-static-assets"),
        ..EnvironmentVariables::default()
    }
}

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app() -> String {
    spawn_app_with(test_environment(), Arc::new(MemoryRepository::new()))
}

pub fn spawn_app_with(env: EnvironmentVariables, repository: Arc<dyn CaseRepository>) -> String {
    let state: AppState = AppState::new(Arc::new(env), repository);
    let app: Router = create_app(state);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}

/// Creates a client through the API and returns the envelope's `data`.
pub async fn create_client(base_url: &str, name: &str, email: &str) -> Value {
    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/clients", base_url))
        .json(&json!({ "name": name, "email": email }))
        .send()
        .await
        .expect("Failed to create client");
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

    let body: Value = resp.json().await.unwrap();
    body["data"].clone()
}

/// Creates a case for `client_id` and returns the envelope's `data`.
pub async fn create_case(base_url: &str, client_id: &str, name: &str, status: &str) -> Value {
    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/cases", base_url))
        .json(&json!({ "client_id": client_id, "case_name": name, "status": status }))
        .send()
        .await
        .expect("Failed to create case");
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

    let body: Value = resp.json().await.unwrap();
    body["data"].clone()
}
