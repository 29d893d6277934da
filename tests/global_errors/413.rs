//! tests/global_errors/413.rs
//! Ensures that a payload over MAX_REQUEST_BODY_SIZE triggers 413.

#[path = "../mod.rs"]
mod common;

use std::sync::Arc;

use case_manager::config::environment::EnvironmentVariables;
use case_manager::database::MemoryRepository;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_413_when_payload_exceeds_configured_limit() {
    let env: EnvironmentVariables = EnvironmentVariables {
        max_request_body_size: 1024,
        ..common::test_environment()
    };
    let base_url: String = common::spawn_app_with(env, Arc::new(MemoryRepository::new()));

    // A syntactically valid client whose address alone is over the limit.
    let oversized: String = format!(
        r#"{{"name":"Big","email":"big@firm.law","address":"{}"}}"#,
        "X".repeat(4096)
    );

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/clients", base_url))
        .header("content-type", "application/json")
        .body(oversized)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "PAYLOAD_TOO_LARGE");
    assert_eq!(json["code"], 413);
}
