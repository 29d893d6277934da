//! tests/global_errors/422.rs
//! Malformed bodies are rejected by extraction, broken references by storage.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn returns_422_for_body_missing_required_fields() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/clients", base_url))
        .json(&json!({ "name": "No email" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "UNPROCESSABLE_ENTITY");
    // The extractor's explanation is kept as a message.
    assert!(!json["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn returns_422_for_case_of_unknown_client() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/cases", base_url))
        .json(&json!({ "client_id": uuid::Uuid::new_v4(), "case_name": "Orphan" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["data"]["error"], "missing_reference");
}

#[tokio::test]
async fn returns_400_for_malformed_uuid() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/clients/not-a-uuid", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["code"], 400);
}
