//! Document metadata attached to cases.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn attach_list_and_delete_documents() {
    let base_url: String = common::spawn_app();
    let http: reqwest::Client = reqwest::Client::new();
    let client: Value = common::create_client(&base_url, "Marlow", "marlow@firm.law").await;
    let case: Value = common::create_case(&base_url, client["id"].as_str().unwrap(), "Estate of Marlow", "open").await;
    let case_id: &str = case["id"].as_str().unwrap();

    let resp: reqwest::Response = http
        .post(format!("{}/api/cases/{}/documents", base_url, case_id))
        .json(&json!({ "file_name": "will.pdf", "file_path": "/docs/marlow/will.pdf" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let document: Value = resp.json::<Value>().await.unwrap()["data"].clone();
    assert_eq!(document["case_id"], case["id"]);
    assert!(document["uploaded_at"].is_string());

    let json: Value = http
        .get(format!("{}/api/cases/{}/documents", base_url, case_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let resp: reqwest::Response = http
        .delete(format!("{}/api/documents/{}", base_url, document["id"].as_str().unwrap()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp: reqwest::Response = http
        .delete(format!("{}/api/documents/{}", base_url, document["id"].as_str().unwrap()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn documents_of_unknown_case_return_404() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/cases/{}/documents", base_url, uuid::Uuid::new_v4()))
        .json(&json!({ "file_name": "x.pdf", "file_path": "/x.pdf" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn documents_require_name_and_path() {
    let base_url: String = common::spawn_app();
    let client: Value = common::create_client(&base_url, "Marlow", "marlow@firm.law").await;
    let case: Value = common::create_case(&base_url, client["id"].as_str().unwrap(), "Estate of Marlow", "open").await;

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/cases/{}/documents", base_url, case["id"].as_str().unwrap()))
        .json(&json!({ "file_name": "will.pdf", "file_path": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
