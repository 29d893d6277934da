//! Cross-origin access to the JSON API.

#[path = "../mod.rs"]
mod common;

use reqwest::{Method, StatusCode};

const ORIGIN: &str = "http://frontend.example";

#[tokio::test]
async fn preflight_allows_any_origin() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .request(Method::OPTIONS, format!("{}/api/clients", base_url))
        .header("Origin", ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    assert!(resp.headers().contains_key("access-control-allow-methods"));
    assert!(resp.headers().contains_key("access-control-allow-headers"));
}

#[tokio::test]
async fn api_responses_carry_the_allow_origin_header() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/clients", base_url))
        .header("Origin", ORIGIN)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}
