//! tests/global_errors/500.rs
//! A storage backend that always fails: API answers 500 without leaking
//! details, health reports 503 and the shell renders its error page.

#[path = "../mod.rs"]
mod common;

use std::sync::Arc;

use async_trait::async_trait;
use case_manager::database::{CaseRepository, RepositoryError, RepositoryResult};
use case_manager::models::{
    Case, CaseCreate, CaseFilter, CaseUpdate, Client, ClientCreate, ClientUpdate, Document,
    DocumentCreate, Pagination, Task, TaskCreate, TaskUpdate,
};
use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug)]
struct BrokenStorage;

fn broken<T>() -> RepositoryResult<T> {
    Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl CaseRepository for BrokenStorage {
    fn backend(&self) -> &'static str {
        "broken"
    }
    async fn initialize(&self) -> RepositoryResult<()> {
        broken()
    }
    async fn ping(&self) -> RepositoryResult<()> {
        broken()
    }
    async fn shutdown(&self) {}
    async fn list_clients(&self, _page: Pagination) -> RepositoryResult<Vec<Client>> {
        broken()
    }
    async fn get_client(&self, _id: Uuid) -> RepositoryResult<Client> {
        broken()
    }
    async fn clients_by_ids(&self, _ids: &[Uuid]) -> RepositoryResult<Vec<Client>> {
        broken()
    }
    async fn create_client(&self, _input: ClientCreate) -> RepositoryResult<Client> {
        broken()
    }
    async fn update_client(&self, _id: Uuid, _input: ClientUpdate) -> RepositoryResult<Client> {
        broken()
    }
    async fn delete_client(&self, _id: Uuid) -> RepositoryResult<()> {
        broken()
    }
    async fn list_cases(&self, _filter: &CaseFilter) -> RepositoryResult<Vec<Case>> {
        broken()
    }
    async fn get_case(&self, _id: Uuid) -> RepositoryResult<Case> {
        broken()
    }
    async fn create_case(&self, _input: CaseCreate) -> RepositoryResult<Case> {
        broken()
    }
    async fn update_case(&self, _id: Uuid, _input: CaseUpdate) -> RepositoryResult<Case> {
        broken()
    }
    async fn delete_case(&self, _id: Uuid) -> RepositoryResult<()> {
        broken()
    }
    async fn list_documents(&self, _case_id: Uuid) -> RepositoryResult<Vec<Document>> {
        broken()
    }
    async fn create_document(&self, _case_id: Uuid, _input: DocumentCreate) -> RepositoryResult<Document> {
        broken()
    }
    async fn delete_document(&self, _id: Uuid) -> RepositoryResult<()> {
        broken()
    }
    async fn list_tasks(&self, _case_id: Uuid) -> RepositoryResult<Vec<Task>> {
        broken()
    }
    async fn create_task(&self, _case_id: Uuid, _input: TaskCreate) -> RepositoryResult<Task> {
        broken()
    }
    async fn update_task(&self, _id: Uuid, _input: TaskUpdate) -> RepositoryResult<Task> {
        broken()
    }
    async fn delete_task(&self, _id: Uuid) -> RepositoryResult<()> {
        broken()
    }
}

fn spawn_broken_app() -> String {
    common::spawn_app_with(common::test_environment(), Arc::new(BrokenStorage))
}

#[tokio::test]
async fn storage_failures_return_500_without_details() {
    let base_url: String = spawn_broken_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/cases", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "INTERNAL_SERVER_ERROR");
    assert_eq!(json["code"], 500);
    assert_eq!(json["data"]["details"], "Internal Server Error");
    assert!(!body.contains("pool timed out"));
}

#[tokio::test]
async fn health_reports_unavailable_storage() {
    let base_url: String = spawn_broken_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/health", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["data"]["status"], "unavailable");
    assert_eq!(json["data"]["storage"], "broken");
}

#[tokio::test]
async fn shell_renders_error_page_when_storage_fails() {
    let base_url: String = spawn_broken_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let html: String = resp.text().await.unwrap();
    assert!(html.contains(r#"data-page="ErrorPage""#));
    assert!(!html.contains(r#"data-page="CaseListPage""#));
}
