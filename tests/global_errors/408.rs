//! tests/global_errors/408.rs
//! A handler outliving DEFAULT_TIMEOUT_SECONDS is cut off with a 408 envelope.

#[path = "../mod.rs"]
mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use case_manager::config::environment::EnvironmentVariables;
use case_manager::database::{CaseRepository, MemoryRepository, RepositoryResult};
use case_manager::models::{
    Case, CaseCreate, CaseFilter, CaseUpdate, Client, ClientCreate, ClientUpdate, Document,
    DocumentCreate, Pagination, Task, TaskCreate, TaskUpdate,
};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::{sleep, timeout};
use uuid::Uuid;

/// In-memory storage whose client listing stalls for two seconds.
#[derive(Debug, Default)]
struct SlowStorage {
    inner: MemoryRepository,
}

#[async_trait]
impl CaseRepository for SlowStorage {
    fn backend(&self) -> &'static str {
        "slow"
    }
    async fn initialize(&self) -> RepositoryResult<()> {
        self.inner.initialize().await
    }
    async fn ping(&self) -> RepositoryResult<()> {
        self.inner.ping().await
    }
    async fn shutdown(&self) {
        self.inner.shutdown().await
    }
    async fn list_clients(&self, page: Pagination) -> RepositoryResult<Vec<Client>> {
        sleep(Duration::from_secs(2)).await;
        self.inner.list_clients(page).await
    }
    async fn get_client(&self, id: Uuid) -> RepositoryResult<Client> {
        self.inner.get_client(id).await
    }
    async fn clients_by_ids(&self, ids: &[Uuid]) -> RepositoryResult<Vec<Client>> {
        self.inner.clients_by_ids(ids).await
    }
    async fn create_client(&self, input: ClientCreate) -> RepositoryResult<Client> {
        self.inner.create_client(input).await
    }
    async fn update_client(&self, id: Uuid, input: ClientUpdate) -> RepositoryResult<Client> {
        self.inner.update_client(id, input).await
    }
    async fn delete_client(&self, id: Uuid) -> RepositoryResult<()> {
        self.inner.delete_client(id).await
    }
    async fn list_cases(&self, filter: &CaseFilter) -> RepositoryResult<Vec<Case>> {
        self.inner.list_cases(filter).await
    }
    async fn get_case(&self, id: Uuid) -> RepositoryResult<Case> {
        self.inner.get_case(id).await
    }
    async fn create_case(&self, input: CaseCreate) -> RepositoryResult<Case> {
        self.inner.create_case(input).await
    }
    async fn update_case(&self, id: Uuid, input: CaseUpdate) -> RepositoryResult<Case> {
        self.inner.update_case(id, input).await
    }
    async fn delete_case(&self, id: Uuid) -> RepositoryResult<()> {
        self.inner.delete_case(id).await
    }
    async fn list_documents(&self, case_id: Uuid) -> RepositoryResult<Vec<Document>> {
        self.inner.list_documents(case_id).await
    }
    async fn create_document(&self, case_id: Uuid, input: DocumentCreate) -> RepositoryResult<Document> {
        self.inner.create_document(case_id, input).await
    }
    async fn delete_document(&self, id: Uuid) -> RepositoryResult<()> {
        self.inner.delete_document(id).await
    }
    async fn list_tasks(&self, case_id: Uuid) -> RepositoryResult<Vec<Task>> {
        self.inner.list_tasks(case_id).await
    }
    async fn create_task(&self, case_id: Uuid, input: TaskCreate) -> RepositoryResult<Task> {
        self.inner.create_task(case_id, input).await
    }
    async fn update_task(&self, id: Uuid, input: TaskUpdate) -> RepositoryResult<Task> {
        self.inner.update_task(id, input).await
    }
    async fn delete_task(&self, id: Uuid) -> RepositoryResult<()> {
        self.inner.delete_task(id).await
    }
}

#[tokio::test]
async fn returns_408_when_storage_outlives_the_timeout() {
    let env: EnvironmentVariables = EnvironmentVariables {
        default_timeout_seconds: 1,
        ..common::test_environment()
    };
    let base_url: String = common::spawn_app_with(env, Arc::new(SlowStorage::default()));

    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5),
        reqwest::Client::new()
            .get(format!("{}/api/clients", base_url))
            .send(),
    )
    .await;

    assert!(resp_result.is_ok(), "Client timed out waiting for server.");
    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "REQUEST_TIMEOUT");
    assert_eq!(json["code"], 408);
    assert_eq!(json["data"], Value::Null);
}

#[tokio::test]
async fn fast_requests_are_unaffected_by_the_timeout() {
    let env: EnvironmentVariables = EnvironmentVariables {
        default_timeout_seconds: 1,
        ..common::test_environment()
    };
    let base_url: String = common::spawn_app_with(env, Arc::new(SlowStorage::default()));

    let resp: reqwest::Response = reqwest::get(format!("{}/health", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
}
