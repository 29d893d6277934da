// Storage abstraction shared by the Postgres and in-memory backends.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    Case, CaseCreate, CaseDetail, CaseFilter, CaseUpdate, Client, ClientCreate, ClientDetail,
    ClientUpdate, Document, DocumentCreate, Pagination, Task, TaskCreate, TaskUpdate,
};

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    /// A referenced row (e.g. the client of a new case) does not exist.
    #[error("{entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: Uuid },

    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn duplicate_email(email: &str) -> Self {
        Self::Conflict(format!("a client with email '{email}' already exists"))
    }

    pub fn client_has_cases(id: Uuid) -> Self {
        Self::Conflict(format!("client {id} still has cases and cannot be deleted"))
    }
}

/// Everything the API and the pages need from storage.
///
/// Lists come back in creation order. Payloads are expected to be validated
/// and normalized by the caller.
#[async_trait]
pub trait CaseRepository: Send + Sync + fmt::Debug {
    /// Short backend name used in logs and the health payload.
    fn backend(&self) -> &'static str;

    /// Prepares the backend (schema creation for Postgres). Called once at startup.
    async fn initialize(&self) -> RepositoryResult<()>;

    /// Cheap round trip proving the backend answers.
    async fn ping(&self) -> RepositoryResult<()>;

    /// Releases connections. Errors are logged, never returned.
    async fn shutdown(&self);

    async fn list_clients(&self, page: Pagination) -> RepositoryResult<Vec<Client>>;
    async fn get_client(&self, id: Uuid) -> RepositoryResult<Client>;
    /// Clients whose id is in `ids`, in creation order. Unknown ids are skipped.
    async fn clients_by_ids(&self, ids: &[Uuid]) -> RepositoryResult<Vec<Client>>;
    async fn create_client(&self, input: ClientCreate) -> RepositoryResult<Client>;
    async fn update_client(&self, id: Uuid, input: ClientUpdate) -> RepositoryResult<Client>;
    async fn delete_client(&self, id: Uuid) -> RepositoryResult<()>;

    async fn list_cases(&self, filter: &CaseFilter) -> RepositoryResult<Vec<Case>>;
    async fn get_case(&self, id: Uuid) -> RepositoryResult<Case>;
    async fn create_case(&self, input: CaseCreate) -> RepositoryResult<Case>;
    async fn update_case(&self, id: Uuid, input: CaseUpdate) -> RepositoryResult<Case>;
    /// Documents and tasks of the case go with it.
    async fn delete_case(&self, id: Uuid) -> RepositoryResult<()>;

    async fn list_documents(&self, case_id: Uuid) -> RepositoryResult<Vec<Document>>;
    async fn create_document(&self, case_id: Uuid, input: DocumentCreate) -> RepositoryResult<Document>;
    async fn delete_document(&self, id: Uuid) -> RepositoryResult<()>;

    async fn list_tasks(&self, case_id: Uuid) -> RepositoryResult<Vec<Task>>;
    async fn create_task(&self, case_id: Uuid, input: TaskCreate) -> RepositoryResult<Task>;
    async fn update_task(&self, id: Uuid, input: TaskUpdate) -> RepositoryResult<Task>;
    async fn delete_task(&self, id: Uuid) -> RepositoryResult<()>;

    async fn client_detail(&self, id: Uuid) -> RepositoryResult<ClientDetail> {
        let client: Client = self.get_client(id).await?;
        let cases: Vec<Case> = self.list_cases(&CaseFilter::for_client(id)).await?;
        Ok(ClientDetail { client, cases })
    }

    async fn case_detail(&self, id: Uuid) -> RepositoryResult<CaseDetail> {
        let case: Case = self.get_case(id).await?;
        let documents: Vec<Document> = self.list_documents(id).await?;
        let tasks: Vec<Task> = self.list_tasks(id).await?;
        Ok(CaseDetail { case, documents, tasks })
    }
}
