// In-process storage backend. Used by the test suite and by
// STORAGE_BACKEND=memory for demos; nothing survives a restart.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::database::repository::{CaseRepository, RepositoryError, RepositoryResult};
use crate::models::{
    Case, CaseCreate, CaseFilter, CaseUpdate, Client, ClientCreate, ClientUpdate, Document,
    DocumentCreate, Pagination, Task, TaskCreate, TaskUpdate,
};

// Vecs keep insertion order, which is creation order.
#[derive(Debug, Default)]
struct Tables {
    clients: Vec<Client>,
    cases: Vec<Case>,
    documents: Vec<Document>,
    tasks: Vec<Task>,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.clients
            .iter()
            .any(|c| c.email == email && Some(c.id) != except)
    }

    fn case_exists(&self, id: Uuid) -> bool {
        self.cases.iter().any(|c| c.id == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CaseRepository for MemoryRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn initialize(&self) -> RepositoryResult<()> {
        info!("Using in-memory storage; data is lost on shutdown");
        Ok(())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        let _tables = self.tables.read().await;
        Ok(())
    }

    async fn shutdown(&self) {
        let tables = self.tables.read().await;
        info!(
            clients = tables.clients.len(),
            cases = tables.cases.len(),
            "In-memory storage shut down"
        );
    }

    async fn list_clients(&self, page: Pagination) -> RepositoryResult<Vec<Client>> {
        let tables = self.tables.read().await;
        Ok(page.apply(tables.clients.iter().cloned()))
    }

    async fn get_client(&self, id: Uuid) -> RepositoryResult<Client> {
        let tables = self.tables.read().await;
        tables
            .clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("client", id))
    }

    async fn clients_by_ids(&self, ids: &[Uuid]) -> RepositoryResult<Vec<Client>> {
        let wanted: HashSet<Uuid> = ids.iter().copied().collect();
        let tables = self.tables.read().await;
        Ok(tables
            .clients
            .iter()
            .filter(|c| wanted.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn create_client(&self, input: ClientCreate) -> RepositoryResult<Client> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&input.email, None) {
            return Err(RepositoryError::duplicate_email(&input.email));
        }

        let now: DateTime<Utc> = Utc::now();
        let client: Client = Client {
            id: Uuid::new_v4(),
            name: input.name,
            contact_person: input.contact_person,
            email: input.email,
            phone_number: input.phone_number,
            address: input.address,
            created_at: now,
            updated_at: now,
        };
        tables.clients.push(client.clone());
        debug!(client_id = %client.id, "Client stored");
        Ok(client)
    }

    async fn update_client(&self, id: Uuid, input: ClientUpdate) -> RepositoryResult<Client> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&input.email, Some(id)) {
            return Err(RepositoryError::duplicate_email(&input.email));
        }

        let client: &mut Client = tables
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::not_found("client", id))?;

        client.name = input.name;
        client.contact_person = input.contact_person;
        client.email = input.email;
        client.phone_number = input.phone_number;
        client.address = input.address;
        client.updated_at = Utc::now();
        Ok(client.clone())
    }

    async fn delete_client(&self, id: Uuid) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        let index: usize = tables
            .clients
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| RepositoryError::not_found("client", id))?;

        if tables.cases.iter().any(|c| c.client_id == id) {
            return Err(RepositoryError::client_has_cases(id));
        }

        tables.clients.remove(index);
        Ok(())
    }

    async fn list_cases(&self, filter: &CaseFilter) -> RepositoryResult<Vec<Case>> {
        let tables = self.tables.read().await;
        Ok(filter
            .pagination()
            .apply(tables.cases.iter().filter(|c| filter.matches(c)).cloned()))
    }

    async fn get_case(&self, id: Uuid) -> RepositoryResult<Case> {
        let tables = self.tables.read().await;
        tables
            .cases
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("case", id))
    }

    async fn create_case(&self, input: CaseCreate) -> RepositoryResult<Case> {
        let mut tables = self.tables.write().await;
        if !tables.clients.iter().any(|c| c.id == input.client_id) {
            return Err(RepositoryError::MissingReference {
                entity: "client",
                id: input.client_id,
            });
        }

        let now: DateTime<Utc> = Utc::now();
        let fields: CaseUpdate = input.fields;
        let case: Case = Case {
            id: Uuid::new_v4(),
            client_id: input.client_id,
            case_name: fields.case_name,
            case_number: fields.case_number,
            description: fields.description,
            status: fields.status,
            court_date: fields.court_date,
            assigned_lawyer: fields.assigned_lawyer,
            created_at: now,
            updated_at: now,
        };
        tables.cases.push(case.clone());
        debug!(case_id = %case.id, client_id = %case.client_id, "Case stored");
        Ok(case)
    }

    async fn update_case(&self, id: Uuid, input: CaseUpdate) -> RepositoryResult<Case> {
        let mut tables = self.tables.write().await;
        let case: &mut Case = tables
            .cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::not_found("case", id))?;

        case.case_name = input.case_name;
        case.case_number = input.case_number;
        case.description = input.description;
        case.status = input.status;
        case.court_date = input.court_date;
        case.assigned_lawyer = input.assigned_lawyer;
        case.updated_at = Utc::now();
        Ok(case.clone())
    }

    async fn delete_case(&self, id: Uuid) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        let index: usize = tables
            .cases
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| RepositoryError::not_found("case", id))?;

        tables.cases.remove(index);
        tables.documents.retain(|d| d.case_id != id);
        tables.tasks.retain(|t| t.case_id != id);
        Ok(())
    }

    async fn list_documents(&self, case_id: Uuid) -> RepositoryResult<Vec<Document>> {
        let tables = self.tables.read().await;
        if !tables.case_exists(case_id) {
            return Err(RepositoryError::not_found("case", case_id));
        }
        Ok(tables
            .documents
            .iter()
            .filter(|d| d.case_id == case_id)
            .cloned()
            .collect())
    }

    async fn create_document(&self, case_id: Uuid, input: DocumentCreate) -> RepositoryResult<Document> {
        let mut tables = self.tables.write().await;
        if !tables.case_exists(case_id) {
            return Err(RepositoryError::not_found("case", case_id));
        }

        let document: Document = Document {
            id: Uuid::new_v4(),
            case_id,
            file_name: input.file_name,
            file_path: input.file_path,
            description: input.description,
            uploaded_at: Utc::now(),
        };
        tables.documents.push(document.clone());
        Ok(document)
    }

    async fn delete_document(&self, id: Uuid) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        let before: usize = tables.documents.len();
        tables.documents.retain(|d| d.id != id);
        if tables.documents.len() == before {
            return Err(RepositoryError::not_found("document", id));
        }
        Ok(())
    }

    async fn list_tasks(&self, case_id: Uuid) -> RepositoryResult<Vec<Task>> {
        let tables = self.tables.read().await;
        if !tables.case_exists(case_id) {
            return Err(RepositoryError::not_found("case", case_id));
        }
        Ok(tables
            .tasks
            .iter()
            .filter(|t| t.case_id == case_id)
            .cloned()
            .collect())
    }

    async fn create_task(&self, case_id: Uuid, input: TaskCreate) -> RepositoryResult<Task> {
        let mut tables = self.tables.write().await;
        if !tables.case_exists(case_id) {
            return Err(RepositoryError::not_found("case", case_id));
        }

        let now: DateTime<Utc> = Utc::now();
        let task: Task = Task {
            id: Uuid::new_v4(),
            case_id,
            completed: input.is_completed(),
            description: input.description,
            due_date: input.due_date,
            assigned_to: input.assigned_to,
            created_at: now,
            updated_at: now,
        };
        tables.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: Uuid, input: TaskUpdate) -> RepositoryResult<Task> {
        let mut tables = self.tables.write().await;
        let task: &mut Task = tables
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| RepositoryError::not_found("task", id))?;

        task.completed = input.is_completed();
        task.description = input.description;
        task.due_date = input.due_date;
        task.assigned_to = input.assigned_to;
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    async fn delete_task(&self, id: Uuid) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        let before: usize = tables.tasks.len();
        tables.tasks.retain(|t| t.id != id);
        if tables.tasks.len() == before {
            return Err(RepositoryError::not_found("task", id));
        }
        Ok(())
    }
}
