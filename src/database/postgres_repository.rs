use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Executor, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use crate::config::environment::EnvironmentVariables;
use crate::database::repository::{CaseRepository, RepositoryError, RepositoryResult};
use crate::models::{
    Case, CaseCreate, CaseFilter, CaseUpdate, Client, ClientCreate, ClientUpdate, Document,
    DocumentCreate, Pagination, Task, TaskCreate, TaskUpdate,
};

/// Tables, indexes and `updated_at` triggers. Idempotent.
const SCHEMA: &str = include_str!("sql/schema.sql");

const CLIENT_COLUMNS: &str =
    "id, name, contact_person, email, phone_number, address, created_at, updated_at";
const CASE_COLUMNS: &str = "id, client_id, case_name, case_number, description, status, \
     court_date, assigned_lawyer, created_at, updated_at";
const DOCUMENT_COLUMNS: &str = "id, case_id, file_name, file_path, description, uploaded_at";
const TASK_COLUMNS: &str =
    "id, case_id, description, due_date, completed, assigned_to, created_at, updated_at";

/// PostgreSQL storage backed by a single connection pool.
#[derive(Clone, Debug)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Opens the pool described by the environment configuration.
    pub async fn connect(config: Arc<EnvironmentVariables>) -> Result<Self> {
        info!(
            host = %config.db_host,
            port = config.db_port,
            database = %config.db_name,
            "Connecting to PostgreSQL"
        );

        let pool: PgPool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .min_connections(1)
            .idle_timeout(Duration::from_secs(30))
            .connect_with(Self::connect_options(&config))
            .await
            .context(format!("Failed to connect to database '{}'", config.db_name))?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connection options with UTC sessions and SSL depending on the environment
    fn connect_options(config: &EnvironmentVariables) -> PgConnectOptions {
        let options: PgConnectOptions = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_name)
            .options([("timezone", "UTC")]);

        if config.is_production() {
            options.ssl_mode(PgSslMode::Require)
        } else {
            options.ssl_mode(PgSslMode::Prefer)
        }
    }

    async fn case_exists(&self, id: Uuid) -> RepositoryResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cases WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn ensure_case(&self, id: Uuid) -> RepositoryResult<()> {
        if self.case_exists(id).await? {
            Ok(())
        } else {
            Err(RepositoryError::not_found("case", id))
        }
    }

    async fn delete_by_id(&self, table: &str, entity: &'static str, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(entity, id));
        }
        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

#[async_trait]
impl CaseRepository for PostgresRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn initialize(&self) -> RepositoryResult<()> {
        info!("Executing schema operation: case management tables");

        match self.pool.execute(SCHEMA).await {
            Ok(_) => {
                info!("Database schema is ready");
                Ok(())
            }
            Err(e) => {
                error!("Failed to apply database schema: {}", e);
                Err(e.into())
            }
        }
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn shutdown(&self) {
        info!("Closing PostgreSQL pool...");
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }

    async fn list_clients(&self, page: Pagination) -> RepositoryResult<Vec<Client>> {
        let clients: Vec<Client> = sqlx::query_as(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients ORDER BY created_at, id LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(clients)
    }

    async fn get_client(&self, id: Uuid) -> RepositoryResult<Client> {
        sqlx::query_as(&format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found("client", id))
    }

    async fn clients_by_ids(&self, ids: &[Uuid]) -> RepositoryResult<Vec<Client>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let clients: Vec<Client> = sqlx::query_as(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE id = ANY($1) ORDER BY created_at, id"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(clients)
    }

    async fn create_client(&self, input: ClientCreate) -> RepositoryResult<Client> {
        sqlx::query_as(&format!(
            r#"
            INSERT INTO clients (name, contact_person, email, phone_number, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.contact_person)
        .bind(&input.email)
        .bind(&input.phone_number)
        .bind(&input.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::duplicate_email(&input.email)
            } else {
                e.into()
            }
        })
    }

    async fn update_client(&self, id: Uuid, input: ClientUpdate) -> RepositoryResult<Client> {
        sqlx::query_as(&format!(
            r#"
            UPDATE clients
            SET name = $2, contact_person = $3, email = $4, phone_number = $5, address = $6
            WHERE id = $1
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.contact_person)
        .bind(&input.email)
        .bind(&input.phone_number)
        .bind(&input.address)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::duplicate_email(&input.email)
            } else {
                e.into()
            }
        })?
        .ok_or_else(|| RepositoryError::not_found("client", id))
    }

    async fn delete_client(&self, id: Uuid) -> RepositoryResult<()> {
        match self.delete_by_id("clients", "client", id).await {
            Err(RepositoryError::Database(e)) if is_foreign_key_violation(&e) => {
                Err(RepositoryError::client_has_cases(id))
            }
            other => other,
        }
    }

    async fn list_cases(&self, filter: &CaseFilter) -> RepositoryResult<Vec<Case>> {
        let page: Pagination = filter.pagination();
        let cases: Vec<Case> = sqlx::query_as(&format!(
            r#"
            SELECT {CASE_COLUMNS} FROM cases
            WHERE ($1::uuid IS NULL OR client_id = $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at, id
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(filter.client_id)
        .bind(filter.status())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(cases)
    }

    async fn get_case(&self, id: Uuid) -> RepositoryResult<Case> {
        sqlx::query_as(&format!("SELECT {CASE_COLUMNS} FROM cases WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found("case", id))
    }

    async fn create_case(&self, input: CaseCreate) -> RepositoryResult<Case> {
        let fields: &CaseUpdate = &input.fields;
        sqlx::query_as(&format!(
            r#"
            INSERT INTO cases (client_id, case_name, case_number, description, status, court_date, assigned_lawyer)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {CASE_COLUMNS}
            "#
        ))
        .bind(input.client_id)
        .bind(&fields.case_name)
        .bind(&fields.case_number)
        .bind(&fields.description)
        .bind(&fields.status)
        .bind(fields.court_date)
        .bind(&fields.assigned_lawyer)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                RepositoryError::MissingReference { entity: "client", id: input.client_id }
            } else {
                e.into()
            }
        })
    }

    async fn update_case(&self, id: Uuid, input: CaseUpdate) -> RepositoryResult<Case> {
        sqlx::query_as(&format!(
            r#"
            UPDATE cases
            SET case_name = $2, case_number = $3, description = $4, status = $5,
                court_date = $6, assigned_lawyer = $7
            WHERE id = $1
            RETURNING {CASE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.case_name)
        .bind(&input.case_number)
        .bind(&input.description)
        .bind(&input.status)
        .bind(input.court_date)
        .bind(&input.assigned_lawyer)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("case", id))
    }

    async fn delete_case(&self, id: Uuid) -> RepositoryResult<()> {
        self.delete_by_id("cases", "case", id).await
    }

    async fn list_documents(&self, case_id: Uuid) -> RepositoryResult<Vec<Document>> {
        self.ensure_case(case_id).await?;
        let documents: Vec<Document> = sqlx::query_as(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE case_id = $1 ORDER BY uploaded_at, id"
        ))
        .bind(case_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(documents)
    }

    async fn create_document(&self, case_id: Uuid, input: DocumentCreate) -> RepositoryResult<Document> {
        sqlx::query_as(&format!(
            r#"
            INSERT INTO documents (case_id, file_name, file_path, description)
            VALUES ($1, $2, $3, $4)
            RETURNING {DOCUMENT_COLUMNS}
            "#
        ))
        .bind(case_id)
        .bind(&input.file_name)
        .bind(&input.file_path)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                RepositoryError::not_found("case", case_id)
            } else {
                e.into()
            }
        })
    }

    async fn delete_document(&self, id: Uuid) -> RepositoryResult<()> {
        self.delete_by_id("documents", "document", id).await
    }

    async fn list_tasks(&self, case_id: Uuid) -> RepositoryResult<Vec<Task>> {
        self.ensure_case(case_id).await?;
        let tasks: Vec<Task> = sqlx::query_as(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE case_id = $1 ORDER BY created_at, id"
        ))
        .bind(case_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    async fn create_task(&self, case_id: Uuid, input: TaskCreate) -> RepositoryResult<Task> {
        sqlx::query_as(&format!(
            r#"
            INSERT INTO tasks (case_id, description, due_date, completed, assigned_to)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(case_id)
        .bind(&input.description)
        .bind(input.due_date)
        .bind(input.is_completed())
        .bind(&input.assigned_to)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                RepositoryError::not_found("case", case_id)
            } else {
                e.into()
            }
        })
    }

    async fn update_task(&self, id: Uuid, input: TaskUpdate) -> RepositoryResult<Task> {
        sqlx::query_as(&format!(
            r#"
            UPDATE tasks
            SET description = $2, due_date = $3, completed = $4, assigned_to = $5
            WHERE id = $1
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.description)
        .bind(input.due_date)
        .bind(input.is_completed())
        .bind(&input.assigned_to)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("task", id))
    }

    async fn delete_task(&self, id: Uuid) -> RepositoryResult<()> {
        self.delete_by_id("tasks", "task", id).await
    }
}
