// Application state shared by every handler

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::config::environment::{EnvironmentVariables, StorageBackend};
use crate::database::{CaseRepository, MemoryRepository, PostgresRepository};
use crate::shell::ApplicationShell;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub repository: Arc<dyn CaseRepository>,
    pub shell: ApplicationShell,
}

impl AppState {
    /// Wires an already initialized repository with the application route table.
    pub fn new(environment: Arc<EnvironmentVariables>, repository: Arc<dyn CaseRepository>) -> Self {
        Self {
            environment,
            repository,
            shell: ApplicationShell::default(),
        }
    }

    /// Opens and initializes the configured storage backend.
    pub async fn from_env(environment: Arc<EnvironmentVariables>) -> anyhow::Result<Self> {
        let repository: Arc<dyn CaseRepository> = match environment.storage_backend {
            StorageBackend::Postgres => Arc::new(PostgresRepository::connect(environment.clone()).await?),
            StorageBackend::Memory => Arc::new(MemoryRepository::new()),
        };

        repository
            .initialize()
            .await
            .context(format!("Failed to initialize {} storage", repository.backend()))?;

        info!(backend = repository.backend(), "Storage initialized successfully");
        Ok(Self::new(environment, repository))
    }

    /// Gracefully release storage connections
    pub async fn shutdown(&self) {
        self.repository.shutdown().await;
    }
}
