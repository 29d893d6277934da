// Start of file: /src/database/mod.rs

/*
    * Storage layer: the `CaseRepository` trait and its backends.
*/

pub mod memory_store;
pub mod postgres_repository;
pub mod repository;

pub use memory_store::MemoryRepository;
pub use postgres_repository::PostgresRepository;
pub use repository::{CaseRepository, RepositoryError, RepositoryResult};

// End of file: /src/database/mod.rs
