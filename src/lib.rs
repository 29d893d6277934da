// Library root for the legal case management service

pub mod api;
pub mod config;
pub mod core;
pub mod database;
pub mod models;
pub mod shell;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
pub use crate::database::{CaseRepository, MemoryRepository, PostgresRepository};
