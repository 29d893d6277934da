// Start of file: /src/models/mod.rs

/*
    * Domain entities of the case management system and the payloads
    * accepted by the API to create or update them.
*/

pub mod case;
pub mod client;
pub mod document;
pub mod pagination;
pub mod task;
pub mod validation;

pub use case::{Case, CaseCreate, CaseDetail, CaseFilter, CaseUpdate};
pub use client::{Client, ClientCreate, ClientDetail, ClientUpdate};
pub use document::{Document, DocumentCreate};
pub use pagination::Pagination;
pub use task::{Task, TaskCreate, TaskUpdate};
pub use validation::ValidationError;

// End of file: /src/models/mod.rs
