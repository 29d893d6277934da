// Start of file: /src/models/task.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{self, ValidationError};

/// A to-do item tracked against a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: Uuid,
    pub case_id: Uuid,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable task fields. Updates replace every field; `completed` defaults to false.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskInput {
    pub description: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

pub type TaskCreate = TaskInput;
pub type TaskUpdate = TaskInput;

impl TaskInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("description", &self.description, usize::MAX)?;
        validation::optional("assigned_to", self.assigned_to.as_deref(), 100)?;
        Ok(())
    }

    pub fn normalized(self) -> Self {
        Self {
            description: self.description.trim().to_string(),
            due_date: self.due_date,
            completed: Some(self.completed.unwrap_or(false)),
            assigned_to: validation::normalize(self.assigned_to),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}


// End of file: /src/models/task.rs
