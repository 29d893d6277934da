// Start of file: /src/models/case.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::Document;
use super::pagination::Pagination;
use super::task::Task;
use super::validation::{self, ValidationError};

/// A legal case opened on behalf of a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Case {
    pub id: Uuid,
    pub client_id: Uuid,
    pub case_name: String,
    pub case_number: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub court_date: Option<DateTime<Utc>>,
    pub assigned_lawyer: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable case fields. The owning client is fixed at creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaseUpdate {
    pub case_name: String,
    #[serde(default)]
    pub case_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub court_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_lawyer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaseCreate {
    pub client_id: Uuid,
    #[serde(flatten)]
    pub fields: CaseUpdate,
}

impl CaseUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("case_name", &self.case_name, 255)?;
        validation::optional("case_number", self.case_number.as_deref(), 50)?;
        validation::optional("status", self.status.as_deref(), 50)?;
        validation::optional("assigned_lawyer", self.assigned_lawyer.as_deref(), 100)?;
        Ok(())
    }

    pub fn normalized(self) -> Self {
        Self {
            case_name: self.case_name.trim().to_string(),
            case_number: validation::normalize(self.case_number),
            description: validation::normalize(self.description),
            status: validation::normalize(self.status),
            court_date: self.court_date,
            assigned_lawyer: validation::normalize(self.assigned_lawyer),
        }
    }
}

impl CaseCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.fields.validate()
    }

    pub fn normalized(self) -> Self {
        Self {
            client_id: self.client_id,
            fields: self.fields.normalized(),
        }
    }
}

/// Query parameters of the case listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseFilter {
    pub client_id: Option<Uuid>,
    pub status: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl CaseFilter {
    pub fn for_client(client_id: Uuid) -> Self {
        Self {
            client_id: Some(client_id),
            limit: Some(super::pagination::MAX_LIMIT),
            ..Self::default()
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination { skip: self.skip, limit: self.limit }
    }

    /// Status filter, ignoring blank values.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn matches(&self, case: &Case) -> bool {
        if let Some(client_id) = self.client_id {
            if case.client_id != client_id {
                return false;
            }
        }
        match self.status() {
            Some(status) => case.status.as_deref() == Some(status),
            None => true,
        }
    }
}

/// A case with its documents and tasks.
#[derive(Debug, Clone, Serialize)]
pub struct CaseDetail {
    #[serde(flatten)]
    pub case: Case,
    pub documents: Vec<Document>,
    pub tasks: Vec<Task>,
}


// End of file: /src/models/case.rs
