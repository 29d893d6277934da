// Start of file: /src/models/document.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{self, ValidationError};

/// A file attached to a case. Only metadata is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Document {
    pub id: Uuid,
    pub case_id: Uuid,
    pub file_name: String,
    pub file_path: String,
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// The owning case comes from the request path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentCreate {
    pub file_name: String,
    pub file_path: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl DocumentCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("file_name", &self.file_name, 255)?;
        validation::required("file_path", &self.file_path, 255)?;
        Ok(())
    }

    pub fn normalized(self) -> Self {
        Self {
            file_name: self.file_name.trim().to_string(),
            file_path: self.file_path.trim().to_string(),
            description: validation::normalize(self.description),
        }
    }
}

// End of file: /src/models/document.rs
