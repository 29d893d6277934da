// Start of file: /src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::case::Case;
use super::validation::{self, ValidationError};

/// A client of the firm. Email addresses are unique across clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable client fields. Updates replace every field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientInput {
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

pub type ClientCreate = ClientInput;
pub type ClientUpdate = ClientInput;

impl ClientInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("name", &self.name, 100)?;
        validation::optional("contact_person", self.contact_person.as_deref(), 100)?;
        validation::required("email", &self.email, 100)?;
        validation::email("email", &self.email)?;
        validation::optional("phone_number", self.phone_number.as_deref(), 20)?;
        validation::optional("address", self.address.as_deref(), 255)?;
        Ok(())
    }

    /// Trims every field; emails are compared case-insensitively so they are stored lowercase.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            contact_person: validation::normalize(self.contact_person),
            email: self.email.trim().to_lowercase(),
            phone_number: validation::normalize(self.phone_number),
            address: validation::normalize(self.address),
        }
    }
}

/// A client together with the cases opened for it.
#[derive(Debug, Clone, Serialize)]
pub struct ClientDetail {
    #[serde(flatten)]
    pub client: Client,
    pub cases: Vec<Case>,
}


// End of file: /src/models/client.rs
