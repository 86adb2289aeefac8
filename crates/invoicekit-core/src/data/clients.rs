use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::new_record_id;

/// A customer the user sends invoices to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client fields supplied by the UI on create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: String,
}

impl NewClient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Client {
    /// Builds a stored client owned by `user_id`.
    pub fn from_new(user_id: &str, fields: NewClient) -> Self {
        let now = Utc::now();
        Self {
            id: new_record_id(),
            user_id: user_id.to_string(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            company: fields.company,
            address: fields.address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the editable fields and bumps `updated_at`.
    pub fn apply(&mut self, fields: NewClient) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
        self.company = fields.company;
        self.address = fields.address;
        self.updated_at = Utc::now();
    }
}
