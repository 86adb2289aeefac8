//! Persisted design templates.
//!
//! The element list is kept as opaque JSON here; the designer crate owns the
//! element schema and converts in both directions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::new_record_id;

/// Design template with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique template identifier
    pub id: String,
    /// Owner; `None` for built-in templates
    #[serde(default)]
    pub user_id: Option<String>,
    /// Template name
    pub name: String,
    /// Template description
    #[serde(default)]
    pub description: String,
    /// Rasterized preview (data URL)
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Serialized element list
    pub elements: serde_json::Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modified timestamp
    pub updated_at: DateTime<Utc>,
}

/// Template fields supplied by the editor on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub elements: serde_json::Value,
}

impl Template {
    /// Builds a template with a fresh id and current timestamps.
    pub fn new(user_id: Option<String>, fields: NewTemplate) -> Self {
        let now = Utc::now();
        Self {
            id: new_record_id(),
            user_id,
            name: fields.name,
            description: fields.description,
            thumbnail: fields.thumbnail,
            elements: fields.elements,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update design data and modification time
    pub fn apply(&mut self, fields: NewTemplate) {
        self.name = fields.name;
        self.description = fields.description;
        self.thumbnail = fields.thumbnail;
        self.elements = fields.elements;
        self.updated_at = Utc::now();
    }

    /// Built-in templates ship with the application and have no owner.
    pub fn is_builtin(&self) -> bool {
        self.user_id.is_none()
    }

    /// Number of serialized elements, zero when the payload is not an array.
    pub fn element_count(&self) -> usize {
        self.elements.as_array().map_or(0, Vec::len)
    }
}
