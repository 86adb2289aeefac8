//! Portable template format
//!
//! Templates are exchanged as JSON:
//!
//! ```text
//! { "name": string, "description": string, "elements": Element[], "exportedAt": ISO-8601 }
//! ```
//!
//! Import checks the payload shape before touching any editor state, so a
//! rejected file leaves the document exactly as it was.

use chrono::{DateTime, Utc};
use invoicekit_core::{FormatError, NewTemplate, Result, Template};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::Document;

/// A template as written to and read from a portable file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortableTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub elements: Document,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

impl PortableTemplate {
    /// Snapshot `document` for export; the thumbnail is never included.
    pub fn export(document: &Document, name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            elements: document.clone(),
            exported_at: Some(Utc::now()),
        }
    }

    /// Export a stored template.
    pub fn from_template(template: &Template) -> std::result::Result<Self, FormatError> {
        Ok(Self::export(
            &Document::from_value(&template.elements)?,
            &template.name,
            &template.description,
        ))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a portable payload.
    pub fn from_json(raw: &str) -> std::result::Result<Self, FormatError> {
        let value: Value = serde_json::from_str(raw).map_err(|e| FormatError::InvalidJson {
            reason: e.to_string(),
        })?;
        let object = value.as_object().ok_or(FormatError::NotAnObject)?;

        let name = object
            .get("name")
            .and_then(Value::as_str)
            .ok_or(FormatError::MissingName)?
            .to_string();
        let elements = Document::from_value(
            object.get("elements").ok_or(FormatError::ElementsNotArray)?,
        )?;
        let description = object
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let exported_at = object
            .get("exportedAt")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(Self {
            name,
            description,
            elements,
            exported_at,
        })
    }

    /// Fields for persisting this template.
    pub fn to_new_template(&self, thumbnail: Option<String>) -> NewTemplate {
        NewTemplate {
            name: self.name.clone(),
            description: self.description.clone(),
            thumbnail,
            elements: self.elements.to_value(),
        }
    }
}
