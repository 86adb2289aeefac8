//! # Template persistence
//!
//! Bridges the editor document and the data-access collaborator:
//! - Save the current design as a new template
//! - Update a template in place
//! - Load a stored or built-in template into a document
//! - Export and import portable template files
//!
//! Storage is the single source of truth; a failed call is returned to the
//! caller and nothing is cached locally.

use std::path::Path;

use invoicekit_core::{DataAccess, Error, Result, Template};

use crate::model::Document;
use crate::serialization::PortableTemplate;

/// Name and description entered in the save dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateMeta {
    pub name: String,
    pub description: String,
}

impl TemplateMeta {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::other("Template name is required"));
        }
        Ok(())
    }
}

/// Persist `document` as a new template.
pub async fn save_new(
    access: &dyn DataAccess,
    document: &Document,
    meta: &TemplateMeta,
    thumbnail: Option<String>,
) -> Result<Template> {
    meta.validate()?;
    let fields = PortableTemplate::export(document, &meta.name, &meta.description)
        .to_new_template(thumbnail);
    let template = access.create_template(fields).await?;
    tracing::info!(template_id = %template.id, elements = document.len(), "template saved");
    Ok(template)
}

/// Overwrite template `template_id` with `document`.
pub async fn update_existing(
    access: &dyn DataAccess,
    template_id: &str,
    document: &Document,
    meta: &TemplateMeta,
    thumbnail: Option<String>,
) -> Result<Template> {
    meta.validate()?;
    let fields = PortableTemplate::export(document, &meta.name, &meta.description)
        .to_new_template(thumbnail);
    let template = access.update_template(template_id, fields).await?;
    tracing::info!(template_id = %template.id, elements = document.len(), "template updated");
    Ok(template)
}

/// Fetch a template and parse its elements.
pub async fn load(access: &dyn DataAccess, template_id: &str) -> Result<(Template, Document)> {
    let template = access.get_template(template_id).await?;
    let document = Document::from_value(&template.elements)?;
    tracing::debug!(template_id = %template.id, elements = document.len(), "template loaded");
    Ok((template, document))
}

/// Write a portable template file.
pub fn export_to_file(path: impl AsRef<Path>, portable: &PortableTemplate) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, portable.to_json()?)?;
    tracing::info!(path = %path.display(), "template exported");
    Ok(())
}

/// Read and validate a portable template file.
pub fn import_from_file(path: impl AsRef<Path>) -> Result<PortableTemplate> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let portable = PortableTemplate::from_json(&raw)?;
    tracing::info!(path = %path.display(), name = %portable.name, "template imported");
    Ok(portable)
}
