//! New design, template load/save and import/export for the editor session.

use std::path::Path;

use invoicekit_core::{DataAccess, FormatError, Result, Template};

use super::{ActiveTemplate, EditorSession, Notification};
use crate::model::Document;
use crate::renderer::CanvasRenderer;
use crate::serialization::PortableTemplate;
use crate::templates::{self, TemplateMeta};

impl EditorSession {
    /// Start an empty, unsaved design.
    pub fn new_design(&mut self) {
        self.replace_document(Document::new());
        self.active_template = None;
        self.meta = TemplateMeta::default();
        tracing::info!("new design");
    }

    /// Replace the document with a fetched template and mark it active.
    pub fn open_template(&mut self, template: &Template) -> std::result::Result<(), FormatError> {
        let document = Document::from_value(&template.elements)?;
        self.install_template(template, document);
        Ok(())
    }

    fn install_template(&mut self, template: &Template, document: Document) {
        self.replace_document(document);
        self.meta = TemplateMeta::new(template.name.clone(), template.description.clone());
        // Built-ins are read-only; saving one creates a copy.
        self.active_template = (!template.is_builtin()).then(|| ActiveTemplate {
            id: template.id.clone(),
            name: template.name.clone(),
        });
    }

    /// Fetch and open a template; the document is untouched on failure.
    pub async fn load_template(
        &mut self,
        access: &dyn DataAccess,
        template_id: &str,
    ) -> Result<()> {
        match templates::load(access, template_id).await {
            Ok((template, document)) => {
                self.install_template(&template, document);
                self.notify(Notification::info(format!("Loaded \"{}\"", template.name)));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(template_id, "template load failed: {}", err);
                self.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Portable snapshot of the current design, pending edits included.
    pub fn export_portable(&mut self) -> PortableTemplate {
        self.flush_pending();
        PortableTemplate::export(&self.document, &self.meta.name, &self.meta.description)
    }

    pub fn export_json(&mut self) -> Result<String> {
        self.export_portable().to_json()
    }

    pub fn export_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let portable = self.export_portable();
        templates::export_to_file(path, &portable)
    }

    /// Import a portable payload as a new unsaved design.
    ///
    /// A malformed payload is rejected before any state changes.
    pub fn import_json(&mut self, raw: &str) -> std::result::Result<(), FormatError> {
        match PortableTemplate::from_json(raw) {
            Ok(portable) => {
                self.apply_import(portable);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("import rejected: {}", err);
                self.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn import_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        match templates::import_from_file(path) {
            Ok(portable) => {
                self.apply_import(portable);
                Ok(())
            }
            Err(err) => {
                self.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    fn apply_import(&mut self, portable: PortableTemplate) {
        tracing::info!(
            name = %portable.name,
            elements = portable.elements.len(),
            "template imported"
        );
        self.replace_document(portable.elements);
        self.meta = TemplateMeta::new(portable.name, portable.description);
        self.active_template = None;
    }

    /// Persist the design: update the active template in place, or save a new
    /// one. The active template changes only when storage succeeds.
    pub async fn save(&mut self, access: &dyn DataAccess) -> Result<Template> {
        self.flush_pending();
        let thumbnail = self
            .renderer
            .thumbnail(self.document.elements(), self.viewport.page())?;

        let result = match &self.active_template {
            Some(active) => {
                templates::update_existing(
                    access,
                    &active.id,
                    &self.document,
                    &self.meta,
                    Some(thumbnail),
                )
                .await
            }
            None => templates::save_new(access, &self.document, &self.meta, Some(thumbnail)).await,
        };

        match result {
            Ok(template) => {
                self.active_template = Some(ActiveTemplate {
                    id: template.id.clone(),
                    name: template.name.clone(),
                });
                self.notify(Notification::info(format!("Saved \"{}\"", template.name)));
                Ok(template)
            }
            Err(err) => {
                tracing::warn!("template save failed: {}", err);
                self.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }
}
