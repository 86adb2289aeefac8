//! In-memory [`DataAccess`] backend
//!
//! Tables are guarded by `parking_lot` locks so one backend can be shared as
//! `Arc<dyn DataAccess>`. A failure can be injected for the next call to
//! exercise error paths in callers.

use super::{builtin, DataAccess};
use crate::auth::{AuthDispatcher, AuthEvent};
use crate::data::{
    Client, DashboardStats, Invoice, NewClient, NewInvoice, NewTemplate, Template, User,
};
use crate::error::{Error, Result};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tokio::sync::broadcast;

#[derive(Default)]
pub struct InMemoryBackend {
    session: RwLock<Option<User>>,
    clients: RwLock<Vec<Client>>,
    invoices: RwLock<Vec<Invoice>>,
    templates: RwLock<Vec<Template>>,
    stats: RwLock<Vec<DashboardStats>>,
    pending_failure: Mutex<Option<String>>,
    auth: AuthDispatcher,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend with `user` already signed in.
    pub fn with_user(user: User) -> Self {
        let backend = Self::new();
        backend.sign_in(user);
        backend
    }

    /// Establish a session and notify auth subscribers.
    pub fn sign_in(&self, user: User) {
        tracing::info!(user_id = %user.id, "signed in");
        *self.session.write() = Some(user.clone());
        self.auth.publish(AuthEvent::SignedIn(user));
    }

    /// Make the next storage call fail with `message`.
    pub fn fail_next(&self, message: impl Into<String>) {
        *self.pending_failure.lock() = Some(message.into());
    }

    /// Number of stored (non built-in) templates across all users.
    pub fn stored_template_count(&self) -> usize {
        self.templates.read().len()
    }

    fn check_failure(&self) -> Result<()> {
        match self.pending_failure.lock().take() {
            Some(message) => {
                tracing::warn!(%message, "injected storage failure");
                Err(Error::storage(message))
            }
            None => Ok(()),
        }
    }

    fn require_user(&self) -> Result<User> {
        self.session.read().clone().ok_or(Error::AuthRequired)
    }

    /// Failure injection and session check shared by every table call.
    fn begin(&self) -> Result<User> {
        self.check_failure()?;
        self.require_user()
    }

    fn owned_invoices(&self, user_id: &str) -> Vec<Invoice> {
        self.invoices
            .read()
            .iter()
            .filter(|invoice| invoice.user_id == user_id)
            .cloned()
            .collect()
    }

    fn owned_clients(&self, user_id: &str) -> Vec<Client> {
        self.clients
            .read()
            .iter()
            .filter(|client| client.user_id == user_id)
            .cloned()
            .collect()
    }

    /// An invoice may only name the user's own client and a built-in or owned template.
    fn check_references(&self, user_id: &str, fields: &NewInvoice) -> Result<()> {
        let client_known = self
            .clients
            .read()
            .iter()
            .any(|c| c.id == fields.client_id && c.user_id == user_id);
        if !client_known {
            return Err(Error::not_found("client", &fields.client_id));
        }
        if let Some(template_id) = fields.template_id.as_deref() {
            let template_known = builtin::builtin_template(template_id).is_some()
                || self
                    .templates
                    .read()
                    .iter()
                    .any(|t| t.id == template_id && t.user_id.as_deref() == Some(user_id));
            if !template_known {
                return Err(Error::not_found("template", template_id));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DataAccess for InMemoryBackend {
    async fn current_user(&self) -> Result<Option<User>> {
        self.check_failure()?;
        Ok(self.session.read().clone())
    }

    async fn sign_out(&self) -> Result<()> {
        self.check_failure()?;
        if self.session.write().take().is_some() {
            tracing::info!("signed out");
            self.auth.publish(AuthEvent::SignedOut);
        }
        Ok(())
    }

    fn subscribe_auth(&self) -> broadcast::Receiver<AuthEvent> {
        self.auth.subscribe()
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        let user = self.begin()?;
        let mut clients = self.owned_clients(&user.id);
        clients.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(clients)
    }

    async fn create_client(&self, fields: NewClient) -> Result<Client> {
        let user = self.begin()?;
        let client = Client::from_new(&user.id, fields);
        tracing::debug!(client_id = %client.id, "client created");
        self.clients.write().push(client.clone());
        Ok(client)
    }

    async fn update_client(&self, id: &str, fields: NewClient) -> Result<Client> {
        let user = self.begin()?;
        let mut clients = self.clients.write();
        let client = clients
            .iter_mut()
            .find(|c| c.id == id && c.user_id == user.id)
            .ok_or_else(|| Error::not_found("client", id))?;
        client.apply(fields);
        Ok(client.clone())
    }

    async fn delete_client(&self, id: &str) -> Result<()> {
        let user = self.begin()?;
        let mut clients = self.clients.write();
        let before = clients.len();
        clients.retain(|c| !(c.id == id && c.user_id == user.id));
        if clients.len() == before {
            return Err(Error::not_found("client", id));
        }
        Ok(())
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        let user = self.begin()?;
        let mut invoices = self.owned_invoices(&user.id);
        invoices.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
        Ok(invoices)
    }

    async fn get_invoice(&self, id: &str) -> Result<Invoice> {
        let user = self.begin()?;
        self.invoices
            .read()
            .iter()
            .find(|i| i.id == id && i.user_id == user.id)
            .cloned()
            .ok_or_else(|| Error::not_found("invoice", id))
    }

    async fn create_invoice(&self, fields: NewInvoice) -> Result<Invoice> {
        let user = self.begin()?;
        self.check_references(&user.id, &fields)?;
        let invoice = Invoice::from_new(&user.id, fields);
        tracing::debug!(
            invoice_id = %invoice.id,
            number = %invoice.invoice_number,
            "invoice created"
        );
        self.invoices.write().push(invoice.clone());
        Ok(invoice)
    }

    async fn update_invoice(&self, id: &str, fields: NewInvoice) -> Result<Invoice> {
        let user = self.begin()?;
        self.check_references(&user.id, &fields)?;
        let mut invoices = self.invoices.write();
        let invoice = invoices
            .iter_mut()
            .find(|i| i.id == id && i.user_id == user.id)
            .ok_or_else(|| Error::not_found("invoice", id))?;
        invoice.apply(fields);
        Ok(invoice.clone())
    }

    async fn delete_invoice(&self, id: &str) -> Result<()> {
        let user = self.begin()?;
        let mut invoices = self.invoices.write();
        let before = invoices.len();
        invoices.retain(|i| !(i.id == id && i.user_id == user.id));
        if invoices.len() == before {
            return Err(Error::not_found("invoice", id));
        }
        Ok(())
    }

    async fn recent_invoices(&self, limit: usize) -> Result<Vec<Invoice>> {
        let user = self.begin()?;
        let mut invoices = self.owned_invoices(&user.id);
        invoices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        invoices.truncate(limit);
        Ok(invoices)
    }

    async fn list_templates(&self) -> Result<Vec<Template>> {
        let user = self.begin()?;
        let mut templates: Vec<Template> = self
            .templates
            .read()
            .iter()
            .filter(|t| t.user_id.as_deref() == Some(user.id.as_str()))
            .cloned()
            .collect();
        templates.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(templates)
    }

    async fn get_template(&self, id: &str) -> Result<Template> {
        if let Some(template) = builtin::builtin_template(id) {
            return Ok(template);
        }
        let user = self.begin()?;
        self.templates
            .read()
            .iter()
            .find(|t| t.id == id && t.user_id.as_deref() == Some(user.id.as_str()))
            .cloned()
            .ok_or_else(|| Error::not_found("template", id))
    }

    async fn create_template(&self, fields: NewTemplate) -> Result<Template> {
        let user = self.begin()?;
        let template = Template::new(Some(user.id), fields);
        tracing::info!(template_id = %template.id, name = %template.name, "template created");
        self.templates.write().push(template.clone());
        Ok(template)
    }

    async fn update_template(&self, id: &str, fields: NewTemplate) -> Result<Template> {
        let user = self.begin()?;
        let mut templates = self.templates.write();
        let template = templates
            .iter_mut()
            .find(|t| t.id == id && t.user_id.as_deref() == Some(user.id.as_str()))
            .ok_or_else(|| Error::not_found("template", id))?;
        template.apply(fields);
        tracing::info!(template_id = %template.id, "template updated");
        Ok(template.clone())
    }

    async fn delete_template(&self, id: &str) -> Result<()> {
        let user = self.begin()?;
        let mut templates = self.templates.write();
        let before = templates.len();
        templates.retain(|t| !(t.id == id && t.user_id.as_deref() == Some(user.id.as_str())));
        if templates.len() == before {
            return Err(Error::not_found("template", id));
        }
        Ok(())
    }

    async fn latest_stats(&self) -> Result<DashboardStats> {
        let user = self.begin()?;
        if let Some(stats) = self
            .stats
            .read()
            .iter()
            .find(|s| s.user_id == user.id)
            .cloned()
        {
            return Ok(stats);
        }
        tracing::debug!(user_id = %user.id, "no stored stats, computing from records");
        Ok(DashboardStats::compute(
            &user.id,
            &self.owned_invoices(&user.id),
            &self.owned_clients(&user.id),
        ))
    }

    async fn recompute_stats(&self) -> Result<DashboardStats> {
        let user = self.begin()?;
        let stats = DashboardStats::compute(
            &user.id,
            &self.owned_invoices(&user.id),
            &self.owned_clients(&user.id),
        );
        let mut stored = self.stats.write();
        stored.retain(|s| s.user_id != user.id);
        stored.push(stats.clone());
        Ok(stats)
    }
}
