//! Data-access collaborator
//!
//! Every persistence call the application makes goes through [`DataAccess`].
//! Calls are scoped to the signed-in user: records owned by someone else are
//! reported as missing, and calls made without a session fail with
//! [`Error::AuthRequired`](crate::Error::AuthRequired).

pub mod builtin;
pub mod memory;

pub use builtin::{builtin_template, builtin_templates, is_builtin_id, BUILTIN_TEMPLATE_IDS};
pub use memory::InMemoryBackend;

use crate::auth::AuthEvent;
use crate::data::{
    Client, DashboardStats, Invoice, NewClient, NewInvoice, NewTemplate, Template, User,
};
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Async storage interface shared by the dashboard, CRUD pages and the editor.
#[async_trait]
pub trait DataAccess: Send + Sync {
    /// Currently signed-in user, if any
    async fn current_user(&self) -> Result<Option<User>>;

    /// End the current session
    async fn sign_out(&self) -> Result<()>;

    /// Receive every subsequent auth-state change
    fn subscribe_auth(&self) -> broadcast::Receiver<AuthEvent>;

    async fn list_clients(&self) -> Result<Vec<Client>>;
    async fn create_client(&self, fields: NewClient) -> Result<Client>;
    async fn update_client(&self, id: &str, fields: NewClient) -> Result<Client>;
    async fn delete_client(&self, id: &str) -> Result<()>;

    async fn list_invoices(&self) -> Result<Vec<Invoice>>;
    async fn get_invoice(&self, id: &str) -> Result<Invoice>;
    async fn create_invoice(&self, fields: NewInvoice) -> Result<Invoice>;
    async fn update_invoice(&self, id: &str, fields: NewInvoice) -> Result<Invoice>;
    async fn delete_invoice(&self, id: &str) -> Result<()>;

    /// Most recent invoices, newest `created_at` first
    async fn recent_invoices(&self, limit: usize) -> Result<Vec<Invoice>>;

    /// Templates owned by the current user, most recently updated first
    async fn list_templates(&self) -> Result<Vec<Template>>;

    /// Fetch a template by id; built-in ids resolve without a storage round trip
    async fn get_template(&self, id: &str) -> Result<Template>;
    async fn create_template(&self, fields: NewTemplate) -> Result<Template>;
    async fn update_template(&self, id: &str, fields: NewTemplate) -> Result<Template>;
    async fn delete_template(&self, id: &str) -> Result<()>;

    /// Stored stats for the current user, recomputed from raw records when
    /// nothing has been stored yet
    async fn latest_stats(&self) -> Result<DashboardStats>;

    /// Recompute stats from raw records and persist them
    async fn recompute_stats(&self) -> Result<DashboardStats>;
}
