//! Data models owned by the data-access collaborator
//!
//! This module provides:
//! - Signed-in user identity
//! - Clients and their contact details
//! - Invoices with line items and derived totals
//! - Persisted design templates
//! - Dashboard statistics and their recomputation

pub mod clients;
pub mod invoices;
pub mod stats;
pub mod templates;

pub use clients::{Client, NewClient};
pub use invoices::{Invoice, InvoiceItem, InvoiceStatus, NewInvoice};
pub use stats::DashboardStats;
pub use templates::{NewTemplate, Template};

use serde::{Deserialize, Serialize};

/// Generates a fresh opaque record identifier.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The signed-in account that owns records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable account identifier
    pub id: String,
    /// Sign-in email address
    pub email: String,
    /// Name shown in the header
    #[serde(default)]
    pub display_name: String,
}

impl User {
    /// Creates a user with a fresh identifier.
    pub fn new(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}
