//! Invoices, their line items, and derived totals.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::new_record_id;

/// Lifecycle state of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet sent to the client
    #[default]
    Draft,
    /// Sent and awaiting payment
    Sent,
    /// Payment received
    Paid,
    /// Past due date without payment
    Overdue,
}

impl InvoiceStatus {
    /// Whether money is still owed on an invoice in this state.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, InvoiceStatus::Sent | InvoiceStatus::Overdue)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Sent => write!(f, "sent"),
            Self::Paid => write!(f, "paid"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

/// One billed line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl InvoiceItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Line amount (quantity × unit price).
    pub fn amount(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// A stored invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub user_id: String,
    pub client_id: String,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    /// Tax rate in percent
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub notes: String,
    /// Design template used to lay out this invoice
    #[serde(default)]
    pub template_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Invoice fields supplied by the UI on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub client_id: String,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub template_id: Option<String>,
}

impl Invoice {
    /// Builds a stored invoice owned by `user_id`.
    pub fn from_new(user_id: &str, fields: NewInvoice) -> Self {
        let now = Utc::now();
        Self {
            id: new_record_id(),
            user_id: user_id.to_string(),
            client_id: fields.client_id,
            invoice_number: fields.invoice_number,
            issue_date: fields.issue_date,
            due_date: fields.due_date,
            status: fields.status,
            items: fields.items,
            tax_rate: fields.tax_rate,
            notes: fields.notes,
            template_id: fields.template_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the editable fields and bumps `updated_at`.
    pub fn apply(&mut self, fields: NewInvoice) {
        self.client_id = fields.client_id;
        self.invoice_number = fields.invoice_number;
        self.issue_date = fields.issue_date;
        self.due_date = fields.due_date;
        self.status = fields.status;
        self.items = fields.items;
        self.tax_rate = fields.tax_rate;
        self.notes = fields.notes;
        self.template_id = fields.template_id;
        self.updated_at = Utc::now();
    }

    /// Sum of all line amounts before tax.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(InvoiceItem::amount).sum()
    }

    /// Tax owed on the subtotal.
    pub fn tax(&self) -> f64 {
        self.subtotal() * self.tax_rate / 100.0
    }

    /// Amount due including tax.
    pub fn total(&self) -> f64 {
        self.subtotal() + self.tax()
    }
}
