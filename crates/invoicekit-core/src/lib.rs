//! # InvoiceKit Core
//!
//! Core records, the error taxonomy, and the data-access collaborator for
//! InvoiceKit. The editor and the CRUD pages only ever talk to storage through
//! [`DataAccess`].

pub mod access;
pub mod auth;
pub mod data;
pub mod error;

pub use access::{
    builtin_template, builtin_templates, is_builtin_id, DataAccess, InMemoryBackend,
    BUILTIN_TEMPLATE_IDS,
};
pub use auth::{AuthDispatcher, AuthEvent};
pub use data::{
    Client, DashboardStats, Invoice, InvoiceItem, InvoiceStatus, NewClient, NewInvoice,
    NewTemplate, Template, User,
};
pub use error::{Error, FormatError, Result};
