//! # InvoiceKit
//!
//! Invoice management with a visual template designer.
//!
//! ## Architecture
//!
//! InvoiceKit is organized as a workspace with multiple crates:
//!
//! 1. **invoicekit-core** - Records, error taxonomy, the `DataAccess` trait, auth events
//! 2. **invoicekit-settings** - Editor settings and their JSON/TOML persistence
//! 3. **invoicekit-designer** - Canvas model, palette, history, placement and the editor session
//! 4. **invoicekit** - This crate; re-exports and logging setup
//!
//! ## Features
//!
//! - **Clients and Invoices**: Per-user records with derived dashboard stats
//! - **Template Designer**: Drag palette items onto a fixed-size page, edit properties, undo/redo
//! - **Placeholders**: Text slots bound to invoice fields such as `{{invoice_number}}`
//! - **Portable Templates**: JSON import/export with shape validation
//! - **Thumbnails**: SVG previews stored with each saved template

pub use invoicekit_core::data;
pub use invoicekit_designer as designer;
pub use invoicekit_settings as settings;

pub use invoicekit_core::{
    builtin_template, builtin_templates, AuthDispatcher, AuthEvent, Client, DashboardStats,
    DataAccess, Error, FormatError, InMemoryBackend, Invoice, InvoiceItem, InvoiceStatus,
    NewClient, NewInvoice, NewTemplate, Result, Template, User,
};

pub use invoicekit_designer::{
    DropEvent, EditOutcome, EditorSession, Element, ElementId, ElementKind, PortableTemplate,
    PropertyField, TemplateMeta,
};

pub use invoicekit_settings::{EditorSettings, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Calling this again once a subscriber is installed returns an error
/// instead of panicking.
pub fn init_logging() -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("logging is already initialized")?;

    tracing::info!(version = VERSION, "logging initialized");
    Ok(())
}
