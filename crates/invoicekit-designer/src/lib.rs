//! # InvoiceKit Designer
//!
//! This crate provides the invoice template editor: a fixed-size page on which
//! users place lines, shapes, styled text and data placeholders, edit their
//! properties, and save the result as a reusable template.
//!
//! ## Core Components
//!
//! ### Design Elements
//! - **Catalog**: Palette entries (lines, shapes, text styles, placeholders)
//! - **Model**: Elements, geometry, text properties and the ordered document
//! - **Viewport**: Zoom and screen-to-page coordinate mapping
//! - **Renderer**: SVG frames and thumbnails
//!
//! ### Editing
//! - **Placement**: Drop handling, centering and grid snapping
//! - **Properties**: Typed, validated edits from the properties panel
//! - **History/Undo-Redo**: Bounded document snapshots
//! - **Keyboard**: Shortcut resolution with text-entry suppression
//!
//! ### Persistence
//! - **Templates**: Save, update and load through the data-access layer
//! - **Serialization**: Portable JSON import and export
//!
//! ## Architecture
//!
//! ```text
//! EditorSession (all editor state)
//!   ├── Document ── Elements (paint order)
//!   ├── HistoryManager (snapshots)
//!   ├── SelectionManager
//!   ├── Viewport
//!   ├── DebounceTimer (pending property edits)
//!   └── SvgRenderer
//!
//! templates ── DataAccess (invoicekit-core)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use invoicekit_designer::{DropEvent, EditorSession, PropertyField};
//!
//! let mut session = EditorSession::default();
//! let id = session.on_drop(&DropEvent::on_canvas("heading", 200.0, 200.0));
//! assert!(id.is_some());
//!
//! session.update_property(PropertyField::Content, "Invoice Summary");
//! session.flush_pending();
//! assert_eq!(session.document().len(), 1);
//! ```

pub mod catalog;
pub mod debounce;
pub mod history;
pub mod keyboard;
pub mod model;
pub mod placement;
pub mod properties;
pub mod renderer;
pub mod selection;
pub mod serialization;
pub mod session;
pub mod templates;
pub mod viewport;

pub use catalog::{Catalog, CatalogEntry, CatalogMatch};
pub use debounce::DebounceTimer;
pub use history::{HistoryManager, MAX_UNDO_HISTORY};
pub use keyboard::{EditorCommand, Focus, Key, KeyEvent};
pub use model::{
    Bounds, Document, Element, ElementId, ElementKind, FontStyle, Geometry, Point, Position,
    Style, TextAlign, TextProps,
};
pub use placement::{DropEvent, CANVAS_DROP_ZONE};
pub use properties::{PropertyError, PropertyField, PropertyValue};
pub use renderer::{CanvasRenderer, SvgRenderer};
pub use selection::SelectionManager;
pub use serialization::PortableTemplate;
pub use session::{
    ActiveTemplate, EditOutcome, EditorSession, Notification, NotificationLevel, UiState,
};
pub use templates::TemplateMeta;
pub use viewport::{snap_to_grid, PageSize, Viewport};
