//! Editor session for UI integration.
//!
//! Everything the template editor needs between events lives in an explicit
//! [`EditorSession`]: the document, undo history, selection, pending property
//! edits and the ambient UI flags (open submenu, hand tool, overlays).
//!
//! This module is split into submodules:
//! - `editing`: drops, drags, property edits, deletion and undo/redo
//! - `file_io`: new design, template load/save, import/export

mod editing;
mod file_io;

use std::borrow::Cow;
use std::time::Duration;

use invoicekit_settings::EditorSettings;

use crate::debounce::DebounceTimer;
use crate::history::HistoryManager;
use crate::keyboard::{self, EditorCommand, Focus, KeyEvent};
use crate::model::{Document, Element, ElementId, Point};
use crate::properties::PropertyError;
use crate::renderer::{CanvasRenderer, SvgRenderer};
use crate::selection::SelectionManager;
use crate::templates::TemplateMeta;
use crate::viewport::Viewport;

/// Ambient UI flags the editor consults on every operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Sidebar submenu currently expanded (e.g. "shapes", "placeholders")
    pub active_submenu: Option<String>,
    pub sidebar_collapsed: bool,
    /// Full-screen overlay used on narrow viewports
    pub overlay_open: bool,
    /// Pan tool active; drops are ignored while it is
    pub hand_tool: bool,
    pub drag_in_progress: bool,
    pub properties_open: bool,
    pub wide_viewport: bool,
}

/// Sidebar state saved at drag start and restored at drag end
#[derive(Debug, Clone, PartialEq)]
struct SidebarSnapshot {
    collapsed: bool,
    active_submenu: Option<String>,
}

/// Result of a property edit request
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Accepted into the edit buffer; committed when the debounce window settles
    Staged,
    /// Invalid input; the prior value is kept
    Rejected(PropertyError),
    /// Nothing is selected
    NoSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// User-facing feedback produced by storage and file operations
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Template the document was loaded from or last saved as
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTemplate {
    pub id: String,
    pub name: String,
}

/// Template editor state
#[derive(Debug, Clone)]
pub struct EditorSession {
    settings: EditorSettings,
    document: Document,
    history: HistoryManager,
    selection: SelectionManager,
    viewport: Viewport,
    ui: UiState,
    sidebar_stack: Vec<SidebarSnapshot>,
    /// Selected element with uncommitted property edits applied
    pending: Option<Element>,
    debounce: DebounceTimer,
    active_template: Option<ActiveTemplate>,
    meta: TemplateMeta,
    renderer: SvgRenderer,
    notifications: Vec<Notification>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl EditorSession {
    /// Session over `settings`, or the defaults when they fail validation.
    pub fn new(settings: EditorSettings) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(err) => {
                tracing::warn!("invalid editor settings, using defaults: {}", err);
                EditorSettings::default()
            }
        };
        Self {
            document: Document::new(),
            history: HistoryManager::new(settings.history_limit),
            selection: SelectionManager::new(),
            viewport: Viewport::new(&settings),
            ui: UiState::default(),
            sidebar_stack: Vec::new(),
            pending: None,
            debounce: DebounceTimer::new(Duration::from_millis(settings.debounce_ms)),
            active_template: None,
            meta: TemplateMeta::default(),
            renderer: SvgRenderer::new(),
            notifications: Vec::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Committed document (without pending edits).
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn active_template(&self) -> Option<&ActiveTemplate> {
        self.active_template.as_ref()
    }

    pub fn meta(&self) -> &TemplateMeta {
        &self.meta
    }

    /// Set the name and description used by the next save.
    pub fn set_meta(&mut self, meta: TemplateMeta) {
        self.meta = meta;
    }

    pub fn has_pending_edit(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drain feedback produced since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    // Ambient UI flags

    pub fn snap_enabled(&self) -> bool {
        self.settings.snap_to_grid
    }

    pub fn toggle_snap(&mut self) {
        self.settings.snap_to_grid = !self.settings.snap_to_grid;
        tracing::debug!(snap = self.settings.snap_to_grid, "grid snap toggled");
    }

    pub fn set_hand_tool(&mut self, active: bool) {
        self.ui.hand_tool = active;
    }

    pub fn set_overlay_open(&mut self, open: bool) {
        self.ui.overlay_open = open;
    }

    pub fn set_active_submenu(&mut self, submenu: Option<String>) {
        self.ui.active_submenu = submenu;
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.ui.sidebar_collapsed = collapsed;
    }

    /// Record the host viewport width in pixels.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.ui.wide_viewport = self.settings.is_wide_viewport(width);
    }

    fn close_overlays(&mut self) {
        self.ui.overlay_open = false;
        self.ui.active_submenu = None;
    }

    // Selection

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selection.selected_id()
    }

    /// Selected element as currently displayed, including pending edits.
    pub fn selected_element(&self) -> Option<&Element> {
        let id = self.selection.selected_id()?;
        match &self.pending {
            Some(staged) if staged.id() == id => Some(staged),
            _ => self.document.get(id),
        }
    }

    /// Select an element, or clear with `None`.
    ///
    /// Pending edits are committed first. A non-empty selection opens the
    /// properties panel; an empty one (including unknown ids) closes it.
    pub fn select(&mut self, id: Option<ElementId>) -> Option<ElementId> {
        if id != self.selection.selected_id() {
            self.flush_pending();
        }
        let selected = self.selection.select(&self.document, id);
        self.ui.properties_open = selected.is_some();
        selected
    }

    /// Select the topmost element under a screen point.
    pub fn select_at(&mut self, screen_x: f64, screen_y: f64) -> Option<ElementId> {
        let p = self
            .viewport
            .screen_to_canvas(Point::new(screen_x, screen_y));
        let hit = self.document.hit_test(p.x, p.y);
        self.select(hit)
    }

    // Rendering

    /// Document with pending edits applied, for live rendering.
    pub fn preview(&self) -> Cow<'_, Document> {
        match &self.pending {
            Some(staged) => {
                let mut doc = self.document.clone();
                doc.replace(staged.clone());
                Cow::Owned(doc)
            }
            None => Cow::Borrowed(&self.document),
        }
    }

    /// SVG frame of the preview with the selection outlined.
    pub fn render(&self) -> String {
        let renderer = self
            .renderer
            .clone()
            .with_highlight(self.selection.selected_id());
        renderer.render(
            self.preview().elements(),
            self.viewport.page(),
            self.viewport.zoom(),
        )
    }

    // Keyboard

    /// Run the shortcut bound to `event`, if any.
    pub fn handle_key(&mut self, event: &KeyEvent, focus: Focus) -> Option<EditorCommand> {
        let command = keyboard::resolve(event, focus)?;
        match command {
            EditorCommand::DeleteSelected => {
                if !self.delete_selected() {
                    return None;
                }
            }
            EditorCommand::Escape => {
                if self.selection.has_selection() {
                    self.select(None);
                } else {
                    self.close_overlays();
                }
            }
            EditorCommand::ToggleSnap => self.toggle_snap(),
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
        }
        Some(command)
    }
}
