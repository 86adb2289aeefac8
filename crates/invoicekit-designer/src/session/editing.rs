//! Document edits: drops, drags, property changes, deletion and undo/redo.

use std::time::Instant;

use super::{EditOutcome, EditorSession, SidebarSnapshot};
use crate::catalog;
use crate::model::{Document, ElementId};
use crate::placement::{self, DropEvent};
use crate::properties::{self, PropertyField};

impl EditorSession {
    /// Record the current document in history.
    pub(crate) fn record(&mut self) -> bool {
        self.history.record(&self.document)
    }

    /// Replace the whole document as one recorded change.
    pub(crate) fn replace_document(&mut self, document: Document) {
        self.discard_pending();
        self.document = document;
        self.selection.clear();
        self.ui.properties_open = false;
        self.record();
    }

    /// Start a palette drag.
    ///
    /// Saves the sidebar state; narrow viewports collapse the sidebar so the
    /// canvas is reachable.
    pub fn begin_drag(&mut self) {
        self.sidebar_stack.push(SidebarSnapshot {
            collapsed: self.ui.sidebar_collapsed,
            active_submenu: self.ui.active_submenu.clone(),
        });
        self.ui.drag_in_progress = true;
        if !self.ui.wide_viewport {
            self.ui.sidebar_collapsed = true;
        }
    }

    /// Finish a drag, restoring the sidebar, then perform the drop if any.
    ///
    /// `None` aborts the drag without touching the document.
    pub fn end_drag(&mut self, drop: Option<&DropEvent>) -> Option<ElementId> {
        if let Some(saved) = self.sidebar_stack.pop() {
            self.ui.sidebar_collapsed = saved.collapsed;
            self.ui.active_submenu = saved.active_submenu;
        }
        self.ui.drag_in_progress = !self.sidebar_stack.is_empty();
        drop.and_then(|event| self.on_drop(event))
    }

    /// Place a palette item dropped on the canvas.
    ///
    /// Ignored when the target is not the canvas, the hand tool is active, an
    /// overlay is open, or the palette id is unknown.
    pub fn on_drop(&mut self, event: &DropEvent) -> Option<ElementId> {
        if !event.targets_canvas() || self.ui.hand_tool || self.ui.overlay_open {
            tracing::debug!(source = %event.source_id, zone = %event.target_zone, "drop ignored");
            return None;
        }
        let Some(found) = catalog::lookup(&event.source_id) else {
            tracing::debug!(source = %event.source_id, "unknown palette id");
            return None;
        };

        self.flush_pending();

        let at = self.viewport.screen_to_canvas(event.pointer);
        let grid = self
            .settings
            .snap_to_grid
            .then_some(f64::from(self.settings.grid_size));
        let element = placement::place(found.entry, at, grid);
        let id = element.id();

        tracing::info!(
            element_id = %id,
            source = found.entry.id,
            catalog = %found.catalog,
            x = element.position.x,
            y = element.position.y,
            "element placed"
        );

        self.document.push(element);
        self.record();
        self.selection.select(&self.document, Some(id));
        self.ui.properties_open = self.ui.wide_viewport;
        Some(id)
    }

    /// Stage a property edit on the selected element.
    pub fn update_property(&mut self, field: PropertyField, raw: &str) -> EditOutcome {
        self.update_property_at(field, raw, Instant::now())
    }

    /// Stage an edit using the field's panel name (e.g. `"fontSize"`).
    pub fn update_property_named(&mut self, name: &str, raw: &str, now: Instant) -> EditOutcome {
        match name.parse::<PropertyField>() {
            Ok(field) => self.update_property_at(field, raw, now),
            Err(err) => {
                tracing::warn!(field = name, "rejected edit: {}", err);
                EditOutcome::Rejected(err)
            }
        }
    }

    /// Stage a property edit as of `now`, restarting the debounce window.
    pub fn update_property_at(
        &mut self,
        field: PropertyField,
        raw: &str,
        now: Instant,
    ) -> EditOutcome {
        let Some(id) = self.selection.selected_id() else {
            return EditOutcome::NoSelection;
        };

        let base = match &self.pending {
            Some(staged) if staged.id() == id => staged.clone(),
            _ => match self.document.get(id) {
                Some(element) => element.clone(),
                None => return EditOutcome::NoSelection,
            },
        };

        let mut staged = base;
        match properties::apply_raw(&mut staged, field, raw) {
            Ok(()) => {
                self.pending = Some(staged);
                self.debounce.arm(now);
                EditOutcome::Staged
            }
            Err(err) => {
                tracing::warn!(element_id = %id, %field, value = raw, "rejected edit: {}", err);
                EditOutcome::Rejected(err)
            }
        }
    }

    /// Drive the debounce timer; commits pending edits once the window has
    /// settled. Returns `true` when a commit happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.debounce.poll(now) {
            return self.commit_pending();
        }
        false
    }

    /// Commit pending edits immediately.
    pub fn flush_pending(&mut self) -> bool {
        self.debounce.cancel();
        self.commit_pending()
    }

    fn commit_pending(&mut self) -> bool {
        let Some(staged) = self.pending.take() else {
            return false;
        };
        let id = staged.id();
        if !self.document.replace(staged) {
            return false;
        }
        let recorded = self.record();
        tracing::debug!(element_id = %id, recorded, "property edits committed");
        recorded
    }

    fn discard_pending(&mut self) {
        self.debounce.cancel();
        if let Some(staged) = self.pending.take() {
            tracing::debug!(element_id = %staged.id(), "pending edits discarded");
        }
    }

    /// Remove the selected element. Returns `false` when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.selected_id() else {
            return false;
        };
        self.discard_pending();
        if self.document.remove(id).is_none() {
            self.selection.clear();
            return false;
        }
        self.selection.clear();
        self.ui.properties_open = false;
        self.record();
        tracing::info!(element_id = %id, "element deleted");
        true
    }

    pub fn undo(&mut self) {
        self.flush_pending();
        let document = self.history.undo().clone();
        self.apply_history(document);
    }

    pub fn redo(&mut self) {
        self.flush_pending();
        let document = self.history.redo().clone();
        self.apply_history(document);
    }

    fn apply_history(&mut self, document: Document) {
        self.document = document;
        // Consumes the suppression flag set by navigation.
        self.record();
        self.selection.retain_in(&self.document);
        self.ui.properties_open = self.selection.has_selection();
    }
}
