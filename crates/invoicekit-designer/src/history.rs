//! Snapshot-based undo/redo
//!
//! The manager keeps full document snapshots and a cursor. The live document
//! is always the snapshot under the cursor.

use crate::model::Document;

/// Default maximum number of snapshots kept
pub const MAX_UNDO_HISTORY: usize = 100;

#[derive(Debug, Clone)]
pub struct HistoryManager {
    snapshots: Vec<Document>,
    cursor: usize,
    limit: usize,
    /// Set after undo/redo so the resulting document change is not recorded
    suppress_next: bool,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(MAX_UNDO_HISTORY)
    }
}

impl HistoryManager {
    /// Start with a single empty document.
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: vec![Document::new()],
            cursor: 0,
            limit: limit.max(1),
            suppress_next: false,
        }
    }

    /// Record a document state.
    ///
    /// Returns `true` when a new snapshot was pushed. A state equal to the
    /// current snapshot is ignored, as is the first attempt after undo/redo.
    pub fn record(&mut self, document: &Document) -> bool {
        if std::mem::take(&mut self.suppress_next) {
            return false;
        }
        if *document == self.snapshots[self.cursor] {
            return false;
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(document.clone());
        self.cursor += 1;

        if self.snapshots.len() > self.limit {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }

        tracing::debug!(cursor = self.cursor, len = self.snapshots.len(), "history recorded");
        true
    }

    /// Step back; at the oldest snapshot the current one is returned unchanged.
    pub fn undo(&mut self) -> &Document {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.suppress_next = true;
        }
        &self.snapshots[self.cursor]
    }

    /// Step forward; at the newest snapshot this is a no-op.
    pub fn redo(&mut self) -> &Document {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
            self.suppress_next = true;
        }
        &self.snapshots[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &Document {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
