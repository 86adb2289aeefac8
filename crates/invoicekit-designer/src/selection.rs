use crate::model::{Document, ElementId};

/// Tracks the single selected element.
///
/// Selecting an id that is not in the document behaves like clearing the
/// selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<ElementId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use invoicekit_designer::selection::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected_id
    }

    pub fn has_selection(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Select `id` if it exists in `document`, otherwise clear.
    ///
    /// Returns the resulting selection.
    pub fn select(&mut self, document: &Document, id: Option<ElementId>) -> Option<ElementId> {
        self.selected_id = id.filter(|id| document.contains(*id));
        self.selected_id
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Drop the selection if its element no longer exists.
    pub fn retain_in(&mut self, document: &Document) {
        if let Some(id) = self.selected_id {
            if !document.contains(id) {
                self.selected_id = None;
            }
        }
    }
}
