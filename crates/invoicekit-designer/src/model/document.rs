use std::collections::HashSet;

use invoicekit_core::FormatError;
use serde::{Deserialize, Serialize};

use super::{Element, ElementId};

/// Ordered element list; index order is paint order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Parse a serialized element array, validating each element.
    ///
    /// Element ids must be unique within the array.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, FormatError> {
        let items = value.as_array().ok_or(FormatError::ElementsNotArray)?;
        let mut elements = Vec::with_capacity(items.len());
        let mut seen = HashSet::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let element: Element =
                serde_json::from_value(item.clone()).map_err(|e| FormatError::InvalidElement {
                    index,
                    reason: e.to_string(),
                })?;
            element
                .validate()
                .map_err(|reason| FormatError::InvalidElement { index, reason })?;
            if !seen.insert(element.id()) {
                return Err(FormatError::InvalidElement {
                    index,
                    reason: format!("duplicate id {}", element.id()),
                });
            }
            elements.push(element);
        }
        Ok(Self { elements })
    }

    pub fn to_value(&self) -> serde_json::Value {
        // Element serialization has no fallible fields.
        serde_json::to_value(&self.elements)
            .unwrap_or_else(|_| serde_json::Value::Array(Vec::new()))
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|e| e.id() == id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Append on top of everything else.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Swap in a new version of an existing element, keeping its paint slot.
    pub fn replace(&mut self, element: Element) -> bool {
        match self.get_mut(element.id()) {
            Some(slot) => {
                *slot = element;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(index))
    }

    /// Topmost element whose bounds contain the point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.bounds().contains(x, y))
            .map(Element::id)
    }
}
