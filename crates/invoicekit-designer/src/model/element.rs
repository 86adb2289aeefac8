use serde::{Deserialize, Serialize};

use super::{Bounds, ElementId, ElementKind, Geometry, Point, TextProps};
use crate::catalog::{self, CatalogEntry};

/// Canvas-space placement, unscaled by zoom
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    /// Degrees, clockwise
    #[serde(default)]
    pub rotation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    /// Alternating dash and gap lengths; empty for a solid stroke
    pub dash: Vec<f64>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: "transparent".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
            dash: Vec::new(),
        }
    }
}

/// One placeable unit on the canvas.
///
/// `id` and `kind` are fixed at creation. A placeholder's `placeholder_id`
/// always names an entry in the placeholder catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    id: ElementId,
    kind: ElementKind,
    pub geometry: Geometry,
    #[serde(flatten)]
    pub position: Position,
    #[serde(default)]
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder_id: Option<String>,
}

impl Element {
    /// Build a new element from a palette entry at `at`.
    ///
    /// Every nested value is copied out of the static entry, so instances never
    /// share point lists or dash patterns.
    pub fn instantiate(entry: &CatalogEntry, at: Point) -> Self {
        let placeholder_id = (entry.kind == ElementKind::Placeholder).then(|| entry.id.to_string());
        Self {
            id: ElementId::new(),
            kind: entry.kind,
            geometry: entry.geometry.to_geometry(),
            position: Position {
                x: at.x,
                y: at.y,
                rotation: 0.0,
            },
            style: entry.style.to_style(),
            text: entry.text.as_ref().map(|t| t.to_props()),
            placeholder_id,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn placeholder_id(&self) -> Option<&str> {
        self.placeholder_id.as_deref()
    }

    /// Axis-aligned box in canvas space, ignoring rotation.
    pub fn bounds(&self) -> Bounds {
        let local = match (&self.geometry, &self.text) {
            (Geometry::Text, Some(text)) => Bounds::new(0.0, 0.0, text.width, text.height()),
            (geometry, _) => geometry
                .local_bounds()
                .unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0)),
        };
        local.translated(self.position.x, self.position.y)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Structural checks applied to elements read from outside the editor.
    pub fn validate(&self) -> Result<(), String> {
        if !self.kind.accepts(&self.geometry) {
            return Err(format!("geometry does not match kind '{}'", self.kind));
        }
        if self.kind.is_text() != self.text.is_some() {
            return Err(format!("text properties do not match kind '{}'", self.kind));
        }
        if let Geometry::Line { points } = &self.geometry {
            if points.len() < 4 || points.len() % 2 != 0 {
                return Err(
                    "line needs an even number of coordinates, at least two points".to_string(),
                );
            }
        }
        match (self.kind, self.placeholder_id.as_deref()) {
            (ElementKind::Placeholder, Some(id)) if catalog::placeholder(id).is_some() => Ok(()),
            (ElementKind::Placeholder, Some(id)) => Err(format!("unknown placeholder '{id}'")),
            (ElementKind::Placeholder, None) => {
                Err("placeholder without placeholderId".to_string())
            }
            (_, Some(_)) => Err("placeholderId on a non-placeholder element".to_string()),
            (_, None) => Ok(()),
        }
    }
}
