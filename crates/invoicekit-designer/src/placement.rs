//! Drag/drop placement
//!
//! Turns a palette drop into a new element positioned in canvas space.

use crate::catalog::{CatalogEntry, DEFAULT_LINE_LENGTH};
use crate::model::{Element, Geometry, Point};
use crate::viewport::snap_to_grid;

/// Id of the only drop zone that accepts palette items
pub const CANVAS_DROP_ZONE: &str = "canvas";

/// A palette item released over a drop zone
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    /// Palette id of the dragged item
    pub source_id: String,
    /// Pointer position in screen coordinates
    pub pointer: Point,
    /// Drop zone under the pointer
    pub target_zone: String,
}

impl DropEvent {
    pub fn new(
        source_id: impl Into<String>,
        pointer: Point,
        target_zone: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            pointer,
            target_zone: target_zone.into(),
        }
    }

    /// Drop onto the canvas at `(x, y)` screen coordinates.
    pub fn on_canvas(source_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(source_id, Point::new(x, y), CANVAS_DROP_ZONE)
    }

    pub fn targets_canvas(&self) -> bool {
        self.target_zone == CANVAS_DROP_ZONE
    }
}

/// Top-left position for `entry` dropped at canvas point `at`.
///
/// Shapes are centered on the pointer, lines start at it and text uses it as
/// the top-left corner. With `grid` set, both coordinates are snapped.
pub fn placement_point(entry: &CatalogEntry, at: Point, grid: Option<f64>) -> Point {
    let (dx, dy) = entry.geometry.to_geometry().center_offset();
    let (x, y) = (at.x - dx, at.y - dy);
    match grid {
        Some(grid) => Point::new(snap_to_grid(x, grid), snap_to_grid(y, grid)),
        None => Point::new(x, y),
    }
}

/// Instantiate `entry` for a drop at canvas point `at`.
pub fn place(entry: &CatalogEntry, at: Point, grid: Option<f64>) -> Element {
    let mut element = Element::instantiate(entry, placement_point(entry, at, grid));
    if let Geometry::Line { points } = &mut element.geometry {
        *points = vec![0.0, 0.0, DEFAULT_LINE_LENGTH, 0.0];
    }
    element
}
