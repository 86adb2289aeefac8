//! Canvas element model
//!
//! A [`Document`] is an ordered list of [`Element`]s; insertion order is paint
//! order, so later elements draw on top.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

mod document;
mod element;
mod geometry;
mod text;

pub use document::Document;
pub use element::{Element, Position, Style};
pub use geometry::{Bounds, Geometry};
pub use text::{FontStyle, TextAlign, TextProps, LINE_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Opaque element identifier, stable for the element's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for ElementId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Line,
    DottedLine,
    Rect,
    RoundedRect,
    Circle,
    Triangle,
    Star,
    Pentagon,
    Text,
    Placeholder,
}

impl ElementKind {
    /// Kinds that carry [`TextProps`].
    pub fn is_text(&self) -> bool {
        matches!(self, ElementKind::Text | ElementKind::Placeholder)
    }

    pub fn is_line(&self) -> bool {
        matches!(self, ElementKind::Line | ElementKind::DottedLine)
    }

    /// Side count fixed by the kind, for polygon kinds.
    pub fn polygon_sides(&self) -> Option<u32> {
        match self {
            ElementKind::Triangle => Some(3),
            ElementKind::Pentagon => Some(5),
            _ => None,
        }
    }

    /// Whether `geometry` has the shape this kind requires.
    pub fn accepts(&self, geometry: &Geometry) -> bool {
        match (self, geometry) {
            (ElementKind::Triangle | ElementKind::Pentagon, Geometry::Polygon { sides, .. }) => {
                self.polygon_sides() == Some(*sides)
            }
            _ => matches!(
                (self, geometry),
                (ElementKind::Line | ElementKind::DottedLine, Geometry::Line { .. })
                    | (ElementKind::Rect | ElementKind::RoundedRect, Geometry::Rect { .. })
                    | (ElementKind::Circle, Geometry::Circle { .. })
                    | (ElementKind::Star, Geometry::Star { .. })
                    | (ElementKind::Text | ElementKind::Placeholder, Geometry::Text)
            ),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Line => "Line",
            ElementKind::DottedLine => "Dotted Line",
            ElementKind::Rect => "Rectangle",
            ElementKind::RoundedRect => "Rounded Rectangle",
            ElementKind::Circle => "Circle",
            ElementKind::Triangle => "Triangle",
            ElementKind::Star => "Star",
            ElementKind::Pentagon => "Pentagon",
            ElementKind::Text => "Text",
            ElementKind::Placeholder => "Placeholder",
        };
        f.write_str(name)
    }
}
