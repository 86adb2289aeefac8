//! Palette catalogs
//!
//! Static, read-only tables mapping a palette id to the element it places.
//! Entries are never mutated; [`Element::instantiate`](crate::model::Element::instantiate)
//! copies everything out of them.

use std::fmt;

use crate::model::{ElementKind, FontStyle, Geometry, Style, TextAlign, TextProps};

/// Length of a freshly placed line, in canvas units
pub const DEFAULT_LINE_LENGTH: f64 = 150.0;

const LINE_POINTS: &[f64] = &[0.0, 0.0, DEFAULT_LINE_LENGTH, 0.0];

/// Which palette an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Lines,
    Shapes,
    TextStyles,
    Placeholders,
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Catalog::Lines => write!(f, "lines"),
            Catalog::Shapes => write!(f, "shapes"),
            Catalog::TextStyles => write!(f, "text styles"),
            Catalog::Placeholders => write!(f, "placeholders"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryGeometry {
    Line {
        points: &'static [f64],
    },
    Rect {
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    Circle {
        radius: f64,
    },
    Polygon {
        sides: u32,
        radius: f64,
    },
    Star {
        num_points: u32,
        inner_radius: f64,
        outer_radius: f64,
    },
    Text,
}

impl EntryGeometry {
    pub fn to_geometry(&self) -> Geometry {
        match *self {
            EntryGeometry::Line { points } => Geometry::Line {
                points: points.to_vec(),
            },
            EntryGeometry::Rect {
                width,
                height,
                corner_radius,
            } => Geometry::Rect {
                width,
                height,
                corner_radius,
            },
            EntryGeometry::Circle { radius } => Geometry::Circle { radius },
            EntryGeometry::Polygon { sides, radius } => Geometry::Polygon { sides, radius },
            EntryGeometry::Star {
                num_points,
                inner_radius,
                outer_radius,
            } => Geometry::Star {
                num_points,
                inner_radius,
                outer_radius,
            },
            EntryGeometry::Text => Geometry::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub dash: &'static [f64],
}

impl EntryStyle {
    pub fn to_style(&self) -> Style {
        Style {
            fill: self.fill.to_string(),
            stroke: self.stroke.to_string(),
            stroke_width: self.stroke_width,
            dash: self.dash.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryText {
    pub content: &'static str,
    pub font_size: f64,
    pub font_style: FontStyle,
    pub width: f64,
}

impl EntryText {
    pub fn to_props(&self) -> TextProps {
        TextProps {
            content: self.content.to_string(),
            font_size: self.font_size,
            font_family: FONT_FAMILY.to_string(),
            font_style: self.font_style,
            width: self.width,
            align: TextAlign::Left,
        }
    }
}

/// Default element for one palette item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    /// Stable palette id
    pub id: &'static str,
    /// Label shown in the palette
    pub label: &'static str,
    pub kind: ElementKind,
    pub geometry: EntryGeometry,
    pub style: EntryStyle,
    pub text: Option<EntryText>,
}

/// Result of resolving a palette id
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogMatch {
    pub catalog: Catalog,
    pub entry: &'static CatalogEntry,
}

const FONT_FAMILY: &str = "Helvetica";
const INK: &str = "#1f2937";
const SHAPE_FILL: &str = "#dbeafe";
const SHAPE_STROKE: &str = "#1e40af";

const fn line_style(dash: &'static [f64]) -> EntryStyle {
    EntryStyle {
        fill: "transparent",
        stroke: INK,
        stroke_width: 2.0,
        dash,
    }
}

const SHAPE_STYLE: EntryStyle = EntryStyle {
    fill: SHAPE_FILL,
    stroke: SHAPE_STROKE,
    stroke_width: 2.0,
    dash: &[],
};

const TEXT_STYLE: EntryStyle = EntryStyle {
    fill: INK,
    stroke: "transparent",
    stroke_width: 0.0,
    dash: &[],
};

pub static LINES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "line-solid",
        label: "Solid Line",
        kind: ElementKind::Line,
        geometry: EntryGeometry::Line {
            points: LINE_POINTS,
        },
        style: line_style(&[]),
        text: None,
    },
    CatalogEntry {
        id: "line-dotted",
        label: "Dotted Line",
        kind: ElementKind::DottedLine,
        geometry: EntryGeometry::Line {
            points: LINE_POINTS,
        },
        style: line_style(&[5.0, 5.0]),
        text: None,
    },
    CatalogEntry {
        id: "line-dashed",
        label: "Dashed Line",
        kind: ElementKind::DottedLine,
        geometry: EntryGeometry::Line {
            points: LINE_POINTS,
        },
        style: line_style(&[12.0, 6.0]),
        text: None,
    },
];

pub static SHAPES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "rect",
        label: "Rectangle",
        kind: ElementKind::Rect,
        geometry: EntryGeometry::Rect {
            width: 100.0,
            height: 60.0,
            corner_radius: 0.0,
        },
        style: SHAPE_STYLE,
        text: None,
    },
    CatalogEntry {
        id: "rounded-rect",
        label: "Rounded Rectangle",
        kind: ElementKind::RoundedRect,
        geometry: EntryGeometry::Rect {
            width: 100.0,
            height: 60.0,
            corner_radius: 10.0,
        },
        style: SHAPE_STYLE,
        text: None,
    },
    CatalogEntry {
        id: "circle",
        label: "Circle",
        kind: ElementKind::Circle,
        geometry: EntryGeometry::Circle { radius: 40.0 },
        style: SHAPE_STYLE,
        text: None,
    },
    CatalogEntry {
        id: "triangle",
        label: "Triangle",
        kind: ElementKind::Triangle,
        geometry: EntryGeometry::Polygon {
            sides: 3,
            radius: 45.0,
        },
        style: SHAPE_STYLE,
        text: None,
    },
    CatalogEntry {
        id: "star",
        label: "Star",
        kind: ElementKind::Star,
        geometry: EntryGeometry::Star {
            num_points: 5,
            inner_radius: 20.0,
            outer_radius: 40.0,
        },
        style: SHAPE_STYLE,
        text: None,
    },
    CatalogEntry {
        id: "pentagon",
        label: "Pentagon",
        kind: ElementKind::Pentagon,
        geometry: EntryGeometry::Polygon {
            sides: 5,
            radius: 40.0,
        },
        style: SHAPE_STYLE,
        text: None,
    },
];

const fn text_entry(
    id: &'static str,
    label: &'static str,
    content: &'static str,
    font_size: f64,
    font_style: FontStyle,
) -> CatalogEntry {
    CatalogEntry {
        id,
        label,
        kind: ElementKind::Text,
        geometry: EntryGeometry::Text,
        style: TEXT_STYLE,
        text: Some(EntryText {
            content,
            font_size,
            font_style,
            width: 300.0,
        }),
    }
}

pub static TEXT_STYLES: &[CatalogEntry] = &[
    text_entry("heading", "Heading", "Heading Text", 28.0, FontStyle::Bold),
    text_entry("subheading", "Subheading", "Subheading Text", 20.0, FontStyle::Bold),
    text_entry("body", "Body", "Body text", 14.0, FontStyle::Normal),
    text_entry("caption", "Caption", "Caption text", 11.0, FontStyle::Italic),
];

const fn placeholder_entry(
    id: &'static str,
    label: &'static str,
    token: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        id,
        label,
        kind: ElementKind::Placeholder,
        geometry: EntryGeometry::Text,
        style: TEXT_STYLE,
        text: Some(EntryText {
            content: token,
            font_size: 14.0,
            font_style: FontStyle::Normal,
            width: 200.0,
        }),
    }
}

pub static PLACEHOLDERS: &[CatalogEntry] = &[
    placeholder_entry("invoice-number", "Invoice No", "{{invoice_number}}"),
    placeholder_entry("invoice-date", "Invoice Date", "{{invoice_date}}"),
    placeholder_entry("due-date", "Due Date", "{{due_date}}"),
    placeholder_entry("client-name", "Client Name", "{{client_name}}"),
    placeholder_entry("client-email", "Client Email", "{{client_email}}"),
    placeholder_entry("client-address", "Client Address", "{{client_address}}"),
    placeholder_entry("company-name", "Company Name", "{{company_name}}"),
    placeholder_entry("subtotal", "Subtotal", "{{subtotal}}"),
    placeholder_entry("tax", "Tax", "{{tax}}"),
    placeholder_entry("total-amount", "Total Amount", "{{total_amount}}"),
    placeholder_entry("notes", "Notes", "{{notes}}"),
];

fn find(catalog: Catalog, table: &'static [CatalogEntry], id: &str) -> Option<CatalogMatch> {
    table
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| CatalogMatch { catalog, entry })
}

/// Resolve a palette id: lines and shapes first, then text styles, then
/// placeholders.
pub fn lookup(id: &str) -> Option<CatalogMatch> {
    find(Catalog::Lines, LINES, id)
        .or_else(|| find(Catalog::Shapes, SHAPES, id))
        .or_else(|| find(Catalog::TextStyles, TEXT_STYLES, id))
        .or_else(|| find(Catalog::Placeholders, PLACEHOLDERS, id))
}

/// Placeholder entry by id.
pub fn placeholder(id: &str) -> Option<&'static CatalogEntry> {
    PLACEHOLDERS.iter().find(|entry| entry.id == id)
}

/// Every palette table in lookup order.
pub fn all() -> impl Iterator<Item = CatalogMatch> {
    [
        (Catalog::Lines, LINES),
        (Catalog::Shapes, SHAPES),
        (Catalog::TextStyles, TEXT_STYLES),
        (Catalog::Placeholders, PLACEHOLDERS),
    ]
    .into_iter()
    .flat_map(|(catalog, table)| table.iter().map(move |entry| CatalogMatch { catalog, entry }))
}
