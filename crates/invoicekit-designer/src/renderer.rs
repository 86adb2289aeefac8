//! Canvas rendering
//!
//! [`CanvasRenderer`] is the seam between the editor and whatever paints the
//! page. [`SvgRenderer`] emits one SVG node per element in paint order and
//! produces the `data:` URL thumbnails stored with saved templates.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use invoicekit_core::Result;
use std::fmt::Write as _;

use crate::model::{Element, ElementId, Geometry, TextAlign, TextProps, LINE_HEIGHT};
use crate::viewport::PageSize;

/// Scale applied to the page when producing thumbnails
pub const THUMBNAIL_SCALE: f64 = 0.25;

const SELECTION_COLOR: &str = "#f59e0b";

pub trait CanvasRenderer {
    type Frame;

    /// Paint `elements` onto a page scaled by `zoom`.
    fn render(&self, elements: &[Element], page: PageSize, zoom: f64) -> Self::Frame;

    /// Small preview image as a `data:` URL.
    fn thumbnail(&self, elements: &[Element], page: PageSize) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub background: String,
    /// Element drawn with a selection outline
    pub highlight: Option<ElementId>,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            highlight: None,
        }
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_highlight(mut self, id: Option<ElementId>) -> Self {
        self.highlight = id;
        self
    }

    fn render_element(&self, out: &mut String, element: &Element) {
        let pos = element.position;
        let style = &element.style;
        let _ = write!(
            out,
            r#"<g data-id="{}" transform="translate({} {}) rotate({})">"#,
            element.id(),
            fmt_num(pos.x),
            fmt_num(pos.y),
            fmt_num(pos.rotation)
        );

        let paint = format!(
            r#"fill="{}" stroke="{}" stroke-width="{}"{}"#,
            escape_xml(&style.fill),
            escape_xml(&style.stroke),
            fmt_num(style.stroke_width),
            dash_attr(&style.dash)
        );

        match &element.geometry {
            Geometry::Line { points } => {
                let _ = write!(
                    out,
                    r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"{}/>"#,
                    point_list(points.chunks_exact(2).map(|p| (p[0], p[1]))),
                    escape_xml(&style.stroke),
                    fmt_num(style.stroke_width),
                    dash_attr(&style.dash)
                );
            }
            Geometry::Rect {
                width,
                height,
                corner_radius,
            } => {
                let _ = write!(
                    out,
                    r#"<rect width="{}" height="{}" rx="{}" {}/>"#,
                    fmt_num(*width),
                    fmt_num(*height),
                    fmt_num(*corner_radius),
                    paint
                );
            }
            Geometry::Circle { radius } => {
                let r = fmt_num(*radius);
                let _ = write!(out, r#"<circle cx="{r}" cy="{r}" r="{r}" {paint}/>"#);
            }
            Geometry::Polygon { .. } | Geometry::Star { .. } => {
                let _ = write!(
                    out,
                    r#"<polygon points="{}" {}/>"#,
                    point_list(element.geometry.vertices().into_iter()),
                    paint
                );
            }
            Geometry::Text => {
                if let Some(text) = &element.text {
                    render_text(out, text, &style.fill);
                }
            }
        }

        if self.highlight == Some(element.id()) {
            let b = element.bounds();
            let _ = write!(
                out,
                r#"<rect x="-2" y="-2" width="{}" height="{}" fill="none" stroke="{}" stroke-dasharray="4 2"/>"#,
                fmt_num(b.width() + 4.0),
                fmt_num(b.height() + 4.0),
                SELECTION_COLOR
            );
        }

        out.push_str("</g>");
    }
}

impl CanvasRenderer for SvgRenderer {
    type Frame = String;

    fn render(&self, elements: &[Element], page: PageSize, zoom: f64) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            fmt_num(page.width * zoom),
            fmt_num(page.height * zoom),
            fmt_num(page.width),
            fmt_num(page.height)
        );
        let _ = write!(
            out,
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            fmt_num(page.width),
            fmt_num(page.height),
            escape_xml(&self.background)
        );
        for element in elements {
            self.render_element(&mut out, element);
        }
        out.push_str("</svg>");
        out
    }

    fn thumbnail(&self, elements: &[Element], page: PageSize) -> Result<String> {
        let plain = Self {
            highlight: None,
            ..self.clone()
        };
        let svg = plain.render(elements, page, THUMBNAIL_SCALE);
        Ok(format!(
            "data:image/svg+xml;base64,{}",
            BASE64_STANDARD.encode(svg.as_bytes())
        ))
    }
}

fn render_text(out: &mut String, text: &TextProps, fill: &str) {
    let anchor_x = match text.align {
        TextAlign::Left => 0.0,
        TextAlign::Center => text.width / 2.0,
        TextAlign::Right => text.width,
    };
    let weight = if text.font_style.is_bold() { "bold" } else { "normal" };
    let slant = if text.font_style.is_italic() { "italic" } else { "normal" };
    let _ = write!(
        out,
        r#"<text font-size="{}" font-family="{}" font-weight="{}" font-style="{}" text-anchor="{}" fill="{}">"#,
        fmt_num(text.font_size),
        escape_xml(&text.font_family),
        weight,
        slant,
        text.align.anchor(),
        escape_xml(fill)
    );
    let line_height = text.font_size * LINE_HEIGHT;
    for (i, line) in text.content.lines().enumerate() {
        let _ = write!(
            out,
            r#"<tspan x="{}" y="{}">{}</tspan>"#,
            fmt_num(anchor_x),
            fmt_num(text.font_size + i as f64 * line_height),
            escape_xml(line)
        );
    }
    out.push_str("</text>");
}

fn dash_attr(dash: &[f64]) -> String {
    if dash.is_empty() {
        return String::new();
    }
    let values: Vec<String> = dash.iter().map(|d| fmt_num(*d)).collect();
    format!(r#" stroke-dasharray="{}""#, values.join(" "))
}

fn point_list(points: impl Iterator<Item = (f64, f64)>) -> String {
    points
        .map(|(x, y)| format!("{},{}", fmt_num(x), fmt_num(y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim trailing zeros so markup stays compact and stable.
fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
