//! Built-in invoice layouts
//!
//! The three starter templates ship with the application. They have no owner,
//! never touch storage, and cannot be updated or deleted.

use crate::data::{NewTemplate, Template};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Ids reserved for the built-in templates
pub const BUILTIN_TEMPLATE_IDS: [&str; 3] = ["default-1", "default-2", "default-3"];

pub fn is_builtin_id(id: &str) -> bool {
    BUILTIN_TEMPLATE_IDS.contains(&id)
}

/// Resolve a built-in template by id.
pub fn builtin_template(id: &str) -> Option<Template> {
    let (name, description, elements) = match id {
        "default-1" => (
            "Classic",
            "Centered heading with a ruled header and totals block",
            classic_elements(),
        ),
        "default-2" => (
            "Modern",
            "Colour band header with client details on the left",
            modern_elements(),
        ),
        "default-3" => (
            "Minimal",
            "Plain text layout with a single divider",
            minimal_elements(),
        ),
        _ => return None,
    };

    let mut template = Template::new(
        None,
        NewTemplate {
            name: name.to_string(),
            description: description.to_string(),
            thumbnail: None,
            elements,
        },
    );
    template.id = id.to_string();
    template.created_at = DateTime::<Utc>::default();
    template.updated_at = DateTime::<Utc>::default();
    Some(template)
}

/// All built-in templates in display order.
pub fn builtin_templates() -> Vec<Template> {
    BUILTIN_TEMPLATE_IDS
        .iter()
        .filter_map(|id| builtin_template(id))
        .collect()
}

fn element_id(template: u32, index: u32) -> String {
    format!("00000000-0000-4000-8000-{:06}{:06}", template, index)
}

fn style(fill: &str, stroke: &str, stroke_width: f64, dash: &[f64]) -> Value {
    json!({ "fill": fill, "stroke": stroke, "strokeWidth": stroke_width, "dash": dash })
}

#[allow(clippy::too_many_arguments)]
fn text(
    id: String,
    content: &str,
    x: f64,
    y: f64,
    font_size: f64,
    font_style: &str,
    width: f64,
    align: &str,
) -> Value {
    json!({
        "id": id,
        "kind": "text",
        "geometry": { "type": "text" },
        "x": x,
        "y": y,
        "rotation": 0.0,
        "style": style("#1f2937", "transparent", 0.0, &[]),
        "text": {
            "content": content,
            "fontSize": font_size,
            "fontFamily": "Helvetica",
            "fontStyle": font_style,
            "width": width,
            "align": align,
        },
    })
}

fn placeholder(
    id: String,
    placeholder_id: &str,
    token: &str,
    x: f64,
    y: f64,
    align: &str,
) -> Value {
    json!({
        "id": id,
        "kind": "placeholder",
        "geometry": { "type": "text" },
        "x": x,
        "y": y,
        "rotation": 0.0,
        "style": style("#111827", "transparent", 0.0, &[]),
        "text": {
            "content": token,
            "fontSize": 14.0,
            "fontFamily": "Helvetica",
            "fontStyle": "normal",
            "width": 240.0,
            "align": align,
        },
        "placeholderId": placeholder_id,
    })
}

fn line(id: String, kind: &str, x: f64, y: f64, length: f64, dash: &[f64]) -> Value {
    json!({
        "id": id,
        "kind": kind,
        "geometry": { "type": "line", "points": [0.0, 0.0, length, 0.0] },
        "x": x,
        "y": y,
        "rotation": 0.0,
        "style": style("transparent", "#374151", 2.0, dash),
    })
}

fn rect(id: String, x: f64, y: f64, width: f64, height: f64, fill: &str) -> Value {
    json!({
        "id": id,
        "kind": "rect",
        "geometry": { "type": "rect", "width": width, "height": height, "cornerRadius": 0.0 },
        "x": x,
        "y": y,
        "rotation": 0.0,
        "style": style(fill, "transparent", 0.0, &[]),
    })
}

fn classic_elements() -> Value {
    let id = |i| element_id(1, i);
    json!([
        text(id(1), "INVOICE", 197.0, 60.0, 36.0, "bold", 400.0, "center"),
        line(id(2), "line", 60.0, 130.0, 674.0, &[]),
        placeholder(id(3), "invoice-number", "{{invoice_number}}", 60.0, 160.0, "left"),
        placeholder(id(4), "invoice-date", "{{invoice_date}}", 60.0, 185.0, "left"),
        placeholder(id(5), "due-date", "{{due_date}}", 60.0, 210.0, "left"),
        placeholder(id(6), "client-name", "{{client_name}}", 494.0, 160.0, "right"),
        placeholder(id(7), "client-address", "{{client_address}}", 494.0, 185.0, "right"),
        line(id(8), "dotted-line", 60.0, 900.0, 674.0, &[5.0, 5.0]),
        placeholder(id(9), "subtotal", "{{subtotal}}", 494.0, 920.0, "right"),
        placeholder(id(10), "tax", "{{tax}}", 494.0, 945.0, "right"),
        placeholder(id(11), "total-amount", "{{total_amount}}", 494.0, 975.0, "right"),
    ])
}

fn modern_elements() -> Value {
    let id = |i| element_id(2, i);
    json!([
        rect(id(1), 0.0, 0.0, 794.0, 120.0, "#1e40af"),
        text(id(2), "Invoice", 60.0, 40.0, 32.0, "bold", 300.0, "left"),
        placeholder(id(3), "company-name", "{{company_name}}", 494.0, 50.0, "right"),
        placeholder(id(4), "client-name", "{{client_name}}", 60.0, 160.0, "left"),
        placeholder(id(5), "client-email", "{{client_email}}", 60.0, 185.0, "left"),
        placeholder(id(6), "invoice-number", "{{invoice_number}}", 494.0, 160.0, "right"),
        placeholder(id(7), "due-date", "{{due_date}}", 494.0, 185.0, "right"),
        placeholder(id(8), "total-amount", "{{total_amount}}", 494.0, 960.0, "right"),
        placeholder(id(9), "notes", "{{notes}}", 60.0, 1020.0, "left"),
    ])
}

fn minimal_elements() -> Value {
    let id = |i| element_id(3, i);
    json!([
        placeholder(id(1), "company-name", "{{company_name}}", 60.0, 60.0, "left"),
        placeholder(id(2), "invoice-number", "{{invoice_number}}", 494.0, 60.0, "right"),
        line(id(3), "line", 60.0, 100.0, 674.0, &[]),
        placeholder(id(4), "client-name", "{{client_name}}", 60.0, 130.0, "left"),
        placeholder(id(5), "total-amount", "{{total_amount}}", 494.0, 980.0, "right"),
    ])
}
