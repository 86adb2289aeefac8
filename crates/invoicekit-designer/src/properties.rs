//! Property editing
//!
//! Raw input from the properties panel is coerced to a typed value and then
//! applied to an element. Numeric fields parse as `f64`, flag fields as
//! booleans, everything else stays a string. Invalid input and fields that do
//! not apply to the element's kind are rejected and leave the element as it
//! was.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{Element, FontStyle, Geometry, TextAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyField {
    X,
    Y,
    Rotation,
    Width,
    Height,
    Radius,
    CornerRadius,
    InnerRadius,
    OuterRadius,
    NumPoints,
    Sides,
    FontSize,
    StrokeWidth,
    TextWidth,
    Dash,
    Points,
    Bold,
    Italic,
    Content,
    FontFamily,
    FontStyle,
    Align,
    Fill,
    Stroke,
}

/// How raw input for a field is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Number,
    NumberList,
    Bool,
    Text,
}

impl PropertyField {
    pub fn name(&self) -> &'static str {
        match self {
            PropertyField::X => "x",
            PropertyField::Y => "y",
            PropertyField::Rotation => "rotation",
            PropertyField::Width => "width",
            PropertyField::Height => "height",
            PropertyField::Radius => "radius",
            PropertyField::CornerRadius => "cornerRadius",
            PropertyField::InnerRadius => "innerRadius",
            PropertyField::OuterRadius => "outerRadius",
            PropertyField::NumPoints => "numPoints",
            PropertyField::Sides => "sides",
            PropertyField::FontSize => "fontSize",
            PropertyField::StrokeWidth => "strokeWidth",
            PropertyField::TextWidth => "textWidth",
            PropertyField::Dash => "dash",
            PropertyField::Points => "points",
            PropertyField::Bold => "bold",
            PropertyField::Italic => "italic",
            PropertyField::Content => "text",
            PropertyField::FontFamily => "fontFamily",
            PropertyField::FontStyle => "fontStyle",
            PropertyField::Align => "align",
            PropertyField::Fill => "fill",
            PropertyField::Stroke => "stroke",
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            PropertyField::Dash | PropertyField::Points => FieldType::NumberList,
            PropertyField::Bold | PropertyField::Italic => FieldType::Bool,
            PropertyField::Content
            | PropertyField::FontFamily
            | PropertyField::FontStyle
            | PropertyField::Align
            | PropertyField::Fill
            | PropertyField::Stroke => FieldType::Text,
            _ => FieldType::Number,
        }
    }
}

impl fmt::Display for PropertyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropertyField {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "x" => PropertyField::X,
            "y" => PropertyField::Y,
            "rotation" => PropertyField::Rotation,
            "width" => PropertyField::Width,
            "height" => PropertyField::Height,
            "radius" => PropertyField::Radius,
            "cornerRadius" => PropertyField::CornerRadius,
            "innerRadius" => PropertyField::InnerRadius,
            "outerRadius" => PropertyField::OuterRadius,
            "numPoints" => PropertyField::NumPoints,
            "sides" => PropertyField::Sides,
            "fontSize" => PropertyField::FontSize,
            "strokeWidth" => PropertyField::StrokeWidth,
            "textWidth" => PropertyField::TextWidth,
            "dash" => PropertyField::Dash,
            "points" => PropertyField::Points,
            "bold" => PropertyField::Bold,
            "italic" => PropertyField::Italic,
            "text" | "content" => PropertyField::Content,
            "fontFamily" => PropertyField::FontFamily,
            "fontStyle" => PropertyField::FontStyle,
            "align" => PropertyField::Align,
            "fill" => PropertyField::Fill,
            "stroke" => PropertyField::Stroke,
            other => return Err(PropertyError::UnknownField(other.to_string())),
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Numbers(Vec<f64>),
    Bool(bool),
    String(String),
}

/// Why an edit was not applied
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    #[error("Unknown property '{0}'")]
    UnknownField(String),

    #[error("'{value}' is not a valid number for {field}")]
    InvalidNumber { field: PropertyField, value: String },

    #[error("'{value}' is not a valid flag for {field}")]
    InvalidBool { field: PropertyField, value: String },

    #[error("{field} {reason}")]
    OutOfRange { field: PropertyField, reason: &'static str },

    #[error("'{value}' is not a valid value for {field}")]
    InvalidChoice { field: PropertyField, value: String },

    #[error("{field} does not apply to this element")]
    NotApplicable { field: PropertyField },
}

fn parse_number(field: PropertyField, raw: &str) -> Result<f64, PropertyError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PropertyError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

/// Interpret raw panel input for `field`.
pub fn coerce(field: PropertyField, raw: &str) -> Result<PropertyValue, PropertyError> {
    match field.field_type() {
        FieldType::Number => parse_number(field, raw).map(PropertyValue::Number),
        FieldType::NumberList => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(PropertyValue::Numbers(Vec::new()));
            }
            trimmed
                .split([',', ' '])
                .filter(|part| !part.is_empty())
                .map(|part| parse_number(field, part))
                .collect::<Result<Vec<_>, _>>()
                .map(PropertyValue::Numbers)
        }
        FieldType::Bool => match raw.trim() {
            "true" | "on" | "1" => Ok(PropertyValue::Bool(true)),
            "false" | "off" | "0" => Ok(PropertyValue::Bool(false)),
            _ => Err(PropertyError::InvalidBool {
                field,
                value: raw.to_string(),
            }),
        },
        FieldType::Text => Ok(PropertyValue::String(raw.to_string())),
    }
}

fn positive(field: PropertyField, v: f64) -> Result<f64, PropertyError> {
    if v > 0.0 {
        Ok(v)
    } else {
        Err(PropertyError::OutOfRange {
            field,
            reason: "must be greater than zero",
        })
    }
}

fn non_negative(field: PropertyField, v: f64) -> Result<f64, PropertyError> {
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(PropertyError::OutOfRange {
            field,
            reason: "must not be negative",
        })
    }
}

fn count(field: PropertyField, v: f64, min: u32) -> Result<u32, PropertyError> {
    if v.fract() != 0.0 || v < f64::from(min) || v > 1000.0 {
        return Err(PropertyError::OutOfRange {
            field,
            reason: "must be a whole number in range",
        });
    }
    Ok(v as u32)
}

/// Apply a coerced value to `element`.
///
/// On error the element is left unchanged.
pub fn apply(
    element: &mut Element,
    field: PropertyField,
    value: PropertyValue,
) -> Result<(), PropertyError> {
    let not_applicable = || PropertyError::NotApplicable { field };
    let mismatch = || PropertyError::InvalidChoice {
        field,
        value: format!("{value:?}"),
    };

    match (field, &value) {
        (PropertyField::X, PropertyValue::Number(v)) => element.position.x = *v,
        (PropertyField::Y, PropertyValue::Number(v)) => element.position.y = *v,
        (PropertyField::Rotation, PropertyValue::Number(v)) => element.position.rotation = *v,
        (PropertyField::StrokeWidth, PropertyValue::Number(v)) => {
            element.style.stroke_width = non_negative(field, *v)?
        }
        (PropertyField::Dash, PropertyValue::Numbers(v)) => {
            for d in v {
                non_negative(field, *d)?;
            }
            element.style.dash = v.clone();
        }
        (PropertyField::Fill, PropertyValue::String(s)) => element.style.fill = s.clone(),
        (PropertyField::Stroke, PropertyValue::String(s)) => element.style.stroke = s.clone(),

        (
            PropertyField::Width | PropertyField::Height | PropertyField::CornerRadius,
            PropertyValue::Number(v),
        ) => {
            let Geometry::Rect {
                width,
                height,
                corner_radius,
            } = &mut element.geometry
            else {
                return Err(not_applicable());
            };
            match field {
                PropertyField::Width => *width = positive(field, *v)?,
                PropertyField::Height => *height = positive(field, *v)?,
                _ => *corner_radius = non_negative(field, *v)?,
            }
        }
        (PropertyField::Radius, PropertyValue::Number(v)) => match &mut element.geometry {
            Geometry::Circle { radius } | Geometry::Polygon { radius, .. } => {
                *radius = positive(field, *v)?
            }
            _ => return Err(not_applicable()),
        },
        (PropertyField::Sides, PropertyValue::Number(v)) => {
            let fixed = element.kind().polygon_sides().ok_or_else(not_applicable)?;
            if count(field, *v, 3)? != fixed {
                return Err(PropertyError::OutOfRange {
                    field,
                    reason: "is fixed by the element kind",
                });
            }
        }
        (
            PropertyField::InnerRadius | PropertyField::OuterRadius | PropertyField::NumPoints,
            PropertyValue::Number(v),
        ) => {
            let Geometry::Star {
                num_points,
                inner_radius,
                outer_radius,
            } = &mut element.geometry
            else {
                return Err(not_applicable());
            };
            match field {
                PropertyField::InnerRadius => *inner_radius = positive(field, *v)?,
                PropertyField::OuterRadius => *outer_radius = positive(field, *v)?,
                _ => *num_points = count(field, *v, 2)?,
            }
        }
        (PropertyField::Points, PropertyValue::Numbers(v)) => match &mut element.geometry {
            Geometry::Line { points } => {
                if v.len() < 4 || v.len() % 2 != 0 {
                    return Err(PropertyError::OutOfRange {
                        field,
                        reason: "needs an even number of coordinates, at least two points",
                    });
                }
                *points = v.clone();
            }
            _ => return Err(not_applicable()),
        },

        (
            PropertyField::FontSize
            | PropertyField::TextWidth
            | PropertyField::Bold
            | PropertyField::Italic
            | PropertyField::Content
            | PropertyField::FontFamily
            | PropertyField::FontStyle
            | PropertyField::Align,
            _,
        ) => {
            let text = element.text.as_mut().ok_or_else(not_applicable)?;
            match (field, &value) {
                (PropertyField::FontSize, PropertyValue::Number(v)) => {
                    text.font_size = positive(field, *v)?
                }
                (PropertyField::TextWidth, PropertyValue::Number(v)) => {
                    text.width = positive(field, *v)?
                }
                (PropertyField::Bold, PropertyValue::Bool(b)) => {
                    text.font_style = FontStyle::from_flags(*b, text.font_style.is_italic())
                }
                (PropertyField::Italic, PropertyValue::Bool(b)) => {
                    text.font_style = FontStyle::from_flags(text.font_style.is_bold(), *b)
                }
                (PropertyField::Content, PropertyValue::String(s)) => text.content = s.clone(),
                (PropertyField::FontFamily, PropertyValue::String(s)) => {
                    text.font_family = s.clone()
                }
                (PropertyField::FontStyle, PropertyValue::String(s)) => {
                    text.font_style = FontStyle::parse(s).ok_or_else(mismatch)?
                }
                (PropertyField::Align, PropertyValue::String(s)) => {
                    text.align = TextAlign::parse(s).ok_or_else(mismatch)?
                }
                _ => return Err(mismatch()),
            }
        }

        _ => return Err(mismatch()),
    }
    Ok(())
}

/// Coerce and apply in one step, leaving `element` unchanged on error.
pub fn apply_raw(
    element: &mut Element,
    field: PropertyField,
    raw: &str,
) -> Result<(), PropertyError> {
    let value = coerce(field, raw)?;
    let mut staged = element.clone();
    apply(&mut staged, field, value)?;
    *element = staged;
    Ok(())
}
