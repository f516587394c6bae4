//! Property interpretation: loosely-typed declaration values into typed
//! node fields.
//!
//! [`apply_node_property`] handles the keys every node understands (box
//! model, visibility, z-order, focusability, base style). Anything else is
//! left for the widget's own `apply_style`.

use crate::dom::node::NodeData;
use crate::geometry::Spacing;
use crate::layout::Dimension;
use crate::render::{Attrs, Color};

use super::tokenizer::{parse_parts, ValuePart};
use super::value::StyleValue;

/// Errors from property parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },
}

impl PropertyError {
    pub fn invalid(property: &str, message: impl Into<String>) -> Self {
        PropertyError::InvalidValue { property: property.to_owned(), message: message.into() }
    }
}

// ---------------------------------------------------------------------------
// Value parsers
// ---------------------------------------------------------------------------

fn parts(property: &str, value: &str) -> Result<Vec<ValuePart>, PropertyError> {
    parse_parts(value).map_err(|bad| PropertyError::invalid(property, format!("cannot lex {bad:?}")))
}

fn single_part(property: &str, value: &str) -> Result<ValuePart, PropertyError> {
    let mut p = parts(property, value)?;
    if p.len() != 1 {
        return Err(PropertyError::invalid(property, format!("expected 1 value, got {}", p.len())));
    }
    Ok(p.remove(0))
}

fn to_cells(n: f64) -> i32 {
    n.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

/// `10`, `"10"`, `"50%"`, `"2fr"`, `"auto"`.
pub fn parse_dimension(property: &str, value: &StyleValue) -> Result<Dimension, PropertyError> {
    match value {
        StyleValue::Int(n) => Ok(Dimension::Fixed(to_cells(*n as f64))),
        StyleValue::Float(n) => Ok(Dimension::Fixed(to_cells(*n))),
        StyleValue::Str(s) => match single_part(property, s)? {
            ValuePart::Number(n) => Ok(Dimension::Fixed(to_cells(n as f64))),
            ValuePart::Percent(p) => Ok(Dimension::Percent(p)),
            ValuePart::Fraction(f) => Ok(Dimension::Fraction(f)),
            ValuePart::Ident(id) if id == "auto" => Ok(Dimension::Auto),
            other => Err(PropertyError::invalid(property, format!("expected a size, got {other:?}"))),
        },
        StyleValue::Bool(_) => Err(PropertyError::invalid(property, "expected a size, got a bool")),
    }
}

/// A cell count: `3`, `"3"`, `2.6`.
pub fn parse_length(property: &str, value: &StyleValue) -> Result<i32, PropertyError> {
    match value {
        StyleValue::Int(n) => Ok(to_cells(*n as f64)),
        StyleValue::Float(n) => Ok(to_cells(*n)),
        StyleValue::Str(s) => match single_part(property, s)? {
            ValuePart::Number(n) => Ok(to_cells(n as f64)),
            other => Err(PropertyError::invalid(property, format!("expected a number, got {other:?}"))),
        },
        StyleValue::Bool(_) => Err(PropertyError::invalid(property, "expected a number, got a bool")),
    }
}

/// A cell count, or `none`/`auto` for no limit.
pub fn parse_limit(property: &str, value: &StyleValue) -> Result<Option<i32>, PropertyError> {
    if let StyleValue::Str(s) = value {
        if matches!(s.trim(), "none" | "auto") {
            return Ok(None);
        }
    }
    parse_length(property, value).map(Some)
}

/// 1-4 cell counts in CSS shorthand order.
///
/// - 1 value: all sides
/// - 2 values: vertical, horizontal
/// - 3 values: top, horizontal, bottom
/// - 4 values: top, right, bottom, left
pub fn parse_spacing(property: &str, value: &StyleValue) -> Result<Spacing, PropertyError> {
    let values: Vec<i32> = match value {
        StyleValue::Str(s) => parts(property, s)?
            .into_iter()
            .map(|p| match p {
                ValuePart::Number(n) => Ok(to_cells(n as f64)),
                other => Err(PropertyError::invalid(property, format!("expected a number, got {other:?}"))),
            })
            .collect::<Result<_, _>>()?,
        other => vec![parse_length(property, other)?],
    };
    match values.as_slice() {
        [all] => Ok(Spacing::all(*all)),
        [v, h] => Ok(Spacing::symmetric(*v, *h)),
        [t, h, b] => Ok(Spacing::new(*t, *h, *b, *h)),
        [t, r, b, l] => Ok(Spacing::new(*t, *r, *b, *l)),
        _ => Err(PropertyError::invalid(property, format!("expected 1-4 values, got {}", values.len()))),
    }
}

/// `true`, `1`, `"yes"`, `"on"` (and their negatives).
pub fn parse_bool(property: &str, value: &StyleValue) -> Result<bool, PropertyError> {
    match value {
        StyleValue::Bool(b) => Ok(*b),
        StyleValue::Int(0) => Ok(false),
        StyleValue::Int(1) => Ok(true),
        StyleValue::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            other => Err(PropertyError::invalid(property, format!("expected a bool, got {other:?}"))),
        },
        other => Err(PropertyError::invalid(property, format!("expected a bool, got {other}"))),
    }
}

/// A single identifier, lowercased.
pub fn parse_ident(property: &str, value: &StyleValue) -> Result<String, PropertyError> {
    match value {
        StyleValue::Str(s) => match single_part(property, s)? {
            ValuePart::Ident(id) => Ok(id),
            other => Err(PropertyError::invalid(property, format!("expected a keyword, got {other:?}"))),
        },
        other => Err(PropertyError::invalid(property, format!("expected a keyword, got {other}"))),
    }
}

/// A float, accepting ints.
pub fn parse_float(property: &str, value: &StyleValue) -> Result<f32, PropertyError> {
    match value {
        StyleValue::Int(n) => Ok(*n as f32),
        StyleValue::Float(n) => Ok(*n as f32),
        StyleValue::Str(s) => match single_part(property, s)? {
            ValuePart::Number(n) => Ok(n),
            ValuePart::Percent(p) => Ok(p / 100.0),
            other => Err(PropertyError::invalid(property, format!("expected a number, got {other:?}"))),
        },
        StyleValue::Bool(_) => Err(PropertyError::invalid(property, "expected a number, got a bool")),
    }
}

pub fn parse_color(property: &str, value: &StyleValue) -> Result<Color, PropertyError> {
    let StyleValue::Str(s) = value else {
        return Err(PropertyError::invalid(property, format!("expected a color, got {value}")));
    };
    Color::parse(s).ok_or_else(|| PropertyError::invalid(property, format!("unknown color {s:?}")))
}

/// Space-separated attribute names: `"bold underline"`.
pub fn parse_text_style(property: &str, value: &StyleValue) -> Result<Attrs, PropertyError> {
    let StyleValue::Str(s) = value else {
        return Err(PropertyError::invalid(property, format!("expected text style, got {value}")));
    };
    let mut attrs = Attrs::empty();
    for part in parts(property, s)? {
        let ValuePart::Ident(name) = part else {
            return Err(PropertyError::invalid(property, format!("expected a style name, got {part:?}")));
        };
        attrs |= Attrs::from_style_name(&name)
            .ok_or_else(|| PropertyError::invalid(property, format!("unknown text style {name:?}")))?;
    }
    Ok(attrs)
}

// ---------------------------------------------------------------------------
// Node properties
// ---------------------------------------------------------------------------

/// Apply one declaration to the node's own fields.
///
/// Returns `Ok(false)` when `property` is not a node-level key, so the
/// caller can offer it to the widget.
pub fn apply_node_property(
    data: &mut NodeData,
    property: &str,
    value: &StyleValue,
) -> Result<bool, PropertyError> {
    let c = &mut data.constraints;
    match property {
        "width" => c.width = parse_dimension(property, value)?,
        "height" => c.height = parse_dimension(property, value)?,
        "min-width" => c.min_width = parse_limit(property, value)?,
        "max-width" => c.max_width = parse_limit(property, value)?,
        "min-height" => c.min_height = parse_limit(property, value)?,
        "max-height" => c.max_height = parse_limit(property, value)?,
        "margin" => data.margin = parse_spacing(property, value)?,
        "margin-top" => data.margin.top = parse_length(property, value)?,
        "margin-right" => data.margin.right = parse_length(property, value)?,
        "margin-bottom" => data.margin.bottom = parse_length(property, value)?,
        "margin-left" => data.margin.left = parse_length(property, value)?,
        "padding" => data.padding = parse_spacing(property, value)?,
        "padding-top" => data.padding.top = parse_length(property, value)?,
        "padding-right" => data.padding.right = parse_length(property, value)?,
        "padding-bottom" => data.padding.bottom = parse_length(property, value)?,
        "padding-left" => data.padding.left = parse_length(property, value)?,
        "visible" | "visibility" => {
            data.visible = match value {
                StyleValue::Str(s) if s.trim() == "visible" => true,
                StyleValue::Str(s) if s.trim() == "hidden" => false,
                other => parse_bool(property, other)?,
            }
        }
        "display" => {
            data.visible = match parse_ident(property, value)?.as_str() {
                "none" => false,
                "block" | "flex" => true,
                other => {
                    return Err(PropertyError::invalid(property, format!("expected none|block, got {other:?}")))
                }
            }
        }
        "z-index" => data.z_index = parse_length(property, value)?,
        "focusable" => data.focusable = parse_bool(property, value)?,
        "color" => data.style.fg = parse_color(property, value)?,
        "background" => data.style.bg = parse_color(property, value)?,
        "text-style" => data.style.attrs = parse_text_style(property, value)?,
        _ => return Ok(false),
    }
    Ok(true)
}

// ===========================================================================
// Tests
// ===========================================================================
