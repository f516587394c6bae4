//! Loosely-typed declaration values.
//!
//! A stylesheet engine drives widgets with an ordered list of
//! `property -> value` pairs. Values arrive as [`StyleValue`]s and are
//! interpreted into typed fields by [`crate::css::properties`].

use std::fmt;

/// A single declaration value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Int(n) => write!(f, "{n}"),
            StyleValue::Float(n) => write!(f, "{n}"),
            StyleValue::Bool(b) => write!(f, "{b}"),
            StyleValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Int(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Int(n as i64)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Float(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Float(n as f64)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

/// An ordered list of declarations. Later entries override earlier ones
/// when applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: Vec<(String, StyleValue)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration (builder).
    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.push(property, value);
        self
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.push((property.into(), value.into()));
    }

    /// The last value declared for `property`.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries.iter().rev().find(|(k, _)| k == property).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut decls = Declarations::new();
        for (k, v) in iter {
            decls.push(k, v);
        }
        decls
    }
}
