//! Read-only views over loosely typed annotation records.
//!
//! Records are kept as `serde_json::Value` because the corpus is not schema
//! validated. Every accessor here answers "absent" (`None` or an empty
//! iterator) for a missing or mistyped field instead of failing, so a
//! reducer can simply skip what it cannot use.

use crate::domain::models::Point;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Document {
    source: PathBuf,
    value: Value,
}

impl Document {
    pub fn new(source: impl Into<PathBuf>, value: Value) -> Self {
        Self {
            source: source.into(),
            value,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// `meta.image_id` as a map key. Strings are used as-is and numbers are
    /// rendered in decimal, so `1` and `"1"` name the same image; any other
    /// type reads as absent.
    pub fn image_id(&self) -> Option<String> {
        match self.value.get("meta")?.get("image_id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// True when `valid_line` is present as an array (possibly empty).
    pub fn has_valid_lines(&self) -> bool {
        self.value
            .get("valid_line")
            .map(Value::is_array)
            .unwrap_or(false)
    }

    /// Entries of `valid_line`; empty when the field is absent or not an array.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.value
            .get("valid_line")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(Line)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Line<'a>(&'a Value);

impl<'a> Line<'a> {
    /// The dotted category label, if it is a string.
    pub fn category(&self) -> Option<&'a str> {
        self.0.get("category").and_then(Value::as_str)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category() == Some(category)
    }

    /// Case-insensitive substring match on the category.
    pub fn category_mentions(&self, marker: &str) -> bool {
        self.category()
            .map(|c| c.to_lowercase().contains(&marker.to_lowercase()))
            .unwrap_or(false)
    }

    /// Entries of `words`; empty when absent or not an array.
    pub fn words(&self) -> impl Iterator<Item = Word<'a>> {
        self.0
            .get("words")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(Word)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Word<'a>(&'a Value);

impl<'a> Word<'a> {
    /// The top-left/bottom-right corners of `quad`. `None` unless all of
    /// `x1`, `y1`, `x2`, `y2` are numbers.
    pub fn quad(&self) -> Option<Quad> {
        let quad = self.0.get("quad")?;
        let coord = |key: &str| quad.get(key).and_then(Value::as_f64);
        Some(Quad {
            x1: coord("x1")?,
            y1: coord("y1")?,
            x2: coord("x2")?,
            y2: coord("y2")?,
        })
    }

    /// Quad center; `None` when it overflows to a non-finite value.
    pub fn midpoint(&self) -> Option<Point> {
        self.quad()
            .map(|q| q.midpoint())
            .filter(|p| p.x.is_finite() && p.y.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Quad {
    pub fn midpoint(&self) -> Point {
        Point {
            x: (self.x1 + self.x2) / 2.0,
            y: (self.y1 + self.y2) / 2.0,
        }
    }
}

/// `null`, `false`, zero, and empty strings/arrays/objects.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
