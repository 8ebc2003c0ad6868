//! Data tree model shared by templates and parameters
//!
//! A [`Value`] is either a container (array or object) or an atomic leaf.
//! Objects keep their keys in insertion order, which is the order every
//! operation in this crate walks them in.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Object representation: own keys in insertion order
pub type Map = IndexMap<String, Value>;

/// A node of a template or parameter tree
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    /// A non-container object such as a date or an identifier
    Opaque(Opaque),
    Array(Vec<Value>),
    Object(Map),
}

/// An atomic value that is never traversed
///
/// The tag names what the value is (`"date"`, `"uuid"`, ...) and the text is
/// the form it takes when interpolated or serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opaque {
    pub tag: String,
    pub text: String,
}

impl Opaque {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }
}

/// Structural classification used by the tree walkers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Sequence,
    Mapping,
    Text,
    /// Numbers, booleans, null and opaque values
    Atom,
}

/// How a container addresses one of its children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Index(usize),
    Key(&'a str),
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(index) => write!(f, "{index}"),
            Segment::Key(key) => f.write_str(key),
        }
    }
}

impl Value {
    /// Classify this node for traversal
    pub fn kind(&self) -> Kind {
        match self {
            Value::Array(_) => Kind::Sequence,
            Value::Object(_) => Kind::Mapping,
            Value::String(_) => Kind::Text,
            Value::Opaque(_) => Kind::Atom,
            Value::Null | Value::Bool(_) | Value::Number(_) => Kind::Atom,
        }
    }

    /// Direct children with the segment that addresses each; empty for leaves
    pub fn entries(&self) -> impl Iterator<Item = (Segment<'_>, &Value)> + '_ {
        let (items, map): (&[Value], Option<&Map>) = match self {
            Value::Array(items) => (items.as_slice(), None),
            Value::Object(map) => (Default::default(), Some(map)),
            _ => (Default::default(), None),
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| (Segment::Index(index), item))
            .chain(
                map.into_iter()
                    .flat_map(|map| map.iter().map(|(key, value)| (Segment::Key(key), value))),
            )
    }

    /// Mutable direct children in walk order; empty for leaves
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Value> + '_ {
        let (items, map): (&mut [Value], Option<&mut Map>) = match self {
            Value::Array(items) => (items.as_mut_slice(), None),
            Value::Object(map) => (Default::default(), Some(map)),
            _ => (Default::default(), None),
        };
        items
            .iter_mut()
            .chain(map.into_iter().flat_map(|map| map.values_mut()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind(), Kind::Sequence | Kind::Mapping)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Text form used when a value is interpolated into a string
    ///
    /// Integral floats drop their fraction (`1.0` reads `1`). Arrays join their
    /// elements with `,` and objects render as compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_text(n),
            Value::String(s) => s.clone(),
            Value::Opaque(o) => o.text.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    other => other.to_text(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => serde_json::Value::from(self).to_string(),
        }
    }
}

fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Opaque(o) => serde_json::Value::String(o.text.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Opaque> for Value {
    fn from(o: Opaque) -> Self {
        Value::Opaque(o)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Opaque(o) => serializer.serialize_str(&o.text),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
