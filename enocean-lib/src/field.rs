use std::collections::BTreeMap;
use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::bytes::{hex_byte, hex_list, hex_value};

/// A decoded scalar, either a raw reading or an engineering-unit result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum Value {
    /// Reading not available, e.g. a sensor flagged as absent.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Self::Int(i64::from(v))
            }
        })*
    };
}

value_from_int!(u8, u16, u32, i16, i32, i64);

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Semantic values of a decoded payload keyed by name, e.g. `temperature`.
pub type ValueMap = BTreeMap<&'static str, Value>;

/// One node of the diagnostic tree that mirrors the byte layout of a telegram.
///
/// Leaf nodes describe a single bit field or byte range; container nodes such as
/// `Header` or `Data_DL` carry their children in `structure`.
#[derive(Debug, Clone, Default, PartialEq, TypedBuilder)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Field {
    /// Short mnemonic, e.g. `LRNB`.
    #[builder(default, setter(strip_option, into))]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub key: Option<String>,
    /// Human readable name, e.g. `LRN Bit`.
    #[builder(setter(into))]
    pub field: String,
    /// Raw value as read from the wire.
    #[builder(default, setter(strip_option, into))]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub value: Option<Value>,
    #[builder(default)]
    pub hex: Vec<String>,
    /// Bits of the containing byte this field occupies.
    #[builder(default, setter(strip_option, into))]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bin: Option<String>,
    #[builder(default, setter(strip_option, into))]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub desc: Option<String>,
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    pub buffer: Vec<u8>,
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub structure: Vec<Field>,
}

impl Field {
    /// A bit field whose raw value fits in a byte.
    pub fn item(key: &str, field: &str, raw: u8, desc: impl Into<String>) -> Self {
        Self::builder()
            .key(key)
            .field(field)
            .value(raw)
            .hex(vec![hex_byte(raw)])
            .desc(desc)
            .build()
    }

    /// A bit field spanning more than one byte, e.g. a 10 bit reading.
    pub fn wide(key: &str, field: &str, raw: u16, desc: impl Into<String>) -> Self {
        Self::builder()
            .key(key)
            .field(field)
            .value(raw)
            .hex(vec![hex_value(u32::from(raw))])
            .desc(desc)
            .build()
    }

    /// A byte range node holding `buf`, with no description.
    pub fn block(field: &str, buf: &[u8]) -> Self {
        Self::builder()
            .field(field)
            .hex(hex_list(buf))
            .buffer(buf.to_vec())
            .build()
    }

    #[must_use]
    pub fn with_bin(mut self, bin: impl Into<String>) -> Self {
        self.bin = Some(bin.into());
        self
    }

    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    #[must_use]
    pub fn with_structure(mut self, structure: Vec<Field>) -> Self {
        self.structure = structure;
        self
    }

    /// Direct child matching `name` by key or by field name.
    pub fn child(&self, name: &str) -> Option<&Field> {
        self.structure
            .iter()
            .find(|f| f.field == name || f.key.as_deref() == Some(name))
    }

    /// Depth first search of this node's descendants by key or field name.
    pub fn find(&self, name: &str) -> Option<&Field> {
        for child in &self.structure {
            if child.field == name || child.key.as_deref() == Some(name) {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }
}
