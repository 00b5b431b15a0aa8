//! Field values.
//!
//! `Value` is the runtime counterpart of `TypeTag`: every value reports its
//! own tag and conforms to exactly one tag. Heap data (`Text`, `Variant`) is
//! reference-counted, so cloning a value never copies a payload.

use std::fmt;
use std::sync::Arc;

use sumi_types::TypeTag;

use crate::VariantValue;

/// A single payload field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Byte value.
    Byte(u8),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Text value.
    Text(Arc<str>),
    /// Unit value.
    Unit,
    /// A value of a registered enum type.
    Variant(VariantValue),
}

impl Value {
    /// Create a text value.
    #[inline]
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        Value::Text(s.into())
    }

    /// The tag this value conforms to.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Int(_) => TypeTag::Int,
            Value::Byte(_) => TypeTag::Byte,
            Value::Float(_) => TypeTag::Float,
            Value::Bool(_) => TypeTag::Bool,
            Value::Text(_) => TypeTag::Text,
            Value::Unit => TypeTag::Unit,
            Value::Variant(v) => TypeTag::Enum(v.enum_type()),
        }
    }

    /// Check whether this value conforms to `tag`.
    #[inline]
    pub fn conforms_to(&self, tag: TypeTag) -> bool {
        self.type_tag() == tag
    }

    /// Try to get an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get a byte.
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Value::Byte(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get a nested variant.
    pub fn as_variant(&self) -> Option<&VariantValue> {
        match self {
            Value::Variant(v) => Some(v),
            _ => None,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> String {
        self.type_tag().to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Byte(b) => write!(f, "{b}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{:?}", &**s),
            Value::Unit => f.write_str("()"),
            Value::Variant(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u8> for Value {
    fn from(b: u8) -> Self {
        Value::Byte(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::text(s)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

impl From<VariantValue> for Value {
    fn from(v: VariantValue) -> Self {
        Value::Variant(v)
    }
}

#[cfg(test)]
mod tests;
