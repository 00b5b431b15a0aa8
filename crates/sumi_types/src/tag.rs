//! Field type tags.

use std::fmt;

use crate::EnumTypeHandle;

/// The type of a single payload field.
///
/// `Enum` tags compare by registered type identity, never by name, so two
/// distinct instantiations such as `Option<int>` and `Option<text>` never
/// unify.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// 64-bit signed integer.
    Int,
    /// 8-bit unsigned integer.
    Byte,
    /// 64-bit floating point.
    Float,
    /// Boolean.
    Bool,
    /// UTF-8 text.
    Text,
    /// The unit value `()`.
    Unit,
    /// A value of a registered enum type.
    Enum(EnumTypeHandle),
}

impl TypeTag {
    /// Display names of the non-enum tags. No registered type may use them.
    pub const SCALAR_NAMES: [&'static str; 6] = ["int", "byte", "float", "bool", "text", "unit"];

    /// Check if this tag refers to a registered enum type.
    #[inline]
    pub fn is_enum(self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Get the enum handle if this is an `Enum` tag.
    #[inline]
    pub fn as_enum(self) -> Option<EnumTypeHandle> {
        match self {
            Self::Enum(handle) => Some(handle),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Int => f.write_str("int"),
            TypeTag::Byte => f.write_str("byte"),
            TypeTag::Float => f.write_str("float"),
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::Text => f.write_str("text"),
            TypeTag::Unit => f.write_str("unit"),
            TypeTag::Enum(handle) => f.write_str(handle.name()),
        }
    }
}
