//! Variant descriptors: the payload shape of one named variant.

use std::fmt;

use crate::{RegistryError, TypeTag};

/// Definition of an enum variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariantDescriptor {
    /// Variant name, unique within its owning type.
    name: Box<str>,

    /// Variant fields (unit, positional, or named).
    shape: PayloadShape,
}

/// Payload shape of a variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// Unit variant: `Quit`.
    Unit,

    /// Positional variant: `V4(byte, byte, byte, byte)`.
    Positional(Vec<TypeTag>),

    /// Named variant: `Move { x: int, y: int }`.
    ///
    /// Declaration order is kept for display and defines storage order.
    Named(Vec<FieldDef>),
}

/// A named field of a `Named` variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDef {
    /// Field name.
    pub name: Box<str>,

    /// Field type.
    pub ty: TypeTag,
}

impl FieldDef {
    pub fn new(name: impl Into<Box<str>>, ty: TypeTag) -> Self {
        FieldDef {
            name: name.into(),
            ty,
        }
    }
}

impl VariantDescriptor {
    /// Create a unit variant.
    pub fn unit(name: impl Into<Box<str>>) -> Self {
        VariantDescriptor {
            name: name.into(),
            shape: PayloadShape::Unit,
        }
    }

    /// Create a positional variant from its field types.
    pub fn positional(name: impl Into<Box<str>>, fields: impl IntoIterator<Item = TypeTag>) -> Self {
        VariantDescriptor {
            name: name.into(),
            shape: PayloadShape::Positional(fields.into_iter().collect()),
        }
    }

    /// Create a named-field variant from `(field, type)` pairs.
    pub fn named<N: Into<Box<str>>>(
        name: impl Into<Box<str>>,
        fields: impl IntoIterator<Item = (N, TypeTag)>,
    ) -> Self {
        VariantDescriptor {
            name: name.into(),
            shape: PayloadShape::Named(
                fields
                    .into_iter()
                    .map(|(field, ty)| FieldDef::new(field, ty))
                    .collect(),
            ),
        }
    }

    /// The variant name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The payload shape.
    #[inline]
    pub fn shape(&self) -> &PayloadShape {
        &self.shape
    }

    /// Check the descriptor in isolation (names and field lists).
    pub(crate) fn validate(&self, type_name: &str) -> Result<(), RegistryError> {
        if self.name.is_empty() {
            return Err(RegistryError::EmptyVariantName {
                type_name: type_name.to_string(),
            });
        }

        match &self.shape {
            PayloadShape::Unit => Ok(()),
            PayloadShape::Positional(types) if types.is_empty() => Err(self.empty_fields(type_name)),
            PayloadShape::Positional(_) => Ok(()),
            PayloadShape::Named(fields) if fields.is_empty() => Err(self.empty_fields(type_name)),
            PayloadShape::Named(fields) => {
                for (i, field) in fields.iter().enumerate() {
                    if fields[..i].iter().any(|earlier| earlier.name == field.name) {
                        return Err(RegistryError::DuplicateFieldName {
                            type_name: type_name.to_string(),
                            variant: self.name.to_string(),
                            field: field.name.to_string(),
                        });
                    }
                }
                Ok(())
            }
        }
    }

    fn empty_fields(&self, type_name: &str) -> RegistryError {
        RegistryError::EmptyFieldList {
            type_name: type_name.to_string(),
            variant: self.name.to_string(),
        }
    }
}

impl PayloadShape {
    /// Check if this is a unit variant.
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    /// Check if this is a positional variant.
    #[inline]
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Positional(_))
    }

    /// Check if this is a named-field variant.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Get the arity (number of fields) of this shape.
    pub fn arity(&self) -> usize {
        match self {
            Self::Unit => 0,
            Self::Positional(types) => types.len(),
            Self::Named(fields) => fields.len(),
        }
    }

    /// Short name of the shape kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Positional(_) => "positional",
            Self::Named(_) => "named",
        }
    }

    /// Field type at storage position `index`.
    pub fn field_type(&self, index: usize) -> Option<TypeTag> {
        match self {
            Self::Unit => None,
            Self::Positional(types) => types.get(index).copied(),
            Self::Named(fields) => fields.get(index).map(|f| f.ty),
        }
    }

    /// Storage position of a named field.
    pub fn field_index(&self, field: &str) -> Option<usize> {
        match self {
            Self::Named(fields) => fields.iter().position(|f| &*f.name == field),
            _ => None,
        }
    }

    /// Get named fields if this is a named-field variant.
    pub fn named_fields(&self) -> Option<&[FieldDef]> {
        match self {
            Self::Named(fields) => Some(fields),
            _ => None,
        }
    }
}

impl fmt::Display for VariantDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match &self.shape {
            PayloadShape::Unit => Ok(()),
            PayloadShape::Positional(types) => {
                f.write_str("(")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ty}")?;
                }
                f.write_str(")")
            }
            PayloadShape::Named(fields) => {
                f.write_str(" { ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.ty)?;
                }
                f.write_str(" }")
            }
        }
    }
}
