//! Variant values: a discriminant paired with a conforming payload.

use std::fmt;
use std::sync::Arc;

use sumi_types::{EnumTypeHandle, PayloadShape, TypeTag, VariantDescriptor};

use crate::{Payload, ShapeMismatch, Value, ValueError};

/// One instance of a registered enum type.
///
/// The discriminant and payload are set together by [`construct`] and are
/// immutable afterwards. Fields are stored in descriptor order behind an
/// `Arc`, so clones share the payload.
#[derive(Clone)]
pub struct VariantValue {
    ty: EnumTypeHandle,
    tag: usize,
    fields: Arc<[Value]>,
}

/// Construct a value of `ty` holding `variant` with `payload`.
///
/// Fails with `UnknownVariant` if `ty` has no such variant, and with
/// `PayloadShapeMismatch` if the payload's shape, arity, field names, or
/// field types do not match the descriptor.
pub fn construct(
    ty: EnumTypeHandle,
    variant: &str,
    payload: Payload,
) -> Result<VariantValue, ValueError> {
    let Some((tag, descriptor)) = ty.get().variant_by_name(variant) else {
        return Err(ValueError::UnknownVariant {
            type_name: ty.name().to_string(),
            variant: variant.to_string(),
        });
    };

    let fields = conform(descriptor.shape(), payload).map_err(|reason| {
        ValueError::PayloadShapeMismatch {
            type_name: ty.name().to_string(),
            variant: variant.to_string(),
            reason,
        }
    })?;

    tracing::trace!(type_name = ty.name(), variant, tag, "constructed variant value");
    Ok(VariantValue {
        ty,
        tag,
        fields: fields.into(),
    })
}

/// Construct a unit variant.
pub fn construct_unit(ty: EnumTypeHandle, variant: &str) -> Result<VariantValue, ValueError> {
    construct(ty, variant, Payload::Unit)
}

/// Construct a positional variant.
pub fn construct_positional(
    ty: EnumTypeHandle,
    variant: &str,
    values: impl IntoIterator<Item = Value>,
) -> Result<VariantValue, ValueError> {
    construct(ty, variant, Payload::Positional(values.into_iter().collect()))
}

/// Construct a named-field variant. Field order is free.
pub fn construct_named<N: Into<String>>(
    ty: EnumTypeHandle,
    variant: &str,
    fields: impl IntoIterator<Item = (N, Value)>,
) -> Result<VariantValue, ValueError> {
    construct(ty, variant, Payload::named(fields))
}

/// Check a payload against a shape, returning fields in descriptor order.
fn conform(shape: &PayloadShape, payload: Payload) -> Result<Vec<Value>, ShapeMismatch> {
    match (shape, payload) {
        (PayloadShape::Unit, Payload::Unit) => Ok(Vec::new()),

        (PayloadShape::Positional(types), Payload::Positional(values)) => {
            if types.len() != values.len() {
                return Err(ShapeMismatch::WrongArity {
                    expected: types.len(),
                    found: values.len(),
                });
            }
            for (i, (ty, value)) in types.iter().zip(&values).enumerate() {
                check_field(&i.to_string(), *ty, value)?;
            }
            Ok(values)
        }

        (PayloadShape::Named(defs), Payload::Named(fields)) => {
            let mut slots: Vec<Option<Value>> = vec![None; defs.len()];
            for (name, value) in fields {
                let Some(i) = shape.field_index(&name) else {
                    return Err(ShapeMismatch::UnknownField(name));
                };
                check_field(&name, defs[i].ty, &value)?;
                if slots[i].replace(value).is_some() {
                    return Err(ShapeMismatch::DuplicateField(name));
                }
            }
            slots
                .into_iter()
                .zip(defs)
                .map(|(slot, def)| slot.ok_or_else(|| ShapeMismatch::MissingField(def.name.to_string())))
                .collect()
        }

        (shape, payload) => Err(ShapeMismatch::WrongKind {
            expected: shape.kind_name(),
            found: payload.kind_name(),
        }),
    }
}

fn check_field(field: &str, expected: TypeTag, value: &Value) -> Result<(), ShapeMismatch> {
    if value.conforms_to(expected) {
        Ok(())
    } else {
        Err(ShapeMismatch::WrongFieldType {
            field: field.to_string(),
            expected: expected.to_string(),
            found: value.type_name(),
        })
    }
}

impl VariantValue {
    /// The owning enum type.
    #[inline]
    pub fn enum_type(&self) -> EnumTypeHandle {
        self.ty
    }

    /// The discriminant (tag index into the type's variant list).
    #[inline]
    pub fn tag(&self) -> usize {
        self.tag
    }

    /// Name of the variant this value holds.
    #[inline]
    pub fn variant_name(&self) -> &'static str {
        self.descriptor().name()
    }

    /// Check whether this value holds `variant`.
    #[inline]
    pub fn is(&self, variant: &str) -> bool {
        self.variant_name() == variant
    }

    /// Descriptor selected by the discriminant.
    #[inline]
    pub fn descriptor(&self) -> &'static VariantDescriptor {
        // The tag was produced by `variant_by_name` on this same frozen type.
        &self.ty.get().variants()[self.tag]
    }

    /// Borrow the stored field values, if the value currently holds `variant`.
    ///
    /// Same checks as [`extract`](VariantValue::extract), without copying:
    /// fields come back in descriptor order, so index `i` conforms to the
    /// descriptor's field `i` (empty for a unit variant).
    pub fn extract_fields(&self, variant: &str) -> Result<&[Value], ValueError> {
        self.check_variant(variant)?;
        Ok(&self.fields)
    }

    /// Read the payload, if the value currently holds `variant`.
    ///
    /// Never returns a default: asking for any other variant is an error.
    pub fn extract(&self, variant: &str) -> Result<Payload, ValueError> {
        self.check_variant(variant)?;
        Ok(self.to_payload())
    }

    fn check_variant(&self, variant: &str) -> Result<(), ValueError> {
        let Some(expected) = self.ty.variant_index(variant) else {
            return Err(ValueError::UnknownVariant {
                type_name: self.ty.name().to_string(),
                variant: variant.to_string(),
            });
        };
        if expected != self.tag {
            return Err(ValueError::VariantMismatch {
                type_name: self.ty.name().to_string(),
                expected: variant.to_string(),
                actual: self.variant_name().to_string(),
            });
        }
        Ok(())
    }

    fn to_payload(&self) -> Payload {
        match self.descriptor().shape() {
            PayloadShape::Unit => Payload::Unit,
            PayloadShape::Positional(_) => Payload::Positional(self.fields.to_vec()),
            PayloadShape::Named(defs) => Payload::Named(
                defs.iter()
                    .zip(self.fields.iter())
                    .map(|(def, value)| (def.name.to_string(), value.clone()))
                    .collect(),
            ),
        }
    }
}

impl PartialEq for VariantValue {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.tag == other.tag && self.fields == other.fields
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let descriptor = self.descriptor();
        f.write_str(descriptor.name())?;
        match descriptor.shape() {
            PayloadShape::Unit => Ok(()),
            PayloadShape::Positional(_) => {
                f.write_str("(")?;
                for (i, value) in self.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(")")
            }
            PayloadShape::Named(defs) => {
                f.write_str(" { ")?;
                for (i, (def, value)) in defs.iter().zip(self.fields.iter()).enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {value}", def.name)?;
                }
                f.write_str(" }")
            }
        }
    }
}

impl fmt::Debug for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{self}", self.ty.name())
    }
}
