//! Arm-list validation and dispatch plans.
//!
//! `compile` walks the arm shapes once, in order, and fills a dense
//! tag -> arm table. The checks mirror what a compiler reports for a
//! `match` expression:
//!
//! 1. **Unknown variants**: an arm names a variant the type does not have.
//! 2. **Duplicate arms**: a variant is named by two arms.
//! 3. **Dead arms**: any arm after a wildcard.
//! 4. **Binder mismatches**: binders that do not fit the variant's fields.
//! 5. **Non-exhaustive matches**: variants left uncovered with no wildcard.

use std::sync::Arc;

use sumi_types::{EnumTypeHandle, PayloadShape, TypeId, VariantDescriptor};
use sumi_value::VariantValue;

use crate::arm::PLACEHOLDER;
use crate::{ArmPattern, ArmShape, BinderIssue, BinderSpec, Bindings, MatchError};

/// A validated arm list, compiled against one enum type.
#[derive(Debug)]
pub struct DispatchPlan {
    ty: EnumTypeHandle,
    /// Tag index -> arm index.
    table: Box<[usize]>,
    /// Arm index -> resolved binders.
    binders: Box<[CompiledBinder]>,
}

/// Binders resolved against a descriptor.
#[derive(Debug)]
enum CompiledBinder {
    Ignore,
    Whole(Arc<str>),
    /// `(storage position, binding name)` for every non-placeholder binder.
    Fields(Vec<(usize, Arc<str>)>),
}

impl DispatchPlan {
    /// Type this plan was compiled against.
    #[inline]
    pub fn enum_type(&self) -> EnumTypeHandle {
        self.ty
    }

    /// Identity of that type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.ty.id()
    }

    /// Arm that fires for a tag.
    #[inline]
    pub fn arm_for_tag(&self, tag: usize) -> Option<usize> {
        self.table.get(tag).copied()
    }

    /// Number of arms in the validated list.
    #[inline]
    pub fn arm_count(&self) -> usize {
        self.binders.len()
    }

    /// Bind `value`'s payload for `arm`.
    ///
    /// The payload is borrowed through `extract_fields`. Only the bound
    /// positions are cloned; placeholders cost nothing.
    pub(crate) fn bind(&self, arm: usize, value: &VariantValue) -> Result<Bindings, MatchError> {
        let variant = value.variant_name();
        let mut bindings = Bindings::new(variant);

        match self.binders.get(arm) {
            None | Some(CompiledBinder::Ignore) => {}
            Some(CompiledBinder::Whole(name)) => {
                bindings.push(Arc::clone(name), value.clone().into());
            }
            Some(CompiledBinder::Fields(fields)) => {
                let stored = value.extract_fields(variant)?;
                for (position, name) in fields {
                    let field = stored.get(*position).ok_or_else(|| MatchError::UnboundName {
                        name: name.to_string(),
                    })?;
                    bindings.push(Arc::clone(name), field.clone());
                }
            }
        }

        Ok(bindings)
    }
}

/// Validate an arm list against `ty` and compile it into a dispatch plan.
///
/// Pure: depends only on the type and the arm shapes.
#[tracing::instrument(level = "trace", skip_all, fields(type_name = ty.name(), arms = shapes.len()))]
pub fn compile(ty: EnumTypeHandle, shapes: &[ArmShape]) -> Result<DispatchPlan, MatchError> {
    let mut table: Vec<Option<usize>> = vec![None; ty.variant_count()];
    let mut binders = Vec::with_capacity(shapes.len());
    let mut wildcard: Option<usize> = None;

    for (arm_index, shape) in shapes.iter().enumerate() {
        if let Some(wildcard_index) = wildcard {
            return Err(MatchError::UnreachableArmAfterWildcard {
                type_name: ty.name().to_string(),
                arm_index,
                wildcard_index,
            });
        }

        match &shape.pattern {
            ArmPattern::Variant(name) => {
                let Some((tag, descriptor)) = ty.get().variant_by_name(name) else {
                    return Err(MatchError::UnknownArmVariant {
                        type_name: ty.name().to_string(),
                        variant: name.to_string(),
                        arm_index,
                    });
                };
                if let Some(first) = table[tag] {
                    return Err(MatchError::DuplicateArm {
                        type_name: ty.name().to_string(),
                        variant: name.to_string(),
                        first,
                        second: arm_index,
                    });
                }
                let compiled = compile_binders(Some(descriptor), &shape.binders)
                    .map_err(|issue| binder_mismatch(ty, name, issue))?;
                table[tag] = Some(arm_index);
                binders.push(compiled);
            }
            ArmPattern::Wildcard => {
                let compiled = compile_binders(None, &shape.binders)
                    .map_err(|issue| binder_mismatch(ty, PLACEHOLDER, issue))?;
                wildcard = Some(arm_index);
                binders.push(compiled);
            }
        }
    }

    let table: Box<[usize]> = match wildcard {
        Some(wildcard_index) => {
            if table.iter().all(Option::is_some) {
                tracing::debug!(
                    type_name = ty.name(),
                    wildcard_index,
                    "wildcard arm covers no remaining variants"
                );
            }
            table
                .into_iter()
                .map(|slot| slot.unwrap_or(wildcard_index))
                .collect()
        }
        None => {
            let missing: Vec<String> = table
                .iter()
                .zip(ty.variant_names())
                .filter(|(slot, _)| slot.is_none())
                .map(|(_, name)| name.to_string())
                .collect();
            if !missing.is_empty() {
                return Err(MatchError::NonExhaustiveMatch {
                    type_name: ty.name().to_string(),
                    missing,
                });
            }
            table.into_iter().flatten().collect()
        }
    };

    Ok(DispatchPlan {
        ty,
        table,
        binders: binders.into_boxed_slice(),
    })
}

fn binder_mismatch(ty: EnumTypeHandle, variant: &str, issue: BinderIssue) -> MatchError {
    MatchError::BinderMismatch {
        type_name: ty.name().to_string(),
        variant: variant.to_string(),
        issue,
    }
}

/// Resolve a binder spec against a descriptor (`None` for a wildcard arm).
fn compile_binders(
    descriptor: Option<&VariantDescriptor>,
    spec: &BinderSpec,
) -> Result<CompiledBinder, BinderIssue> {
    match spec {
        BinderSpec::Ignore => Ok(CompiledBinder::Ignore),
        BinderSpec::Whole(name) if &**name == PLACEHOLDER => Ok(CompiledBinder::Ignore),
        BinderSpec::Whole(name) => Ok(CompiledBinder::Whole(Arc::from(&**name))),

        BinderSpec::Positional(names) => {
            let descriptor = descriptor.ok_or(BinderIssue::WildcardFields)?;
            let PayloadShape::Positional(types) = descriptor.shape() else {
                return Err(BinderIssue::PositionalOnNonPositional {
                    shape: descriptor.shape().kind_name(),
                });
            };
            if names.len() != types.len() {
                return Err(BinderIssue::PositionalArity {
                    expected: types.len(),
                    found: names.len(),
                });
            }
            let fields = names
                .iter()
                .enumerate()
                .filter(|(_, name)| &***name != PLACEHOLDER)
                .map(|(position, name)| (position, Arc::from(&**name)))
                .collect();
            distinct_bindings(fields)
        }

        BinderSpec::Named(pairs) => {
            let descriptor = descriptor.ok_or(BinderIssue::WildcardFields)?;
            let shape = descriptor.shape();
            let Some(defs) = shape.named_fields() else {
                return Err(BinderIssue::NamedOnNonNamed {
                    shape: shape.kind_name(),
                });
            };

            let mut seen = vec![false; defs.len()];
            let mut fields = Vec::with_capacity(pairs.len());
            for (field, binding) in pairs {
                let position = shape
                    .field_index(field)
                    .ok_or_else(|| BinderIssue::UnknownField(field.to_string()))?;
                if std::mem::replace(&mut seen[position], true) {
                    return Err(BinderIssue::DuplicateField(field.to_string()));
                }
                if &**binding != PLACEHOLDER {
                    fields.push((position, Arc::from(&**binding)));
                }
            }
            if let Some(def) = defs.iter().zip(&seen).find(|(_, seen)| !**seen).map(|(d, _)| d) {
                return Err(BinderIssue::MissingField(def.name.to_string()));
            }
            distinct_bindings(fields)
        }
    }
}

fn distinct_bindings(fields: Vec<(usize, Arc<str>)>) -> Result<CompiledBinder, BinderIssue> {
    for (i, (_, name)) in fields.iter().enumerate() {
        if fields[..i].iter().any(|(_, earlier)| earlier == name) {
            return Err(BinderIssue::DuplicateBinding(name.to_string()));
        }
    }
    Ok(CompiledBinder::Fields(fields))
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests;
