//! Option combinators.
//!
//! Every combinator checks that its first argument is an option value, then
//! matches it with a `Present(value)` arm and an `Absent` arm.

use sumi_match::{evaluate, BinderSpec, MatchArms, MatchError};
use sumi_value::{Value, VariantValue};

use crate::{OptionError, OptionType};

/// Binder name for the `Present` payload.
const VALUE: &str = "value";

/// Match `option` with one arm per variant.
///
/// `option` must already be known to be an option value.
fn dispatch<'a, R: 'a>(
    option: &VariantValue,
    present: impl FnOnce(Value) -> R + 'a,
    absent: impl FnOnce() -> R + 'a,
) -> Result<R, OptionError> {
    let arms: MatchArms<'a, Result<R, MatchError>> = MatchArms::new()
        .on(
            OptionType::PRESENT,
            BinderSpec::positional([VALUE]),
            move |mut bindings| bindings.take(VALUE).map(present),
        )
        .on(OptionType::ABSENT, BinderSpec::Ignore, move |_| Ok(absent()));

    let outcome = evaluate(option, arms)?;
    Ok(outcome?)
}

/// Fail unless `value` is an instance of `expected`.
fn ensure_instance(expected: OptionType, value: &VariantValue) -> Result<(), OptionError> {
    if expected.is_instance(value) {
        Ok(())
    } else {
        Err(OptionError::TypeMismatch {
            expected: expected.name().to_string(),
            found: value.enum_type().name().to_string(),
        })
    }
}

/// `Present(v)` becomes `Present(f(v))` in `into`; `Absent` becomes `into`'s
/// `Absent` without calling `f`.
///
/// The result of `f` must conform to `into`'s inner type.
pub fn map(
    option: &VariantValue,
    into: OptionType,
    f: impl FnOnce(Value) -> Value,
) -> Result<VariantValue, OptionError> {
    OptionType::of_value(option)?;
    dispatch(option, |value| into.present(f(value)), || into.absent())?
}

/// `Present(v)` becomes `f(v)`; `Absent` becomes `into`'s `Absent` without
/// calling `f`.
///
/// `f` must return an instance of `into`; anything else is a `TypeMismatch`.
pub fn and_then(
    option: &VariantValue,
    into: OptionType,
    f: impl FnOnce(Value) -> Result<VariantValue, OptionError>,
) -> Result<VariantValue, OptionError> {
    OptionType::of_value(option)?;
    dispatch(
        option,
        |value| {
            let chained = f(value)?;
            ensure_instance(into, &chained)?;
            Ok(chained)
        },
        || into.absent(),
    )?
}

/// The `Present` payload, or `default` for `Absent`.
///
/// `default` is checked against the inner type even when it goes unused.
pub fn unwrap_or(option: &VariantValue, default: impl Into<Value>) -> Result<Value, OptionError> {
    let ty = OptionType::of_value(option)?;
    let default = default.into();
    if !default.conforms_to(ty.inner_tag()) {
        return Err(OptionError::TypeMismatch {
            expected: ty.inner_tag().to_string(),
            found: default.type_name(),
        });
    }
    dispatch(option, |value| value, move || default)
}

/// `option` itself if `Present`, otherwise `alternative`.
///
/// `alternative` must be of the same option type.
pub fn or_else(
    option: &VariantValue,
    alternative: VariantValue,
) -> Result<VariantValue, OptionError> {
    let ty = OptionType::of_value(option)?;
    ensure_instance(ty, &alternative)?;
    dispatch(option, |_| option.clone(), move || alternative)
}

pub fn is_present(option: &VariantValue) -> Result<bool, OptionError> {
    OptionType::of_value(option)?;
    dispatch(option, |_| true, || false)
}

pub fn is_absent(option: &VariantValue) -> Result<bool, OptionError> {
    is_present(option).map(|present| !present)
}

/// The `Present` payload. Fails with `UnwrapAbsent` on `Absent`.
pub fn unwrap(option: &VariantValue) -> Result<Value, OptionError> {
    let ty = OptionType::of_value(option)?;
    dispatch(option, Ok, || {
        Err(OptionError::UnwrapAbsent {
            type_name: ty.name().to_string(),
        })
    })?
}

/// Convert to a native `Option`, the inverse of [`OptionType::wrap`].
pub fn into_native(option: &VariantValue) -> Result<Option<Value>, OptionError> {
    OptionType::of_value(option)?;
    dispatch(option, Some, || None)
}
