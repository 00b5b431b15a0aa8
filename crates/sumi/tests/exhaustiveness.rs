//! Arm-list validation through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::cell::Cell;

use pretty_assertions::assert_eq;
use sumi::{
    construct_unit, evaluate, register, validate, BinderIssue, BinderSpec, EnumTypeHandle, Error,
    MatchArms, MatchError, TypeTag, VariantDescriptor,
};

fn traffic_light(name: &str) -> EnumTypeHandle {
    register(
        name,
        [
            VariantDescriptor::unit("Red"),
            VariantDescriptor::unit("Amber"),
            VariantDescriptor::unit("Green"),
            VariantDescriptor::positional("Flashing", [TypeTag::Int]),
        ],
    )
    .expect("should register")
}

#[test]
fn missing_variants_are_listed_in_declaration_order() {
    let ty = traffic_light("ExhaustivenessMissing");
    let arms = MatchArms::<()>::new()
        .on("Green", BinderSpec::Ignore, |_| ())
        .on("Red", BinderSpec::Ignore, |_| ());

    assert_eq!(
        validate(ty, &arms).map(|_| ()),
        Err(MatchError::NonExhaustiveMatch {
            type_name: "ExhaustivenessMissing".to_string(),
            missing: vec!["Amber".to_string(), "Flashing".to_string()],
        })
    );
}

#[test]
fn no_body_runs_when_validation_fails() {
    let ty = traffic_light("ExhaustivenessNoBody");
    let red = construct_unit(ty, "Red").expect("Red");
    let ran = Cell::new(false);

    let arms = MatchArms::new().on("Red", BinderSpec::Ignore, |_| ran.set(true));
    let err = evaluate(&red, arms).expect_err("Red alone is not exhaustive");

    assert!(!ran.get());
    assert!(matches!(err, MatchError::NonExhaustiveMatch { .. }));
}

#[test]
fn a_wildcard_completes_coverage() {
    let ty = traffic_light("ExhaustivenessWildcard");
    let amber = construct_unit(ty, "Amber").expect("Amber");

    let arms = MatchArms::new()
        .on("Red", BinderSpec::Ignore, |_| "stop")
        .otherwise(BinderSpec::Ignore, |_| "go carefully");

    assert_eq!(evaluate(&amber, arms), Ok("go carefully"));
}

#[test]
fn duplicate_arms_are_rejected() {
    let ty = traffic_light("ExhaustivenessDuplicate");
    let arms = MatchArms::<()>::new()
        .on("Red", BinderSpec::Ignore, |_| ())
        .on("Amber", BinderSpec::Ignore, |_| ())
        .on("Red", BinderSpec::Ignore, |_| ())
        .otherwise(BinderSpec::Ignore, |_| ());

    assert_eq!(
        validate(ty, &arms).map(|_| ()),
        Err(MatchError::DuplicateArm {
            type_name: "ExhaustivenessDuplicate".to_string(),
            variant: "Red".to_string(),
            first: 0,
            second: 2,
        })
    );
}

#[test]
fn arms_after_a_wildcard_are_unreachable() {
    let ty = traffic_light("ExhaustivenessUnreachable");
    let arms = MatchArms::<()>::new()
        .on("Red", BinderSpec::Ignore, |_| ())
        .otherwise(BinderSpec::Ignore, |_| ())
        .on("Green", BinderSpec::Ignore, |_| ());

    assert_eq!(
        validate(ty, &arms).map(|_| ()),
        Err(MatchError::UnreachableArmAfterWildcard {
            type_name: "ExhaustivenessUnreachable".to_string(),
            arm_index: 2,
            wildcard_index: 1,
        })
    );
}

#[test]
fn arms_must_name_real_variants() {
    let ty = traffic_light("ExhaustivenessUnknown");
    let arms = MatchArms::<()>::new()
        .on("Blue", BinderSpec::Ignore, |_| ())
        .otherwise(BinderSpec::Ignore, |_| ());

    assert_eq!(
        validate(ty, &arms).map(|_| ()),
        Err(MatchError::UnknownArmVariant {
            type_name: "ExhaustivenessUnknown".to_string(),
            variant: "Blue".to_string(),
            arm_index: 0,
        })
    );
}

#[test]
fn binders_must_fit_the_variant() {
    let ty = traffic_light("ExhaustivenessBinders");
    let arms = MatchArms::<()>::new()
        .on("Flashing", BinderSpec::positional(["rate", "phase"]), |_| ())
        .otherwise(BinderSpec::Ignore, |_| ());

    let err = validate(ty, &arms).map(|_| ()).expect_err("arity 1");

    assert_eq!(
        err,
        MatchError::BinderMismatch {
            type_name: "ExhaustivenessBinders".to_string(),
            variant: "Flashing".to_string(),
            issue: BinderIssue::PositionalArity {
                expected: 1,
                found: 2,
            },
        }
    );
    assert!(matches!(Error::from(err), Error::Match(_)));
}

#[test]
fn arm_lists_are_checked_against_the_type_not_the_value() {
    let lights = traffic_light("ExhaustivenessTypeA");
    let other = register(
        "ExhaustivenessTypeB",
        [VariantDescriptor::unit("Red"), VariantDescriptor::unit("Off")],
    )
    .expect("should register");

    let arms = MatchArms::<()>::new()
        .on("Red", BinderSpec::Ignore, |_| ())
        .on("Off", BinderSpec::Ignore, |_| ());

    assert!(validate(other, &arms).is_ok());
    assert!(matches!(
        validate(lights, &arms),
        Err(MatchError::UnknownArmVariant { arm_index: 1, .. })
    ));
}
