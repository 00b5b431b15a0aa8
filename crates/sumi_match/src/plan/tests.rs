use super::*;
use crate::MatchArms;
use pretty_assertions::assert_eq;
use sumi_types::{register, TypeTag};

// The registry is process-wide: every test registers its own type names.

fn abc(name: &str) -> EnumTypeHandle {
    register(
        name,
        [
            VariantDescriptor::unit("A"),
            VariantDescriptor::unit("B"),
            VariantDescriptor::unit("C"),
        ],
    )
    .expect("should register")
}

fn shapes(arms: &MatchArms<'_, ()>) -> Vec<ArmShape> {
    arms.shapes()
}

fn unit_arm(name: &str) -> ArmShape {
    ArmShape {
        pattern: ArmPattern::Variant(name.into()),
        binders: BinderSpec::Ignore,
    }
}

fn wildcard() -> ArmShape {
    ArmShape {
        pattern: ArmPattern::Wildcard,
        binders: BinderSpec::Ignore,
    }
}

fn shaped(name: &str) -> EnumTypeHandle {
    register(
        name,
        [
            VariantDescriptor::unit("Quit"),
            VariantDescriptor::named("Move", [("x", TypeTag::Int), ("y", TypeTag::Int)]),
            VariantDescriptor::positional("Write", [TypeTag::Text]),
            VariantDescriptor::positional("ChangeColor", [TypeTag::Int; 3]),
        ],
    )
    .expect("should register")
}

fn binder_issue(ty: EnumTypeHandle, arm: ArmShape) -> BinderIssue {
    let mut arms = vec![arm];
    arms.push(wildcard());
    match compile(ty, &arms) {
        Err(MatchError::BinderMismatch { issue, .. }) => issue,
        other => panic!("expected BinderMismatch, got {other:?}"),
    }
}

// Coverage

#[test]
fn missing_variant_is_reported() {
    let ty = abc("PlanTestMissing");
    let err = compile(ty, &[unit_arm("A"), unit_arm("B")]).expect_err("C is uncovered");
    assert_eq!(
        err,
        MatchError::NonExhaustiveMatch {
            type_name: "PlanTestMissing".to_string(),
            missing: vec!["C".to_string()],
        }
    );
}

#[test]
fn missing_variants_are_reported_in_declaration_order() {
    let ty = abc("PlanTestMissingOrder");
    let err = compile(ty, &[unit_arm("B")]).expect_err("A and C are uncovered");
    assert_eq!(
        err.to_string(),
        "non-exhaustive match on `PlanTestMissingOrder`: missing A, C"
    );
}

#[test]
fn full_coverage_compiles_to_a_dense_table() {
    let ty = abc("PlanTestFull");
    let plan = compile(ty, &[unit_arm("C"), unit_arm("A"), unit_arm("B")]).expect("exhaustive");

    assert_eq!(plan.arm_count(), 3);
    assert_eq!(plan.arm_for_tag(0), Some(1));
    assert_eq!(plan.arm_for_tag(1), Some(2));
    assert_eq!(plan.arm_for_tag(2), Some(0));
    assert_eq!(plan.arm_for_tag(3), None);
    assert_eq!(plan.type_id(), ty.id());
}

#[test]
fn wildcard_covers_the_rest() {
    let ty = abc("PlanTestWildcard");
    let plan = compile(ty, &[unit_arm("A"), wildcard()]).expect("wildcard covers B and C");

    assert_eq!(plan.arm_for_tag(0), Some(0));
    assert_eq!(plan.arm_for_tag(1), Some(1));
    assert_eq!(plan.arm_for_tag(2), Some(1));
}

#[test]
fn lone_wildcard_is_exhaustive() {
    let ty = abc("PlanTestLoneWildcard");
    let plan = compile(ty, &[wildcard()]).expect("wildcard alone is exhaustive");
    assert!((0..3).all(|tag| plan.arm_for_tag(tag) == Some(0)));
}

#[test]
fn empty_arm_list_reports_every_variant() {
    let ty = abc("PlanTestEmpty");
    assert!(matches!(
        compile(ty, &[]),
        Err(MatchError::NonExhaustiveMatch { missing, .. }) if missing == ["A", "B", "C"]
    ));
}

// Duplicate and dead arms

#[test]
fn duplicate_arm_is_rejected() {
    let ty = abc("PlanTestDuplicate");
    let err = compile(
        ty,
        &[unit_arm("A"), unit_arm("A"), unit_arm("B"), unit_arm("C")],
    )
    .expect_err("A is listed twice");
    assert_eq!(
        err,
        MatchError::DuplicateArm {
            type_name: "PlanTestDuplicate".to_string(),
            variant: "A".to_string(),
            first: 0,
            second: 1,
        }
    );
}

#[test]
fn arm_after_wildcard_is_unreachable() {
    let ty = abc("PlanTestUnreachable");
    let err = compile(ty, &[unit_arm("A"), wildcard(), unit_arm("C")])
        .expect_err("C after wildcard is dead");
    assert_eq!(
        err,
        MatchError::UnreachableArmAfterWildcard {
            type_name: "PlanTestUnreachable".to_string(),
            arm_index: 2,
            wildcard_index: 1,
        }
    );

    // A second wildcard is just as dead.
    assert!(matches!(
        compile(ty, &[wildcard(), wildcard()]),
        Err(MatchError::UnreachableArmAfterWildcard { arm_index: 1, .. })
    ));
}

#[test]
fn unknown_arm_variant_is_rejected() {
    let ty = abc("PlanTestUnknown");
    let err = compile(ty, &[unit_arm("A"), unit_arm("D"), wildcard()]).expect_err("no D");
    assert_eq!(
        err,
        MatchError::UnknownArmVariant {
            type_name: "PlanTestUnknown".to_string(),
            variant: "D".to_string(),
            arm_index: 1,
        }
    );
}

#[test]
fn validation_ignores_bodies() {
    let ty = abc("PlanTestBodies");
    let arms: MatchArms<'_, ()> = MatchArms::new()
        .on("A", BinderSpec::Ignore, |_| ())
        .otherwise(BinderSpec::Ignore, |_| ());
    assert_eq!(shapes(&arms), vec![unit_arm("A"), wildcard()]);
    assert!(compile(ty, &shapes(&arms)).is_ok());
}

// Binders

#[test]
fn positional_binders_must_match_arity() {
    let ty = shaped("PlanTestPositionalArity");
    let arm = ArmShape {
        pattern: ArmPattern::Variant("ChangeColor".into()),
        binders: BinderSpec::positional(["r", "g"]),
    };
    assert_eq!(
        binder_issue(ty, arm),
        BinderIssue::PositionalArity {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn binders_must_match_the_payload_kind() {
    let ty = shaped("PlanTestBinderKind");

    let positional_on_named = ArmShape {
        pattern: ArmPattern::Variant("Move".into()),
        binders: BinderSpec::positional(["x", "y"]),
    };
    assert_eq!(
        binder_issue(ty, positional_on_named),
        BinderIssue::PositionalOnNonPositional { shape: "named" }
    );

    let named_on_positional = ArmShape {
        pattern: ArmPattern::Variant("Write".into()),
        binders: BinderSpec::fields(["text"]),
    };
    assert_eq!(
        binder_issue(ty, named_on_positional),
        BinderIssue::NamedOnNonNamed {
            shape: "positional"
        }
    );

    let positional_on_unit = ArmShape {
        pattern: ArmPattern::Variant("Quit".into()),
        binders: BinderSpec::positional(["q"]),
    };
    assert_eq!(
        binder_issue(ty, positional_on_unit),
        BinderIssue::PositionalOnNonPositional { shape: "unit" }
    );
}

#[test]
fn named_binders_must_name_every_field_once() {
    let ty = shaped("PlanTestNamedFields");
    let arm = |binders| ArmShape {
        pattern: ArmPattern::Variant("Move".into()),
        binders,
    };

    assert_eq!(
        binder_issue(ty, arm(BinderSpec::fields(["x"]))),
        BinderIssue::MissingField("y".to_string())
    );
    assert_eq!(
        binder_issue(ty, arm(BinderSpec::fields(["x", "y", "z"]))),
        BinderIssue::UnknownField("z".to_string())
    );
    assert_eq!(
        binder_issue(ty, arm(BinderSpec::named([("x", "a"), ("x", "b"), ("y", "c")]))),
        BinderIssue::DuplicateField("x".to_string())
    );
    // `_` ignores a field but still counts as naming it.
    assert!(compile(
        ty,
        &[arm(BinderSpec::named([("x", "x"), ("y", "_")])), wildcard()]
    )
    .is_ok());
}

#[test]
fn binding_names_must_be_distinct() {
    let ty = shaped("PlanTestDistinct");
    let arm = ArmShape {
        pattern: ArmPattern::Variant("ChangeColor".into()),
        binders: BinderSpec::positional(["c", "_", "c"]),
    };
    assert_eq!(
        binder_issue(ty, arm),
        BinderIssue::DuplicateBinding("c".to_string())
    );

    let placeholders = ArmShape {
        pattern: ArmPattern::Variant("ChangeColor".into()),
        binders: BinderSpec::positional(["_", "_", "b"]),
    };
    assert!(compile(ty, &[placeholders, wildcard()]).is_ok());
}

#[test]
fn wildcard_cannot_destructure() {
    let ty = shaped("PlanTestWildcardBinders");
    let err = compile(
        ty,
        &[ArmShape {
            pattern: ArmPattern::Wildcard,
            binders: BinderSpec::positional(["a"]),
        }],
    )
    .expect_err("wildcard spans differently shaped variants");
    assert_eq!(
        err,
        MatchError::BinderMismatch {
            type_name: "PlanTestWildcardBinders".to_string(),
            variant: "_".to_string(),
            issue: BinderIssue::WildcardFields,
        }
    );

    let whole = ArmShape {
        pattern: ArmPattern::Wildcard,
        binders: BinderSpec::whole("msg"),
    };
    assert!(compile(ty, &[whole]).is_ok());
}

#[test]
fn binder_errors_surface_before_coverage_errors() {
    // Binder problems are found while walking arms; coverage is checked last.
    let ty = shaped("PlanTestErrorOrder");
    let err = compile(
        ty,
        &[ArmShape {
            pattern: ArmPattern::Variant("Write".into()),
            binders: BinderSpec::positional(["a", "b"]),
        }],
    )
    .expect_err("bad binders");
    assert!(matches!(err, MatchError::BinderMismatch { .. }));
}

#[test]
fn shape_display() {
    assert_eq!(unit_arm("Quit").to_string(), "Quit(..)");
    assert_eq!(wildcard().to_string(), "_");
    let whole = ArmShape {
        pattern: ArmPattern::Wildcard,
        binders: BinderSpec::whole("m"),
    };
    assert_eq!(whole.to_string(), "m @ _");
    let named = ArmShape {
        pattern: ArmPattern::Variant("Move".into()),
        binders: BinderSpec::named([("x", "x"), ("y", "py")]),
    };
    assert_eq!(named.to_string(), "Move { x, y: py }");
    let positional = ArmShape {
        pattern: ArmPattern::Variant("V4".into()),
        binders: BinderSpec::positional(["a", "b", "c", "d"]),
    };
    assert_eq!(positional.to_string(), "V4(a, b, c, d)");
}
