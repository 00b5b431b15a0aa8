//! Match errors.
//!
//! Validation errors describe a defect in the arm list. The engine never
//! patches them, for example by inserting an implicit default arm.

use sumi_value::ValueError;

/// Error produced by arm-list validation or dispatch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("non-exhaustive match on `{type_name}`: missing {}", .missing.join(", "))]
    NonExhaustiveMatch {
        type_name: String,
        /// Uncovered variant names, in declaration order.
        missing: Vec<String>,
    },

    #[error("variant `{type_name}::{variant}` is matched by arm {first} and again by arm {second}")]
    DuplicateArm {
        type_name: String,
        variant: String,
        first: usize,
        second: usize,
    },

    #[error("arm {arm_index} on `{type_name}` is unreachable: the wildcard at arm {wildcard_index} already matches everything")]
    UnreachableArmAfterWildcard {
        type_name: String,
        arm_index: usize,
        wildcard_index: usize,
    },

    #[error("arm {arm_index} names `{variant}`, which is not a variant of `{type_name}`")]
    UnknownArmVariant {
        type_name: String,
        variant: String,
        arm_index: usize,
    },

    #[error("binders for `{type_name}::{variant}` do not match its fields: {issue}")]
    BinderMismatch {
        type_name: String,
        /// Variant name, or `_` for a wildcard arm.
        variant: String,
        issue: BinderIssue,
    },

    #[error("no binding named `{name}` in this arm")]
    UnboundName { name: String },

    #[error("binding `{name}` holds `{found}`, not `{expected}`")]
    BindingType {
        name: String,
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Why a binder spec does not fit a variant descriptor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BinderIssue {
    #[error("expected {expected} positional binder(s), found {found}")]
    PositionalArity { expected: usize, found: usize },

    #[error("positional binders cannot destructure a {shape} variant")]
    PositionalOnNonPositional { shape: &'static str },

    #[error("named binders cannot destructure a {shape} variant")]
    NamedOnNonNamed { shape: &'static str },

    #[error("no field named `{0}`")]
    UnknownField(String),

    #[error("field `{0}` is bound more than once")]
    DuplicateField(String),

    #[error("field `{0}` is not bound (use `_` to ignore it)")]
    MissingField(String),

    #[error("name `{0}` is introduced more than once")]
    DuplicateBinding(String),

    #[error("a wildcard arm can only ignore the value or bind it whole")]
    WildcardFields,
}
