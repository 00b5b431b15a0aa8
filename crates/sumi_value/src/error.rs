//! Construction and extraction errors.
//!
//! All errors are recoverable: the caller gets the error back and may retry
//! with corrected input.

/// Error produced while constructing or reading a variant value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("enum type `{type_name}` has no variant named `{variant}`")]
    UnknownVariant { type_name: String, variant: String },

    #[error("payload does not fit `{type_name}::{variant}`: {reason}")]
    PayloadShapeMismatch {
        type_name: String,
        variant: String,
        reason: ShapeMismatch,
    },

    #[error("expected `{type_name}::{expected}`, but the value holds `{type_name}::{actual}`")]
    VariantMismatch {
        type_name: String,
        expected: String,
        actual: String,
    },
}

/// Why a payload does not fit a variant descriptor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeMismatch {
    #[error("expected a {expected} payload, found a {found} payload")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected {expected} field(s), found {found}")]
    WrongArity { expected: usize, found: usize },

    #[error("field `{field}` expects `{expected}`, found `{found}`")]
    WrongFieldType {
        field: String,
        expected: String,
        found: String,
    },

    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{0}` supplied more than once")]
    DuplicateField(String),
}
