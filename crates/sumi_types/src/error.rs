//! Registration errors.
//!
//! A failed registration leaves the process-wide table untouched: every
//! check runs before the write lock is taken.

/// Error returned by [`register`](crate::register).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("enum type `{type_name}` declares variant `{variant}` more than once")]
    DuplicateVariantName { type_name: String, variant: String },

    #[error("enum type `{type_name}` is already registered")]
    DuplicateTypeName { type_name: String },

    #[error("enum type name must not be empty")]
    EmptyTypeName,

    #[error("`{type_name}` is reserved: type names cannot be a scalar type name or contain `<` or `>`")]
    ReservedTypeName { type_name: String },

    #[error("enum type `{type_name}` has a variant with an empty name")]
    EmptyVariantName { type_name: String },

    #[error("enum type `{type_name}` must declare at least one variant")]
    NoVariants { type_name: String },

    #[error(
        "variant `{type_name}::{variant}` declares an empty field list (use a unit variant instead)"
    )]
    EmptyFieldList { type_name: String, variant: String },

    #[error("variant `{type_name}::{variant}` declares field `{field}` more than once")]
    DuplicateFieldName {
        type_name: String,
        variant: String,
        field: String,
    },
}
