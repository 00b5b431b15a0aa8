//! Option errors.

use sumi_match::MatchError;
use sumi_types::RegistryError;
use sumi_value::ValueError;

/// Error produced by option instantiation, construction, or a combinator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("`{type_name}` is not an option type")]
    NotAnOption { type_name: String },

    #[error("expected a value of type `{expected}`, found `{found}`")]
    TypeMismatch { expected: String, found: String },

    #[error("called `unwrap` on an `Absent` value of `{type_name}`")]
    UnwrapAbsent { type_name: String },
}
