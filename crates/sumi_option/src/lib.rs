//! Sumi Option - the built-in optional-value type.
//!
//! `OptionType::of(T)` yields the enum type `{Present(T), Absent}`, registered
//! through the ordinary variant registry the first time `T` is used. One
//! instantiation exists per distinct `T`; `Option<int>` and `Option<text>`
//! are unrelated types, and neither is interchangeable with `T` itself.
//!
//! The combinators are plain functions taking the option value first. Each
//! one dispatches through the match engine with exactly two arms,
//! `Present` and `Absent`; nothing here reads a payload any other way.

mod combinators;
mod error;
mod option_type;

pub use combinators::{
    and_then, into_native, is_absent, is_present, map, or_else, unwrap, unwrap_or,
};
pub use error::OptionError;
pub use option_type::OptionType;
